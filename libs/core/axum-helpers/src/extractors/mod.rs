//! Request extractors whose rejections are [`AppError`](crate::errors::AppError)s.

pub mod json_body;

pub use json_body::JsonBody;
