//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with the schema applied (feature: "postgres")
//! - `TestDataBuilder`: deterministic, per-test unique test data
//! - `assertions`: assertion helpers with contextual messages
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let title = builder.title("main");
//! }
//! ```

use uuid::Uuid;

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Deterministic test data seeded from the test name, so that tests sharing
/// one database never collide on values and reruns produce the same data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_task");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// An id no stored row will have unless a test inserts it.
    pub fn unknown_id(&self) -> Uuid {
        let bytes = self.seed.to_le_bytes();
        let mut uuid_bytes = [0u8; 16];
        uuid_bytes[..8].copy_from_slice(&bytes);
        uuid_bytes[8..16].copy_from_slice(&bytes);
        Uuid::from_bytes(uuid_bytes)
    }

    /// A task title unique to this builder; always within 100 characters.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let title = TestDataBuilder::new(7).title("main");
    /// assert_eq!(title, "test-task-7-main");
    /// ```
    pub fn title(&self, suffix: &str) -> String {
        format!("test-task-{}-{}", self.seed, suffix)
    }

    pub fn description(&self, suffix: &str) -> String {
        format!("description for {} ({})", self.title(suffix), suffix)
    }
}

/// Test assertion helpers
pub mod assertions {
    use uuid::Uuid;

    pub fn assert_uuid_eq(actual: Uuid, expected: Uuid, context: &str) {
        assert_eq!(
            actual, expected,
            "{}: expected UUID {}, got {}",
            context, expected, actual
        );
    }

    /// Assert `earlier <= later` for any ordered values, e.g. timestamps.
    pub fn assert_not_after<T: PartialOrd + std::fmt::Debug>(earlier: T, later: T, context: &str) {
        assert!(
            earlier <= later,
            "{}: expected {:?} <= {:?}",
            context,
            earlier,
            later
        );
    }
}
