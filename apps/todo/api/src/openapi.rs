use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(axum_helpers::ErrorResponse)),
    info(
        title = "Todo API",
        version = "0.1.0",
        description = "Create, list, update and delete tasks"
    )
)]
pub struct ApiDoc;

/// The service document with every domain's paths merged in.
pub fn document() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(domain_tasks::TasksApiDoc::openapi());
    doc
}
