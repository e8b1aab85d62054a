use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health_check,
        crate::routes::documents::create_document,
        crate::routes::documents::list_documents,
        crate::routes::documents::get_document,
        crate::routes::documents::update_document,
        crate::routes::documents::delete_document,
        crate::routes::templates::list_templates,
        crate::routes::templates::get_template,
        crate::routes::chat::chat_with_ai,
        crate::routes::categories::get_template_categories,
    ),
    tags(
        (name = "health", description = "Liveness"),
        (name = "documents", description = "LaTeX document CRUD"),
        (name = "templates", description = "Built-in and user templates"),
        (name = "chat", description = "AI assistant (placeholder)"),
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_covers_every_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/api/health"));
        assert!(paths.contains_key("/api/documents"));
        assert!(paths.contains_key("/api/documents/{document_id}"));
        assert!(paths.contains_key("/api/templates"));
        assert!(paths.contains_key("/api/templates/{template_id}"));
        assert!(paths.contains_key("/api/chat"));
        assert!(paths.contains_key("/api/categories"));
    }
}
