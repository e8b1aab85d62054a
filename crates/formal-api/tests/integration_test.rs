use axum::response::IntoResponse;
use axum::Json;

use formal_api::error::ApiError;
use formal_api::routes::{categories, health};

#[tokio::test]
async fn test_not_found_responses() {
    let error = ApiError::DocumentNotFound("missing-id".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);

    let error = ApiError::TemplateNotFound("missing-id".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_internal_error_hides_cause() {
    let error = ApiError::Internal("Internal server error".to_string());
    let response = error.into_response();
    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_persist_errors_map_to_api_errors() {
    use formal_persist::PersistError;

    let api: ApiError = PersistError::DocumentNotFound("abc".to_string()).into();
    assert!(matches!(api, ApiError::DocumentNotFound(_)));

    let api: ApiError = PersistError::Connection("refused".to_string()).into();
    assert!(matches!(api, ApiError::Internal(_)));
}

#[tokio::test]
async fn test_health_check_body() {
    let Json(body) = health::health_check().await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["message"], "Formal LaTeX Editor API is running");
}

#[tokio::test]
async fn test_categories_are_static() {
    let Json(body) = categories::get_template_categories().await;
    assert_eq!(body.categories.len(), 4);
    assert_eq!(body.categories[0].id, "academic");
    assert_eq!(body.categories[3].id, "personal");
}
