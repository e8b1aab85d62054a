use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use formal_persist::PersistError;
use serde_json::json;
use thiserror::Error;

/// Client-visible failures. Everything unexpected collapses into
/// `Internal`: the cause is logged server-side and never echoed back.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("{0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<PersistError> for ApiError {
    fn from(err: PersistError) -> Self {
        match err {
            PersistError::DocumentNotFound(id) => ApiError::DocumentNotFound(id),
            PersistError::TemplateNotFound(id) => ApiError::TemplateNotFound(id),
            other => {
                tracing::error!("Persistence failure: {}", other);
                ApiError::Internal("Internal server error".to_string())
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Serialization failure: {}", err);
        ApiError::Internal("Internal server error".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::DocumentNotFound(_) | ApiError::TemplateNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
