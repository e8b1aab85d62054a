use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use formal_persist::{Document, DocumentCreate, DocumentUpdate};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct ListDocumentsQuery {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    20
}

/// Create a new LaTeX document
#[utoipa::path(
    post,
    path = "/api/documents",
    responses(
        (status = 200, description = "Document created"),
        (status = 500, description = "Store failure")
    ),
    tag = "documents"
)]
pub async fn create_document(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DocumentCreate>,
) -> ApiResult<Json<Document>> {
    let document = state.persist.documents().create_document(req).await?;
    Ok(Json(document))
}

/// List documents with pagination, newest first
#[utoipa::path(
    get,
    path = "/api/documents",
    responses(
        (status = 200, description = "Documents sorted by creation time, newest first"),
        (status = 500, description = "Store failure")
    ),
    tag = "documents"
)]
pub async fn list_documents(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListDocumentsQuery>,
) -> ApiResult<Json<Vec<Document>>> {
    let documents = state
        .persist
        .documents()
        .list_documents(query.skip, query.limit)
        .await?;
    Ok(Json(documents))
}

/// Get a specific document by ID
#[utoipa::path(
    get,
    path = "/api/documents/{document_id}",
    responses(
        (status = 200, description = "The document"),
        (status = 404, description = "Document not found")
    ),
    tag = "documents"
)]
pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Path(document_id): Path<String>,
) -> ApiResult<Json<Document>> {
    let document = state
        .persist
        .documents()
        .get_document(&document_id)
        .await?
        .ok_or(ApiError::DocumentNotFound(document_id))?;
    Ok(Json(document))
}

/// Apply a partial update and return the updated document
#[utoipa::path(
    put,
    path = "/api/documents/{document_id}",
    responses(
        (status = 200, description = "The updated document"),
        (status = 404, description = "Document not found")
    ),
    tag = "documents"
)]
pub async fn update_document(
    State(state): State<Arc<AppState>>,
    Path(document_id): Path<String>,
    Json(update): Json<DocumentUpdate>,
) -> ApiResult<Json<Document>> {
    let document = state
        .persist
        .documents()
        .update_document(&document_id, update)
        .await?
        .ok_or(ApiError::DocumentNotFound(document_id))?;
    Ok(Json(document))
}

/// Delete a document
#[utoipa::path(
    delete,
    path = "/api/documents/{document_id}",
    responses(
        (status = 200, description = "Deletion confirmation"),
        (status = 404, description = "Document not found")
    ),
    tag = "documents"
)]
pub async fn delete_document(
    State(state): State<Arc<AppState>>,
    Path(document_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let deleted = state
        .persist
        .documents()
        .delete_document(&document_id)
        .await?;
    if !deleted {
        return Err(ApiError::DocumentNotFound(document_id));
    }

    Ok(Json(json!({ "message": "Document deleted successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_defaults() {
        let query: ListDocumentsQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(query.skip, 0);
        assert_eq!(query.limit, 20);
    }
}
