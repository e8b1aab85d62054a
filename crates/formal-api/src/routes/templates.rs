use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use formal_persist::Template;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct ListTemplatesQuery {
    pub category: Option<String>,
}

/// List all templates, optionally filtered by category, sorted by name
#[utoipa::path(
    get,
    path = "/api/templates",
    responses(
        (status = 200, description = "Templates sorted by name"),
        (status = 500, description = "Store failure")
    ),
    tag = "templates"
)]
pub async fn list_templates(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListTemplatesQuery>,
) -> ApiResult<Json<Vec<Template>>> {
    let templates = state
        .persist
        .templates()
        .list_templates(query.category.as_deref())
        .await?;
    Ok(Json(templates))
}

/// Get a specific template by ID
#[utoipa::path(
    get,
    path = "/api/templates/{template_id}",
    responses(
        (status = 200, description = "The template"),
        (status = 404, description = "Template not found")
    ),
    tag = "templates"
)]
pub async fn get_template(
    State(state): State<Arc<AppState>>,
    Path(template_id): Path<String>,
) -> ApiResult<Json<Template>> {
    let template = state
        .persist
        .templates()
        .get_template(&template_id)
        .await?
        .ok_or(ApiError::TemplateNotFound(template_id))?;
    Ok(Json(template))
}
