use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    /// Raw LaTeX source
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentCreate {
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub template_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial update: only fields present (non-null) in the request are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

impl From<DocumentCreate> for Document {
    fn from(req: DocumentCreate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: req.title,
            content: req.content,
            template_id: req.template_id,
            created_at: now,
            updated_at: now,
            tags: req.tags,
            is_public: false,
            metadata: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_fills_defaults() {
        let req: DocumentCreate = serde_json::from_value(json!({ "title": "Thesis" })).unwrap();
        assert_eq!(req.content, "");
        assert!(req.tags.is_empty());
        assert!(req.template_id.is_none());

        let document = Document::from(req);
        assert_eq!(document.title, "Thesis");
        assert!(!document.is_public);
        assert!(document.metadata.is_empty());
        assert_eq!(document.created_at, document.updated_at);
    }

    #[test]
    fn generated_ids_are_unique() {
        let req: DocumentCreate =
            serde_json::from_value(json!({ "title": "A", "content": "x" })).unwrap();
        let first = Document::from(req.clone());
        let second = Document::from(req);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn update_treats_null_and_missing_as_absent() {
        let update: DocumentUpdate =
            serde_json::from_value(json!({ "title": "New", "content": null })).unwrap();
        assert_eq!(update.title.as_deref(), Some("New"));
        assert!(update.content.is_none());
        assert!(update.tags.is_none());
        assert!(update.metadata.is_none());
    }
}
