use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One persisted chat request/response pair. The referenced document is a
/// weak reference: it is never validated against the documents collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub document_id: String,
    pub message: String,
    pub response: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub context: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub document_id: String,
    pub message: String,
    pub context: Option<HashMap<String, serde_json::Value>>,
}

impl ChatMessage {
    pub fn new(
        document_id: String,
        message: String,
        response: String,
        context: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            document_id,
            message,
            response,
            timestamp: Utc::now(),
            context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_context_is_optional() {
        let req: ChatRequest = serde_json::from_value(json!({
            "document_id": "doc-1",
            "message": "help me with equations"
        }))
        .unwrap();
        assert!(req.context.is_none());

        let message = ChatMessage::new(
            req.document_id,
            req.message,
            "stored response".to_string(),
            req.context.unwrap_or_default(),
        );
        assert!(!message.id.is_empty());
        assert!(message.context.is_empty());
        assert_eq!(message.document_id, "doc-1");
    }
}
