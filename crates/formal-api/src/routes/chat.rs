use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use formal_persist::{ChatMessage, ChatRequest};

use crate::{error::ApiResult, state::AppState};

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub suggestions: Vec<String>,
}

/// The canned reply returned until a real AI integration lands. Request
/// content is ignored on purpose.
pub(crate) fn placeholder_response() -> ChatResponse {
    ChatResponse {
        message: "AI integration coming soon! This is a placeholder response.".to_string(),
        suggestions: vec![
            "Try adding some mathematical equations with \\begin{equation}".to_string(),
            "Consider using \\section{} to organize your content".to_string(),
            "Use \\textbf{} for bold text and \\textit{} for italic text".to_string(),
        ],
    }
}

/// Handle AI chat requests - placeholder until the AI integration lands
#[utoipa::path(
    post,
    path = "/api/chat",
    responses(
        (status = 200, description = "Fixed placeholder reply"),
        (status = 500, description = "Store failure")
    ),
    tag = "chat"
)]
pub async fn chat_with_ai(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    let response = placeholder_response();

    // Stored as a plain string until the reply gains real structure
    let stored = serde_json::to_string(&response)?;
    let message = ChatMessage::new(
        req.document_id,
        req.message,
        stored,
        req.context.unwrap_or_default(),
    );
    state.persist.chat().save_message(&message).await?;

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_reply_is_fixed() {
        let first = placeholder_response();
        let second = placeholder_response();

        assert_eq!(first.message, second.message);
        assert_eq!(first.suggestions, second.suggestions);
        assert_eq!(first.suggestions.len(), 3);
        assert!(first.message.contains("placeholder"));
    }

    #[test]
    fn placeholder_reply_serializes_for_storage() {
        let stored = serde_json::to_string(&placeholder_response()).unwrap();
        assert!(stored.contains("\"message\""));
        assert!(stored.contains("\"suggestions\""));
    }
}
