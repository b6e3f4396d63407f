//! Axum route handlers for the conversational extraction path.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::chat::extractor::extract_portfolio;
use crate::chat::suggestions::suggestions_for;
use crate::errors::AppError;
use crate::llm_client::prompts::COMPLETION_SENTINEL;
use crate::models::portfolio::PortfolioSchema;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub completed: bool,
    pub suggestions: Vec<String>,
    /// Present only when `completed` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<PortfolioSchema>,
}

/// POST /api/v1/sessions/:id/chat
///
/// Sends one user message through the model. When the reply carries the
/// completion sentinel, the transcript is extracted into a schema, committed
/// to the session, and returned alongside the (sentinel-stripped) reply.
///
/// Model failures are never fatal: they surface as a MODEL_ERROR the UI shows
/// inline, and the session stays usable.
pub async fn handle_chat_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let mut conversation = state.sessions.conversation(id).await?;

    let reply = state
        .model
        .send_message(&mut conversation, &request.text)
        .await
        .map_err(|e| AppError::Model(e.to_string()))?;

    state
        .sessions
        .store_conversation(id, conversation.clone())
        .await?;

    if reply.contains(COMPLETION_SENTINEL) {
        let visible_reply = reply.replace(COMPLETION_SENTINEL, "").trim().to_string();
        let schema = extract_portfolio(conversation.visible_transcript());
        state
            .sessions
            .commit_portfolio(id, schema.clone(), None)
            .await?;
        info!("Chat extraction complete for session {id}");

        return Ok(Json(ChatResponse {
            reply: visible_reply,
            completed: true,
            suggestions: vec![],
            portfolio: Some(schema),
        }));
    }

    let suggestions = suggestions_for(&reply)
        .iter()
        .map(|s| s.to_string())
        .collect();

    Ok(Json(ChatResponse {
        reply,
        completed: false,
        suggestions,
        portfolio: None,
    }))
}
