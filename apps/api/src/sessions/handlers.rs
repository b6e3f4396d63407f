//! Axum route handlers for session lifecycle and portfolio edits.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::portfolio::PortfolioSchema;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct DisplayNameResponse {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetDisplayNameRequest {
    pub name: String,
}

/// POST /api/v1/sessions
///
/// Creates a fresh session with a seeded conversation and no portfolio.
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<Json<CreateSessionResponse>, AppError> {
    let session_id = state.sessions.create().await;
    tracing::info!("Created session {session_id}");
    Ok(Json(CreateSessionResponse { session_id }))
}

/// GET /api/v1/sessions/:id/name
pub async fn handle_get_name(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DisplayNameResponse>, AppError> {
    let name = state.sessions.display_name(id).await?;
    Ok(Json(DisplayNameResponse { name }))
}

/// PUT /api/v1/sessions/:id/name
///
/// Stores the user's display name so the welcome prompt can be skipped.
/// This is the only value the system keeps beyond the portfolio itself.
pub async fn handle_set_name(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SetDisplayNameRequest>,
) -> Result<StatusCode, AppError> {
    let name = request.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    state.sessions.set_display_name(id, name).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/sessions/:id/portfolio
pub async fn handle_get_portfolio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PortfolioSchema>, AppError> {
    let portfolio = state.sessions.portfolio(id).await?.ok_or_else(|| {
        AppError::NotFound(
            "No portfolio yet. Finish the chat or upload a resume first.".to_string(),
        )
    })?;
    Ok(Json(portfolio))
}

/// PUT /api/v1/sessions/:id/portfolio
///
/// Full-replacement edit. The body is a complete schema; it runs through the
/// same defaulting pass as the extraction paths and unconditionally wins any
/// race with an in-flight extraction.
pub async fn handle_put_portfolio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(schema): Json<PortfolioSchema>,
) -> Result<Json<PortfolioSchema>, AppError> {
    let schema = schema.normalized();
    state
        .sessions
        .commit_portfolio(id, schema.clone(), None)
        .await?;
    Ok(Json(schema))
}
