//! Axum route handler for portfolio export.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::packaging::{archive_filename, build_archive};
use crate::render::render_site;
use crate::state::AppState;
use crate::templates::find_template;

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub template_id: String,
}

/// POST /api/v1/sessions/:id/export
///
/// Renders the session's portfolio with the chosen template and responds
/// with the zip archive. Packaging failure never touches the stored schema,
/// so a retry needs no re-extraction.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ExportRequest>,
) -> Result<(HeaderMap, Vec<u8>), AppError> {
    let schema = state.sessions.portfolio(id).await?.ok_or_else(|| {
        AppError::NotFound(
            "No portfolio yet. Finish the chat or upload a resume first.".to_string(),
        )
    })?;

    let template = find_template(&request.template_id).ok_or_else(|| {
        AppError::NotFound(format!("Unknown template '{}'", request.template_id))
    })?;

    let bundle = render_site(state.render_capability, template, &schema);
    let bytes = build_archive(&bundle)?;
    let filename = archive_filename(&schema.name);

    info!(
        "Exported session {id} with template {} ({} bytes)",
        template.id,
        bytes.len()
    );

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/zip"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
            .map_err(|e| AppError::Packaging(format!("Invalid download filename: {e}")))?,
    );

    Ok((headers, bytes))
}
