//! Axum route handlers for resume upload and extraction progress.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::resume::pipeline::run_extraction;
use crate::resume::progress::{ProgressReporter, ProgressUpdate};
use crate::state::AppState;

/// POST /api/v1/sessions/:id/resume
///
/// Accepts a multipart upload with a single `file` field and starts the
/// extraction in the background. Responds 202 immediately; the client polls
/// the progress endpoint. Only one extraction may run per session at a time.
pub async fn handle_resume_upload(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let mut bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        // Declared MIME type is checked before the body is read at all.
        if field.content_type() != Some("application/pdf") {
            return Err(AppError::Validation(
                "Please upload a PDF file".to_string(),
            ));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        bytes = Some(data.to_vec());
        break;
    }

    let bytes = bytes
        .ok_or_else(|| AppError::Validation("Missing 'file' field in upload".to_string()))?;

    if bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    let (reporter, rx) = ProgressReporter::channel();
    let start_rev = state.sessions.begin_extraction(id, rx).await?;
    info!("Resume extraction started for session {id} ({} bytes)", bytes.len());

    let sessions = state.sessions.clone();
    let model = state.model.clone();
    tokio::spawn(async move {
        match run_extraction(model.as_ref(), &bytes, &reporter).await {
            Ok(schema) => {
                // Conditional commit: a user edit since upload wins the race.
                match sessions.commit_portfolio(id, schema, Some(start_rev)).await {
                    Ok(_) => {
                        info!("Resume extraction committed for session {id}");
                        reporter.complete();
                    }
                    Err(e) => {
                        warn!("Discarding extraction result for session {id}: {e}");
                        reporter.complete();
                    }
                }
            }
            Err(e) => {
                error!("Resume extraction failed for session {id}: {e}");
                reporter.fail(&e.user_message());
            }
        }
        sessions.finish_extraction(id).await;
    });

    Ok((
        StatusCode::ACCEPTED,
        Json(json!({ "status": "processing" })),
    ))
}

/// GET /api/v1/sessions/:id/resume/progress
///
/// Latest progress snapshot of the current (or most recent) extraction.
pub async fn handle_resume_progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProgressUpdate>, AppError> {
    let update = state.sessions.progress(id).await?.ok_or_else(|| {
        AppError::NotFound("No extraction has been started for this session".to_string())
    })?;
    Ok(Json(update))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::config::Config;
    use crate::llm_client::{ConversationModel, LlmError};
    use crate::routes::build_router;
    use crate::sessions::{ConversationSession, SessionStore};
    use crate::state::AppState;

    /// Counts document-understanding calls; everything fails fast.
    #[derive(Default)]
    struct CountingModel {
        document_calls: AtomicUsize,
    }

    #[async_trait]
    impl ConversationModel for CountingModel {
        async fn send_message(
            &self,
            _session: &mut ConversationSession,
            _text: &str,
        ) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }

        async fn extract_document(
            &self,
            _encoded_bytes: &str,
            _mime_type: &str,
            _instruction: &str,
        ) -> Result<String, LlmError> {
            self.document_calls.fetch_add(1, Ordering::SeqCst);
            Err(LlmError::EmptyContent)
        }

        async fn extract_structured(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    fn test_config() -> Config {
        Config {
            gemini_api_key: None,
            port: 0,
            rust_log: "info".to_string(),
        }
    }

    async fn test_app() -> (axum::Router, SessionStore, Arc<CountingModel>, Uuid) {
        let sessions = SessionStore::new();
        let id = sessions.create().await;
        let model = Arc::new(CountingModel::default());
        let app = build_router(AppState {
            sessions: sessions.clone(),
            model: model.clone(),
            config: test_config(),
            render_capability: None,
        });
        (app, sessions, model, id)
    }

    fn upload_request(session_id: Uuid, field_name: &str, content_type: &str) -> Request<Body> {
        let boundary = "folio-test-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"{field_name}\"; filename=\"resume.bin\"\r\n\
             Content-Type: {content_type}\r\n\r\n\
             definitely not a pdf\r\n\
             --{boundary}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri(format!("/api/v1/sessions/{session_id}/resume"))
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_non_pdf_upload_rejected_before_any_model_call() {
        let (app, _sessions, model, id) = test_app().await;

        let response = app
            .oneshot(upload_request(id, "file", "text/plain"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["message"], "Please upload a PDF file");

        assert_eq!(model.document_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_upload_without_file_field_rejected() {
        let (app, _sessions, model, id) = test_app().await;

        let response = app
            .oneshot(upload_request(id, "attachment", "application/pdf"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(model.document_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_rejected_upload_leaves_session_available() {
        let (app, sessions, _model, id) = test_app().await;

        let response = app
            .oneshot(upload_request(id, "file", "text/plain"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // The in-flight guard was never taken, so a later upload may start.
        let (_reporter, rx) = crate::resume::progress::ProgressReporter::channel();
        assert!(sessions.begin_extraction(id, rx).await.is_ok());
    }

    #[tokio::test]
    async fn test_pdf_upload_is_accepted() {
        let (app, _sessions, _model, id) = test_app().await;

        let response = app
            .oneshot(upload_request(id, "file", "application/pdf"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }
}
