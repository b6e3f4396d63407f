pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

/// Resume uploads are the only large bodies; typical resumes are well under
/// this.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

use crate::state::AppState;
use crate::{chat, packaging, resume, sessions, templates};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session lifecycle
        .route("/api/v1/sessions", post(sessions::handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id/name",
            get(sessions::handlers::handle_get_name).put(sessions::handlers::handle_set_name),
        )
        .route(
            "/api/v1/sessions/:id/portfolio",
            get(sessions::handlers::handle_get_portfolio)
                .put(sessions::handlers::handle_put_portfolio),
        )
        // Chat extraction path
        .route(
            "/api/v1/sessions/:id/chat",
            post(chat::handlers::handle_chat_message),
        )
        // Resume extraction path
        .route(
            "/api/v1/sessions/:id/resume",
            post(resume::handlers::handle_resume_upload)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route(
            "/api/v1/sessions/:id/resume/progress",
            get(resume::handlers::handle_resume_progress),
        )
        // Templates and export
        .route(
            "/api/v1/templates",
            get(templates::handlers::handle_list_templates),
        )
        .route(
            "/api/v1/sessions/:id/export",
            post(packaging::handlers::handle_export),
        )
        .with_state(state)
}
