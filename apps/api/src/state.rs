use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ConversationModel;
use crate::render::RenderCapability;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// The external model behind a trait object so tests can script it.
    pub model: Arc<dyn ConversationModel>,
    pub config: Config,
    /// Probed once at startup; decides direct vs family-fallback rendering.
    pub render_capability: Option<RenderCapability>,
}
