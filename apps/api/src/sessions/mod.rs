//! In-memory session state.
//!
//! A session exists only for the lifetime of the process (persistence is an
//! explicit non-goal); the only durable-ish value is the user's display name,
//! which lives exactly as long as the session does.
//!
//! All schema writes are serialized through [`SessionStore::commit_portfolio`]
//! so no torn write is ever observable, and the revision counter gives the
//! extraction pipeline a cheap way to detect that a user edit landed while it
//! was in flight.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{watch, RwLock};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::prompts::CHAT_SYSTEM_PROMPT;
use crate::models::portfolio::PortfolioSchema;
use crate::resume::progress::ProgressUpdate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Bot,
}

/// One turn of a conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Explicit, caller-owned conversation state. Replaces the hidden
/// module-global history array of the original design: the model client
/// appends to whatever session the caller hands it, nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSession {
    pub history: Vec<ChatTurn>,
}

impl ConversationSession {
    pub fn new() -> Self {
        let mut session = Self { history: vec![] };
        session.reset();
        session
    }

    /// Clears all history and re-seeds the priming prompt as the first user
    /// turn, the way the upstream chat API expects it.
    pub fn reset(&mut self) {
        self.history.clear();
        self.history.push(ChatTurn {
            role: TurnRole::User,
            content: CHAT_SYSTEM_PROMPT.to_string(),
            timestamp: Utc::now(),
        });
    }

    pub fn push_user(&mut self, content: &str) {
        self.history.push(ChatTurn {
            role: TurnRole::User,
            content: content.to_string(),
            timestamp: Utc::now(),
        });
    }

    pub fn push_bot(&mut self, content: &str) {
        self.history.push(ChatTurn {
            role: TurnRole::Bot,
            content: content.to_string(),
            timestamp: Utc::now(),
        });
    }

    /// The transcript without the priming prompt — what the user actually saw.
    pub fn visible_transcript(&self) -> &[ChatTurn] {
        if self.history.is_empty() {
            &self.history
        } else {
            &self.history[1..]
        }
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

struct Session {
    display_name: Option<String>,
    conversation: ConversationSession,
    portfolio: Option<PortfolioSchema>,
    portfolio_rev: u64,
    extraction_in_flight: bool,
    progress: Option<watch::Receiver<ProgressUpdate>>,
}

impl Session {
    fn new() -> Self {
        Self {
            display_name: None,
            conversation: ConversationSession::new(),
            portfolio: None,
            portfolio_rev: 0,
            extraction_in_flight: false,
            progress: None,
        }
    }
}

/// Shared handle to all live sessions.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.inner.write().await.insert(id, Session::new());
        id
    }

    pub async fn display_name(&self, id: Uuid) -> Result<Option<String>, AppError> {
        let sessions = self.inner.read().await;
        let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
        Ok(session.display_name.clone())
    }

    pub async fn set_display_name(&self, id: Uuid, name: String) -> Result<(), AppError> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        session.display_name = Some(name);
        Ok(())
    }

    pub async fn conversation(&self, id: Uuid) -> Result<ConversationSession, AppError> {
        let sessions = self.inner.read().await;
        let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
        Ok(session.conversation.clone())
    }

    pub async fn store_conversation(
        &self,
        id: Uuid,
        conversation: ConversationSession,
    ) -> Result<(), AppError> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        session.conversation = conversation;
        Ok(())
    }

    pub async fn portfolio(&self, id: Uuid) -> Result<Option<PortfolioSchema>, AppError> {
        let sessions = self.inner.read().await;
        let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
        Ok(session.portfolio.clone())
    }

    /// The single schema mutation entry point.
    ///
    /// `expected_rev: None` is an unconditional write (user edits, chat
    /// extraction) and always bumps the revision. `Some(rev)` is a
    /// conditional write used by the PDF pipeline: it only lands if no other
    /// write happened since the pipeline captured `rev` — a late-arriving
    /// extraction result must not clobber a newer user edit.
    pub async fn commit_portfolio(
        &self,
        id: Uuid,
        schema: PortfolioSchema,
        expected_rev: Option<u64>,
    ) -> Result<u64, AppError> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;

        if let Some(expected) = expected_rev {
            if session.portfolio_rev != expected {
                return Err(AppError::Conflict(format!(
                    "Portfolio was edited while extraction was running (rev {} != {})",
                    session.portfolio_rev, expected
                )));
            }
        }

        session.portfolio = Some(schema);
        session.portfolio_rev += 1;
        Ok(session.portfolio_rev)
    }

    /// Marks an extraction as in flight and returns the portfolio revision at
    /// initiation. Rejects while another extraction is running — the model
    /// calls are slow and concurrent runs would race on conversation state.
    pub async fn begin_extraction(
        &self,
        id: Uuid,
        progress: watch::Receiver<ProgressUpdate>,
    ) -> Result<u64, AppError> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;

        if session.extraction_in_flight {
            return Err(AppError::Conflict(
                "A resume extraction is already in progress for this session. \
                 Wait for it to finish before uploading another file."
                    .to_string(),
            ));
        }

        session.extraction_in_flight = true;
        session.progress = Some(progress);
        Ok(session.portfolio_rev)
    }

    pub async fn finish_extraction(&self, id: Uuid) {
        let mut sessions = self.inner.write().await;
        if let Some(session) = sessions.get_mut(&id) {
            session.extraction_in_flight = false;
        }
    }

    /// Latest progress update of the current (or most recent) extraction.
    pub async fn progress(&self, id: Uuid) -> Result<Option<ProgressUpdate>, AppError> {
        let sessions = self.inner.read().await;
        let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
        Ok(session.progress.as_ref().map(|rx| rx.borrow().clone()))
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}
