//! The resume extraction pipeline.
//!
//! PDF bytes → raw text → cleaned text → structured JSON → normalized schema,
//! with a stage update published at each transition. Text extraction runs a
//! three-tier fallback: the document-understanding model first, then a real
//! PDF text parse, then raw byte harvesting. Every tier's output must clear
//! the same minimum-length gate before it counts.

use base64::Engine;
use thiserror::Error;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, ConversationModel, LlmError};
use crate::models::portfolio::PortfolioSchema;
use crate::resume::fallback::harvest_text;
use crate::resume::progress::{ProgressReporter, Stage};
use crate::resume::prompts::resume_parse_prompt;

/// Extracted text shorter than this is treated as no text at all. Scanned
/// images and encrypted files typically yield a handful of stray characters.
const MIN_TEXT_CHARS: usize = 50;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("extraction failed: {0}")]
    Extraction(String),

    #[error("model output was not valid JSON: {0}")]
    Parse(String),

    #[error("model call failed: {0}")]
    Model(#[from] LlmError),
}

impl PipelineError {
    /// The message shown to the user. Names the likely causes and always
    /// points at the chat flow as the way forward.
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::Extraction(_) => "Could not read enough text from this PDF. It may be \
                a scanned image, encrypted or password-protected, or corrupted. You can continue \
                building your portfolio through the chat instead."
                .to_string(),
            PipelineError::Parse(_) => "The resume could not be converted into portfolio \
                sections. The format might be unusual. You can continue through the chat instead."
                .to_string(),
            PipelineError::Model(e) => format!(
                "The AI service could not process the resume ({e}). Check the API key or try \
                 again later. You can continue through the chat instead."
            ),
        }
    }
}

impl From<PipelineError> for AppError {
    fn from(e: PipelineError) -> Self {
        let message = e.user_message();
        match e {
            PipelineError::Extraction(_) => AppError::Extraction(message),
            PipelineError::Parse(_) => AppError::Parse(message),
            PipelineError::Model(_) => AppError::Model(message),
        }
    }
}

fn long_enough(text: &str) -> bool {
    text.chars().count() >= MIN_TEXT_CHARS
}

/// Tier 1+2+3 text extraction. Tries the model, then the PDF parser, then
/// byte harvesting; the first result clearing the length gate wins.
async fn extract_text(
    model: &dyn ConversationModel,
    bytes: &[u8],
) -> Result<String, PipelineError> {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);

    match model
        .extract_document(
            &encoded,
            "application/pdf",
            crate::llm_client::prompts::DOCUMENT_TEXT_INSTRUCTION,
        )
        .await
    {
        Ok(text) if long_enough(&text) => return Ok(text),
        Ok(text) => {
            warn!(
                "Model extraction returned only {} chars, falling back",
                text.chars().count()
            );
        }
        Err(e) => {
            warn!("Model extraction failed ({e}), falling back");
        }
    }

    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) if long_enough(&text) => {
            info!("PDF parser fallback produced {} chars", text.len());
            return Ok(text);
        }
        Ok(_) => {}
        Err(e) => {
            warn!("PDF parser fallback failed: {e}");
        }
    }

    let harvested = harvest_text(bytes);
    if long_enough(&harvested) {
        info!("Byte harvesting fallback produced {} chars", harvested.len());
        return Ok(harvested);
    }

    Err(PipelineError::Extraction(format!(
        "extracted text shorter than {MIN_TEXT_CHARS} characters on every tier"
    )))
}

/// Collapses whitespace runs so the structuring prompt stays compact.
fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Runs a full extraction for one uploaded resume.
pub async fn run_extraction(
    model: &dyn ConversationModel,
    bytes: &[u8],
    reporter: &ProgressReporter,
) -> Result<PortfolioSchema, PipelineError> {
    reporter.stage(Stage::Read);
    info!("Starting resume extraction, {} bytes", bytes.len());

    reporter.stage(Stage::ExtractText);
    let raw_text = extract_text(model, bytes).await?;

    reporter.stage(Stage::Clean);
    let cleaned = clean_text(&raw_text);

    reporter.stage(Stage::Analyze);
    let response = model
        .extract_structured(&resume_parse_prompt(&cleaned))
        .await?;

    reporter.stage(Stage::Structure);
    let json = strip_json_fences(&response);
    let schema: PortfolioSchema = serde_json::from_str(json)
        .map_err(|e| PipelineError::Parse(e.to_string()))?;

    reporter.stage(Stage::Finalize);
    Ok(schema.normalized())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::sessions::ConversationSession;

    /// Scripted model: fixed responses per call kind, with call counters.
    struct MockModel {
        document_response: Result<String, ()>,
        structured_response: Result<String, ()>,
        document_calls: AtomicUsize,
        structured_calls: AtomicUsize,
    }

    impl MockModel {
        fn new(document: Result<&str, ()>, structured: Result<&str, ()>) -> Self {
            Self {
                document_response: document.map(str::to_string),
                structured_response: structured.map(str::to_string),
                document_calls: AtomicUsize::new(0),
                structured_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ConversationModel for MockModel {
        async fn send_message(
            &self,
            _session: &mut ConversationSession,
            _text: &str,
        ) -> Result<String, LlmError> {
            unimplemented!("pipeline never chats")
        }

        async fn extract_document(
            &self,
            _encoded_bytes: &str,
            _mime_type: &str,
            _instruction: &str,
        ) -> Result<String, LlmError> {
            self.document_calls.fetch_add(1, Ordering::SeqCst);
            self.document_response
                .clone()
                .map_err(|_| LlmError::EmptyContent)
        }

        async fn extract_structured(&self, _prompt: &str) -> Result<String, LlmError> {
            self.structured_calls.fetch_add(1, Ordering::SeqCst);
            self.structured_response
                .clone()
                .map_err(|_| LlmError::EmptyContent)
        }
    }

    fn text_of_len(n: usize) -> String {
        "x".repeat(n)
    }

    const VALID_JSON: &str = r#"{
        "name": "Jane Doe",
        "title": "Engineer",
        "bio": "Builds things.",
        "skills": ["Rust", "Go"],
        "experience": [],
        "projects": [],
        "education": [],
        "contact": {"email": "jane@example.com", "phone": "", "linkedin": "", "github": ""}
    }"#;

    #[tokio::test]
    async fn test_happy_path_produces_normalized_schema() {
        let model = MockModel::new(Ok(&text_of_len(200)), Ok(VALID_JSON));
        let (reporter, rx) = ProgressReporter::channel();

        let schema = run_extraction(&model, b"%PDF-1.4 ...", &reporter)
            .await
            .unwrap();

        assert_eq!(schema.name, "Jane Doe");
        // Empty sections came back normalized with placeholders.
        assert_eq!(schema.experience.len(), 1);
        assert_eq!(schema.education[0].degree, "Your Degree");
        assert_eq!(rx.borrow().stage, Stage::Finalize);
    }

    #[tokio::test]
    async fn test_text_below_floor_fails_extraction() {
        // 49 chars from the model, a non-PDF body for the other tiers.
        let model = MockModel::new(Ok(&text_of_len(49)), Ok(VALID_JSON));
        let (reporter, _rx) = ProgressReporter::channel();

        let err = run_extraction(&model, b"not a pdf", &reporter)
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::Extraction(_)));
        // Structuring never ran.
        assert_eq!(model.structured_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_text_at_floor_passes() {
        let model = MockModel::new(Ok(&text_of_len(50)), Ok(VALID_JSON));
        let (reporter, _rx) = ProgressReporter::channel();

        assert!(run_extraction(&model, b"not a pdf", &reporter).await.is_ok());
    }

    #[tokio::test]
    async fn test_model_failure_falls_back_to_byte_harvest() {
        let model = MockModel::new(Err(()), Ok(VALID_JSON));
        let (reporter, _rx) = ProgressReporter::channel();

        // Enough parenthesized literals to clear the floor after harvesting.
        let body = b"(Jane Doe resume with plenty of recoverable text) \
                     (Senior Software Engineer at Example Corp since 2019)";
        let schema = run_extraction(&model, body, &reporter).await.unwrap();

        assert_eq!(schema.name, "Jane Doe");
        assert_eq!(model.document_calls.load(Ordering::SeqCst), 1);
        assert_eq!(model.structured_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let model = MockModel::new(Ok(&text_of_len(200)), Ok("this is not json"));
        let (reporter, rx) = ProgressReporter::channel();

        let err = run_extraction(&model, b"%PDF", &reporter).await.unwrap_err();
        assert!(matches!(err, PipelineError::Parse(_)));
        assert_eq!(rx.borrow().stage, Stage::Structure);
    }

    #[tokio::test]
    async fn test_fenced_json_is_accepted() {
        let fenced = format!("```json\n{VALID_JSON}\n```");
        let model = MockModel::new(Ok(&text_of_len(200)), Ok(&fenced));
        let (reporter, _rx) = ProgressReporter::channel();

        let schema = run_extraction(&model, b"%PDF", &reporter).await.unwrap();
        assert_eq!(schema.name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_missing_keys_are_defaulted_not_fatal() {
        // No education or contact key at all.
        let partial = r#"{"name": "Sam", "title": "Dev", "bio": "", "skills": []}"#;
        let model = MockModel::new(Ok(&text_of_len(200)), Ok(partial));
        let (reporter, _rx) = ProgressReporter::channel();

        let schema = run_extraction(&model, b"%PDF", &reporter).await.unwrap();
        assert_eq!(schema.name, "Sam");
        assert_eq!(schema.education[0].institution, "Institution Name");
        assert_eq!(schema.skills, vec!["Add your skills".to_string()]);
    }

    #[test]
    fn test_user_messages_mention_chat_recovery() {
        let errors = [
            PipelineError::Extraction("x".to_string()),
            PipelineError::Parse("x".to_string()),
            PipelineError::Model(LlmError::EmptyContent),
        ];
        for e in errors {
            assert!(e.user_message().contains("chat"), "{e}");
        }
    }
}
