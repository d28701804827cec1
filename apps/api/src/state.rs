use std::sync::Arc;

use crate::analysis::question_bank::QuestionBank;
use crate::analysis::transcription::Transcriber;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at startup and never mutated; read concurrently without locks.
    pub question_bank: Arc<QuestionBank>,
    /// Pluggable speech-to-text. Default: PlaceholderTranscriber.
    pub transcriber: Arc<dyn Transcriber>,
}
