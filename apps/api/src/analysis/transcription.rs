//! Transcription: pluggable speech-to-text seam for voice answers.
//!
//! Default: `PlaceholderTranscriber` (no model, returns a fixed transcript).
//! `AppState` holds an `Arc<dyn Transcriber>`, swapped at startup.

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::answer_scoring::{score_answer, AnswerReport};
use crate::errors::AppError;

pub const PLACEHOLDER_TRANSCRIPT: &str = "This is a simulated transcription. Local NLP cannot transcribe audio without heavy models.";

/// Turns recorded audio into text. Implementations may be slow or fail;
/// failures are reported as `AppError::Transcription` and never scored.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: Bytes) -> Result<String, AppError>;
}

/// Stand-in transcriber for deployments without a speech-to-text backend.
pub struct PlaceholderTranscriber;

#[async_trait]
impl Transcriber for PlaceholderTranscriber {
    async fn transcribe(&self, audio: Bytes) -> Result<String, AppError> {
        if audio.is_empty() {
            return Err(AppError::InvalidInput("No audio file uploaded".to_string()));
        }
        warn!(
            audio_bytes = audio.len(),
            "Audio transcription requires an external service; returning placeholder transcript"
        );
        Ok(PLACEHOLDER_TRANSCRIPT.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceAnswerReport {
    pub transcription: String,
    #[serde(flatten)]
    pub report: AnswerReport,
}

/// Transcribes `audio` and scores the transcript like a typed answer.
pub async fn score_voice_answer(
    transcriber: &dyn Transcriber,
    question: &str,
    audio: Bytes,
    job_description: &str,
) -> Result<VoiceAnswerReport, AppError> {
    let transcription = transcriber.transcribe(audio).await?;
    let report = score_answer(question, &transcription, job_description);
    Ok(VoiceAnswerReport {
        transcription,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedTranscriber(&'static str);

    #[async_trait]
    impl Transcriber for FixedTranscriber {
        async fn transcribe(&self, _audio: Bytes) -> Result<String, AppError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingTranscriber;

    #[async_trait]
    impl Transcriber for FailingTranscriber {
        async fn transcribe(&self, _audio: Bytes) -> Result<String, AppError> {
            Err(AppError::Transcription("speech service unavailable".to_string()))
        }
    }

    fn audio() -> Bytes {
        Bytes::from_static(b"RIFF....WAVEfmt ")
    }

    #[tokio::test]
    async fn test_placeholder_returns_fixed_transcript() {
        let text = PlaceholderTranscriber.transcribe(audio()).await.unwrap();
        assert_eq!(text, PLACEHOLDER_TRANSCRIPT);
    }

    #[tokio::test]
    async fn test_placeholder_rejects_empty_audio() {
        let err = PlaceholderTranscriber
            .transcribe(Bytes::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_voice_answer_scores_transcript() {
        let transcriber = FixedTranscriber("I used closures to keep private counters in modules");
        let result = score_voice_answer(
            &transcriber,
            "Explain the concept of Closures.",
            audio(),
            "JavaScript developer",
        )
        .await
        .unwrap();
        assert_eq!(
            result.transcription,
            "I used closures to keep private counters in modules"
        );
        assert!((1..=10).contains(&result.report.score));
    }

    #[tokio::test]
    async fn test_empty_transcript_scores_zero() {
        let result = score_voice_answer(&FixedTranscriber("   "), "Q", audio(), "JD")
            .await
            .unwrap();
        assert_eq!(result.report.score, 0);
        assert_eq!(result.report.feedback, "Please provide an answer.");
    }

    #[tokio::test]
    async fn test_transcription_failure_propagates() {
        let err = score_voice_answer(&FailingTranscriber, "Q", audio(), "JD")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Transcription(_)));
    }

    #[tokio::test]
    async fn test_voice_report_flattens_answer_fields() {
        let result = score_voice_answer(&PlaceholderTranscriber, "Q", audio(), "JD")
            .await
            .unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("transcription").is_some());
        assert!(json.get("score").is_some());
        assert!(json.get("improvedAnswer").is_some());
    }
}
