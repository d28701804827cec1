//! Axum route handlers for the analysis API.

use axum::{
    extract::{multipart::MultipartRejection, FromRequest, Multipart, State},
    Json,
};
use bytes::Bytes;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use tracing::info;

use crate::analysis::answer_scoring::{score_answer, AnswerReport};
use crate::analysis::question_selector::{select_questions, QuestionSet};
use crate::analysis::resume_match::{match_resume, MatchReport};
use crate::analysis::transcription::{score_voice_answer, VoiceAnswerReport};
use crate::config::Config;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// JSON body extractor whose rejections surface as `AppError::InvalidInput`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Missing text fields deserialize as empty strings and degrade to baseline scores.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzeResumeRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InterviewQuestionsRequest {
    pub job_description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InterviewAnswerRequest {
    pub question: String,
    pub user_answer: String,
    pub job_description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ai/analyze
///
/// Scores resume text against a job description and lists keyword gaps.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AnalyzeResumeRequest>,
) -> Result<Json<MatchReport>, AppError> {
    let limit = state.config.max_text_chars;
    ensure_within_limit("resumeText", &request.resume_text, limit)?;
    ensure_within_limit("jobDescription", &request.job_description, limit)?;

    let report = match_resume(&request.resume_text, &request.job_description)?;
    Ok(Json(report))
}

/// POST /api/v1/ai/interview-questions
///
/// Picks up to five technical and five behavioral questions for the job.
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<InterviewQuestionsRequest>,
) -> Result<Json<QuestionSet>, AppError> {
    ensure_within_limit(
        "jobDescription",
        &request.job_description,
        state.config.max_text_chars,
    )?;

    let mut rng = question_rng(&state.config);
    let questions = select_questions(&state.question_bank, &request.job_description, &mut rng);
    Ok(Json(questions))
}

/// POST /api/v1/ai/interview-answer
///
/// Scores a typed interview answer.
pub async fn handle_interview_answer(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<InterviewAnswerRequest>,
) -> Result<Json<AnswerReport>, AppError> {
    let limit = state.config.max_text_chars;
    ensure_within_limit("question", &request.question, limit)?;
    ensure_within_limit("userAnswer", &request.user_answer, limit)?;
    ensure_within_limit("jobDescription", &request.job_description, limit)?;

    Ok(Json(score_answer(
        &request.question,
        &request.user_answer,
        &request.job_description,
    )))
}

/// POST /api/v1/ai/voice-answer
///
/// Multipart upload: `audio` (required), `question`, `jobDescription`.
/// The recording is transcribed, then scored like a typed answer.
pub async fn handle_voice_answer(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<VoiceAnswerReport>, AppError> {
    let mut multipart = multipart.map_err(|r| AppError::InvalidInput(r.body_text()))?;

    let mut audio: Option<Bytes> = None;
    let mut question = String::new();
    let mut job_description = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "audio" => audio = Some(field.bytes().await?),
            "question" => question = field.text().await?,
            "jobDescription" => job_description = field.text().await?,
            _ => {}
        }
    }

    let audio = audio
        .filter(|a| !a.is_empty())
        .ok_or_else(|| AppError::InvalidInput("No audio file uploaded".to_string()))?;

    let limit = state.config.max_text_chars;
    ensure_within_limit("question", &question, limit)?;
    ensure_within_limit("jobDescription", &job_description, limit)?;

    info!(audio_bytes = audio.len(), "Scoring voice answer");
    let report =
        score_voice_answer(state.transcriber.as_ref(), &question, audio, &job_description).await?;
    Ok(Json(report))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn ensure_within_limit(field: &str, text: &str, max_chars: usize) -> Result<(), AppError> {
    if text.chars().count() > max_chars {
        return Err(AppError::InvalidInput(format!(
            "{field} exceeds the maximum length of {max_chars} characters"
        )));
    }
    Ok(())
}

/// Per-request generator: seeded when `QUESTION_SEED` is set, entropy otherwise.
fn question_rng(config: &Config) -> StdRng {
    match config.question_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_within_limit() {
        assert!(ensure_within_limit("resumeText", "abc", 3).is_ok());
        let err = ensure_within_limit("resumeText", "abcd", 3).unwrap_err();
        assert!(err.to_string().contains("resumeText"));
    }

    #[test]
    fn test_limit_counts_chars_not_bytes() {
        assert!(ensure_within_limit("question", "ééé", 3).is_ok());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let request: AnalyzeResumeRequest =
            serde_json::from_str(r#"{"jobDescription": "Rust"}"#).unwrap();
        assert!(request.resume_text.is_empty());
        assert_eq!(request.job_description, "Rust");
    }

    #[test]
    fn test_non_string_field_is_rejected() {
        let parsed = serde_json::from_str::<InterviewAnswerRequest>(r#"{"userAnswer": 42}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        use rand::Rng;
        let config = Config {
            question_seed: Some(9),
            ..Config::default()
        };
        let a: u64 = question_rng(&config).gen();
        let b: u64 = question_rng(&config).gen();
        assert_eq!(a, b);
    }
}
