pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    let audio_limit = state.config.max_audio_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/ai/analyze", post(handlers::handle_analyze_resume))
        .route(
            "/api/v1/ai/interview-questions",
            post(handlers::handle_interview_questions),
        )
        .route(
            "/api/v1/ai/interview-answer",
            post(handlers::handle_interview_answer),
        )
        .route(
            "/api/v1/ai/voice-answer",
            post(handlers::handle_voice_answer).layer(DefaultBodyLimit::max(audio_limit)),
        )
        .fallback(not_found)
        .with_state(state)
}
