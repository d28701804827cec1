mod analysis;
mod config;
mod errors;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::analysis::question_bank::QuestionBank;
use crate::analysis::transcription::PlaceholderTranscriber;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Coach API v{}", env!("CARGO_PKG_VERSION"));

    // Question bank is built once and shared read-only
    let question_bank = match &config.question_bank_path {
        Some(path) => {
            let bank = QuestionBank::load(path)?;
            info!("Question bank loaded from {}", path.display());
            bank
        }
        None => QuestionBank::builtin(),
    };
    info!(
        "Question bank ready ({} technology categories)",
        question_bank.technical_categories().len()
    );

    if let Some(seed) = config.question_seed {
        info!("Question selection seeded with {seed}; shuffles are reproducible");
    }

    // No speech-to-text backend is bundled
    let transcriber = Arc::new(PlaceholderTranscriber);

    let state = AppState {
        question_bank: Arc::new(question_bank),
        transcriber,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
