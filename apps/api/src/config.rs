use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_MAX_TEXT_CHARS: usize = 50_000;
const DEFAULT_MAX_AUDIO_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON question bank to use instead of the built-in one.
    pub question_bank_path: Option<PathBuf>,
    /// Fixed seed for question shuffles. Unset means fresh entropy per request.
    pub question_seed: Option<u64>,
    /// Upper bound on any single text field handed to the analysis engine.
    pub max_text_chars: usize,
    pub max_audio_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            question_bank_path: None,
            question_seed: None,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
            max_audio_bytes: DEFAULT_MAX_AUDIO_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT")?.unwrap_or(defaults.port),
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            question_bank_path: std::env::var("QUESTION_BANK_PATH").ok().map(PathBuf::from),
            question_seed: parse_env("QUESTION_SEED")?,
            max_text_chars: parse_env("MAX_TEXT_CHARS")?.unwrap_or(defaults.max_text_chars),
            max_audio_bytes: parse_env("MAX_AUDIO_BYTES")?.unwrap_or(defaults.max_audio_bytes),
        })
    }
}

fn parse_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_text_chars, 50_000);
        assert!(config.question_seed.is_none());
        assert!(config.question_bank_path.is_none());
    }

    #[test]
    fn test_parse_env_missing_is_none() {
        let value: Option<u64> = parse_env("COACH_API_TEST_UNSET_VARIABLE").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("COACH_API_TEST_BAD_PORT", "not-a-port");
        let result: Result<Option<u16>> = parse_env("COACH_API_TEST_BAD_PORT");
        assert!(result.is_err());
        std::env::remove_var("COACH_API_TEST_BAD_PORT");
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("COACH_API_TEST_SEED", " 42 ");
        let value: Option<u64> = parse_env("COACH_API_TEST_SEED").unwrap();
        assert_eq!(value, Some(42));
        std::env::remove_var("COACH_API_TEST_SEED");
    }
}
