use std::path::PathBuf;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// The orchestration service's discuss endpoint.
    pub endpoint: String,
    /// Display name for Agent A. Presentation only; the transcript stores
    /// structural speaker tags.
    pub agent_a_name: String,
    /// Display name for Agent B.
    pub agent_b_name: String,
    /// Directory where received narration clips are written.
    pub voices_dir: PathBuf,
    /// Fixed phrase returned by the stand-in transcriber.
    pub voice_placeholder: String,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let endpoint = std::env::var("DISCAI_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:8000/agents/discuss".to_string());

        let agent_a_name = std::env::var("DISCAI_AGENT_A").unwrap_or_else(|_| "Mike".to_string());
        let agent_b_name = std::env::var("DISCAI_AGENT_B").unwrap_or_else(|_| "Mily".to_string());

        let voices_dir = std::env::var("DISCAI_VOICES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./narration"));

        let voice_placeholder = std::env::var("DISCAI_VOICE_PLACEHOLDER")
            .unwrap_or_else(|_| "This is what I said via voice input".to_string());

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            endpoint,
            agent_a_name,
            agent_b_name,
            voices_dir,
            voice_placeholder,
            log_level,
        })
    }
}
