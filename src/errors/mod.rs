use thiserror::Error;

use crate::enums::completion_error::CompletionError;

/// Top-level error surfaced to the caller of the public operations.
///
/// Sub-stage failures (search, chord analysis, tutorial generation) are
/// recovered locally with fallback data and never reach this type; only the
/// outer orchestration wrapper and the configuration layer produce it.
#[derive(Debug, Error)]
pub enum CoachError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type CoachResult<T> = Result<T, CoachError>;
