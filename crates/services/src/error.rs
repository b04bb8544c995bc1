//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::SessionError;

/// Errors emitted by a `QuestionProvider`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    #[error("question request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("could not decode questions: {0}")]
    Decode(reqwest::Error),
    #[error("question source unavailable: {0}")]
    Unavailable(String),
}

/// Errors emitted by `QuizController`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("failed to fetch questions: {0}")]
    Fetch(#[from] ProviderError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{name} must not be empty")]
    Empty { name: &'static str },
    #[error("invalid value for {name}: {raw}")]
    Invalid { name: &'static str, raw: String },
}
