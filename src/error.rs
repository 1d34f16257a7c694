//! Error handling for the lyricloze application
//!
//! This module provides a hierarchical error system with user-friendly error
//! messages. A lyrics lookup that comes back empty is not an error; see
//! [`crate::core::services::LookupOutcome`] for that path.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClozeError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Lyrics(#[from] LyricsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API rate limit exceeded")]
    RateLimit,

    #[error("API response invalid: {reason}")]
    InvalidResponse { reason: String },

    #[error("Authentication failed")]
    Authentication,

    #[error("Unexpected status: {status}")]
    Status { status: reqwest::StatusCode },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config format: {0}")]
    InvalidFormat(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Failed to determine project directories")]
    NoProjectDirs,
}

#[derive(Error, Debug)]
pub enum LyricsError {
    #[error("Lyrics not found.")]
    NotFound,

    #[error("An error occurred: {reason}")]
    LookupFailed { reason: String },

    #[error("Please enter a song name.")]
    MissingSong,

    #[error("No lyrics text to mask")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, ClozeError>;

impl From<toml::de::Error> for ClozeError {
    fn from(err: toml::de::Error) -> Self {
        ClozeError::Config(ConfigError::InvalidFormat(err))
    }
}

impl From<toml::ser::Error> for ClozeError {
    fn from(err: toml::ser::Error) -> Self {
        ClozeError::Config(ConfigError::Serialize(err))
    }
}
