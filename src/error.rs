//! Error kinds surfaced to the presentation layer.
//!
//! The statistics aggregation itself never fails on well-formed input; every
//! variant here originates either in user input or in the playlist fetch.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The playlist URL or identifier could not be understood.
    #[error("invalid playlist URL: {0}")]
    InvalidInput(String),

    /// Spotify could not be reached or refused our credentials.
    #[error("could not connect to Spotify: {0}")]
    UpstreamUnavailable(String),

    #[error("playlist {0} was not found")]
    NotFound(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl AppError {
    /// Whether the error is an expected condition with a dedicated user
    /// message, as opposed to a generic failure that also gets logged.
    pub fn is_expected(&self) -> bool {
        !matches!(self, AppError::Unexpected(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return AppError::Unexpected(err.to_string());
        }
        AppError::UpstreamUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Unexpected(err.to_string())
    }
}

/// Violations of the invariants of [`crate::model::Song`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("song {0} has no artists")]
    NoArtists(String),
}
