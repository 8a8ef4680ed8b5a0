use thiserror::Error;

use crate::version::VersionError;

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Release not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid release tag: {0}")]
    Version(#[from] VersionError),
}
