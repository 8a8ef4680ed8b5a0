use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid input: expected a version string, found {found}")]
    InvalidInput { found: String },

    #[error("Version string is empty")]
    Empty,
}
