use std::path::PathBuf;

use thiserror::Error;

use crate::release::ReleaseError;
use crate::version::VersionError;

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("No release asset configured for platform {0}")]
    UnsupportedPlatform(String),

    #[error("Release has no asset named {0}")]
    MissingAsset(String),

    #[error("Executable not found after extraction: {0:?}")]
    MissingExecutable(PathBuf),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error(transparent)]
    Release(#[from] ReleaseError),

    #[error(transparent)]
    Version(#[from] VersionError),
}
