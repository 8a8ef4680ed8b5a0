//! Release discovery and download
//!
//! # Modules
//!
//! - [`source`]: `ReleaseSource` trait for fetching releases
//! - [`github`]: GitHub Releases API implementation
//! - [`types`]: `LatestRelease` and `ReleaseAsset`
//! - [`error`]: Error types for release operations

pub mod error;
pub mod github;
pub mod source;
pub mod types;

pub use error::ReleaseError;
pub use github::GitHubReleases;
pub use source::ReleaseSource;
pub use types::{LatestRelease, ReleaseAsset};
