//! Release source trait for discovering and downloading published releases

#[cfg(test)]
use mockall::automock;

use crate::release::error::ReleaseError;
use crate::release::types::{LatestRelease, ReleaseAsset};

/// Trait for fetching releases from a source-hosting service
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetches the latest published release of a repository
    ///
    /// # Arguments
    /// * `repository` - Repository in `owner/repo` form (e.g., "jqlang/jq")
    async fn fetch_latest(&self, repository: &str) -> Result<LatestRelease, ReleaseError>;

    /// Downloads the raw bytes of a release asset
    async fn download_asset(&self, asset: &ReleaseAsset) -> Result<Vec<u8>, ReleaseError>;
}
