//! Release source test utilities

use std::collections::HashMap;

use async_trait::async_trait;

use binrelease::release::{LatestRelease, ReleaseAsset, ReleaseError, ReleaseSource};

/// In-memory release source for testing
pub struct MockReleaseSource {
    releases: HashMap<String, LatestRelease>,
    assets: HashMap<String, Vec<u8>>,
}

impl MockReleaseSource {
    pub fn new() -> Self {
        Self {
            releases: HashMap::new(),
            assets: HashMap::new(),
        }
    }

    pub fn with_release(
        mut self,
        repository: &str,
        tag: &str,
        assets: Vec<(&str, Vec<u8>)>,
    ) -> Self {
        let mut release_assets = Vec::new();
        for (name, bytes) in assets {
            let download_url = format!("mock://{}/{}", repository, name);
            self.assets.insert(download_url.clone(), bytes);
            release_assets.push(ReleaseAsset {
                name: name.to_string(),
                download_url,
            });
        }
        self.releases.insert(
            repository.to_string(),
            LatestRelease::new(tag, release_assets),
        );
        self
    }
}

#[async_trait]
impl ReleaseSource for MockReleaseSource {
    async fn fetch_latest(&self, repository: &str) -> Result<LatestRelease, ReleaseError> {
        self.releases
            .get(repository)
            .cloned()
            .ok_or_else(|| ReleaseError::NotFound(repository.to_string()))
    }

    async fn download_asset(&self, asset: &ReleaseAsset) -> Result<Vec<u8>, ReleaseError> {
        self.assets
            .get(&asset.download_url)
            .cloned()
            .ok_or_else(|| ReleaseError::NotFound(asset.name.clone()))
    }
}
