//! GitHub Releases API source implementation

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{DEFAULT_GITHUB_BASE_URL, FETCH_TIMEOUT_MS};
use crate::release::error::ReleaseError;
use crate::release::source::ReleaseSource;
use crate::release::types::{LatestRelease, ReleaseAsset};
use crate::version::raw_version_from_json;

/// Response from the GitHub "latest release" endpoint
#[derive(Debug, Deserialize)]
struct Release {
    /// Kept untyped so a malformed tag is reported instead of failing the whole body
    tag_name: Value,
    #[serde(default)]
    assets: Vec<Asset>,
}

#[derive(Debug, Deserialize)]
struct Asset {
    name: String,
    browser_download_url: String,
}

/// Release source backed by the GitHub Releases API
pub struct GitHubReleases {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubReleases {
    /// Creates a new GitHubReleases with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("binrelease")
                .timeout(Duration::from_millis(FETCH_TIMEOUT_MS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Authenticates API requests with a bearer token
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.client.get(url);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl Default for GitHubReleases {
    fn default() -> Self {
        Self::new(DEFAULT_GITHUB_BASE_URL)
    }
}

fn check_status(response: &reqwest::Response, what: &str) -> Result<(), ReleaseError> {
    let status = response.status();

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ReleaseError::NotFound(what.to_string()));
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());
        return Err(ReleaseError::RateLimited {
            retry_after_secs: retry_after,
        });
    }

    if !status.is_success() {
        warn!("GitHub returned status {} for {}", status, what);
        return Err(ReleaseError::InvalidResponse(format!(
            "Unexpected status: {}",
            status
        )));
    }

    Ok(())
}

#[async_trait::async_trait]
impl ReleaseSource for GitHubReleases {
    async fn fetch_latest(&self, repository: &str) -> Result<LatestRelease, ReleaseError> {
        let url = format!("{}/repos/{}/releases/latest", self.base_url, repository);
        debug!("Fetching latest release from {}", url);

        let response = self
            .request(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        check_status(&response, repository)?;

        let release: Release = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub release response: {}", e);
            ReleaseError::InvalidResponse(e.to_string())
        })?;

        let tag = raw_version_from_json(&release.tag_name)?;
        let assets = release
            .assets
            .into_iter()
            .map(|a| ReleaseAsset {
                name: a.name,
                download_url: a.browser_download_url,
            })
            .collect();

        Ok(LatestRelease::new(tag, assets))
    }

    async fn download_asset(&self, asset: &ReleaseAsset) -> Result<Vec<u8>, ReleaseError> {
        debug!("Downloading {} from {}", asset.name, asset.download_url);

        let response = self
            .request(&asset.download_url)
            .header("Accept", "application/octet-stream")
            .send()
            .await?;

        check_status(&response, &asset.name)?;

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
