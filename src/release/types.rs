/// A downloadable file attached to a release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseAsset {
    pub name: String,
    pub download_url: String,
}

/// The latest published release of a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestRelease {
    /// Tag name exactly as published, e.g. "v1.7.1" or "jq-1.7.1"
    pub tag: String,
    pub assets: Vec<ReleaseAsset>,
}

impl LatestRelease {
    pub fn new(tag: impl Into<String>, assets: Vec<ReleaseAsset>) -> Self {
        Self {
            tag: tag.into(),
            assets,
        }
    }

    /// Finds an asset by exact file name
    pub fn find_asset(&self, name: &str) -> Option<&ReleaseAsset> {
        self.assets.iter().find(|asset| asset.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_asset_matches_exact_name() {
        let release = LatestRelease::new(
            "v1.0.0",
            vec![
                ReleaseAsset {
                    name: "tool-linux-x64.tar.gz".to_string(),
                    download_url: "https://example.com/a".to_string(),
                },
                ReleaseAsset {
                    name: "tool-darwin-arm64.zip".to_string(),
                    download_url: "https://example.com/b".to_string(),
                },
            ],
        );

        assert_eq!(
            release
                .find_asset("tool-darwin-arm64.zip")
                .map(|a| a.download_url.as_str()),
            Some("https://example.com/b")
        );
        assert!(release.find_asset("tool-linux-x64").is_none());
    }
}
