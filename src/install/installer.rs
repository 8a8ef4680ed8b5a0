//! Install pipeline: discover, normalize, download, extract, record

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::info;

use crate::config::WrapperConfig;
use crate::install::error::InstallError;
use crate::install::extract::{extract_asset, mark_executable};
use crate::install::manifest::{Manifest, manifest_relative_path};
use crate::release::ReleaseSource;
use crate::version::{NormalizeStrategy, PrefixStrippingStrategy, get_normalized_version};

/// Result of a successful install
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    /// Tag as published upstream
    pub tag: String,
    /// Normalized version written to the manifest
    pub version: String,
    /// Command name -> absolute path of the installed executable
    pub executables: IndexMap<String, PathBuf>,
    pub manifest: PathBuf,
}

pub struct Installer {
    config: WrapperConfig,
    root: PathBuf,
    source: Arc<dyn ReleaseSource>,
    strategy: Option<Arc<dyn NormalizeStrategy>>,
}

impl Installer {
    /// Creates an installer whose manifest path is resolved against `root`
    ///
    /// A configured `versionPrefix` installs a [`PrefixStrippingStrategy`].
    pub fn new(config: WrapperConfig, root: &Path, source: Arc<dyn ReleaseSource>) -> Self {
        let strategy = config.version_prefix.as_ref().map(|prefix| {
            Arc::new(PrefixStrippingStrategy::new(prefix)) as Arc<dyn NormalizeStrategy>
        });
        Self {
            config,
            root: root.to_path_buf(),
            source,
            strategy,
        }
    }

    /// Replaces the normalization strategy
    pub fn with_strategy(mut self, strategy: Arc<dyn NormalizeStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Runs the whole pipeline for the given platform label
    pub async fn install(&self, platform: &str) -> Result<InstallOutcome, InstallError> {
        let release = self.source.fetch_latest(&self.config.repository).await?;
        info!("Latest release of {} is {}", self.config.repository, release.tag);

        let version = get_normalized_version(&release.tag, self.strategy.as_deref()).await?;
        info!("Normalized {} to {}", release.tag, version);

        let template = self
            .config
            .assets
            .get(platform)
            .ok_or_else(|| InstallError::UnsupportedPlatform(platform.to_string()))?;
        let asset_name = expand_template(template, &release.tag, &version);
        let asset = release
            .find_asset(&asset_name)
            .ok_or_else(|| InstallError::MissingAsset(asset_name.clone()))?;

        let bytes = self.source.download_asset(asset).await?;
        info!("Downloaded {} ({} bytes)", asset.name, bytes.len());

        let manifest_path = self.root.join(&self.config.manifest);
        let manifest_dir = manifest_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());
        let install_dir = manifest_dir.join(&self.config.install_dir);
        extract_asset(&bytes, &asset.name, &install_dir)?;

        let commands = self
            .config
            .executables
            .get(platform)
            .ok_or_else(|| InstallError::UnsupportedPlatform(platform.to_string()))?;

        let mut executables = IndexMap::new();
        let mut bin = IndexMap::new();
        for (command, relative) in commands {
            let path = install_dir.join(expand_template(relative, &release.tag, &version));
            if !path.is_file() {
                return Err(InstallError::MissingExecutable(path));
            }
            mark_executable(&path)?;
            bin.insert(command.clone(), manifest_relative_path(&manifest_dir, &path));
            executables.insert(command.clone(), path);
        }

        let mut manifest = Manifest::load(&manifest_path)?;
        manifest.set_version(&version);
        manifest.set_bin(&bin);
        manifest.save()?;

        Ok(InstallOutcome {
            tag: release.tag,
            version,
            executables,
            manifest: manifest_path,
        })
    }
}

/// Substitutes `{tag}` and `{version}` in an asset or executable template
pub fn expand_template(template: &str, tag: &str, version: &str) -> String {
    template.replace("{tag}", tag).replace("{version}", version)
}
