//! Wrapper package manifest (`package.json`) update
//!
//! Only `version` and `bin` are touched. Every other field, and the order of
//! all fields, is written back as it was read.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value;
use tracing::info;

use crate::install::error::InstallError;

#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    path: PathBuf,
    fields: IndexMap<String, Value>,
}

impl Manifest {
    /// Reads a manifest; the top level must be a JSON object
    pub fn load(path: &Path) -> Result<Self, InstallError> {
        let text = std::fs::read_to_string(path)?;
        let fields = serde_json::from_str::<IndexMap<String, Value>>(&text).map_err(|e| {
            InstallError::Manifest(format!("{} is not a JSON object: {}", path.display(), e))
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            fields,
        })
    }

    pub fn set_version(&mut self, version: &str) {
        self.fields
            .insert("version".to_string(), Value::String(version.to_string()));
    }

    /// Replaces the `bin` map (command name -> path relative to the manifest)
    pub fn set_bin(&mut self, bin: &IndexMap<String, String>) {
        let map = bin
            .iter()
            .map(|(name, path)| (name.clone(), Value::String(path.clone())))
            .collect();
        self.fields.insert("bin".to_string(), Value::Object(map));
    }

    /// Writes the manifest back, pretty-printed with a trailing newline
    pub fn save(&self) -> Result<(), InstallError> {
        let mut text = serde_json::to_string_pretty(&self.fields)
            .map_err(|e| InstallError::Manifest(e.to_string()))?;
        text.push('\n');
        std::fs::write(&self.path, text)?;
        info!("Updated manifest {:?}", self.path);
        Ok(())
    }
}

/// Renders `path` relative to `base` with `/` separators, as npm expects
pub fn manifest_relative_path(base: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
