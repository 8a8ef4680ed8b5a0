//! Pluggable normalization strategies
//!
//! A strategy replaces the built-in synthesizer for projects whose tags do
//! not fit its assumptions. It receives the built-in normalizer so it can
//! delegate to it or post-process its output instead of starting over.

#[cfg(test)]
use mockall::automock;
use serde_json::Value;

use crate::version::error::VersionError;
use crate::version::input::raw_version_from_json;
use crate::version::synthesizer::synthesize;

/// Handle to the built-in synthesizer, passed to every strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinNormalizer;

impl BuiltinNormalizer {
    pub fn normalize(&self, version: &str) -> Result<String, VersionError> {
        synthesize(version)
    }
}

/// Caller-supplied replacement for the built-in synthesizer
///
/// The returned string is not validated again; implementations are
/// responsible for producing valid SemVer.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait NormalizeStrategy: Send + Sync {
    async fn normalize(
        &self,
        version: &str,
        builtin: &BuiltinNormalizer,
    ) -> Result<String, VersionError>;
}

/// Strips a fixed tag prefix such as `v` before running the built-in synthesizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixStrippingStrategy {
    prefix: String,
}

impl PrefixStrippingStrategy {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

#[async_trait::async_trait]
impl NormalizeStrategy for PrefixStrippingStrategy {
    async fn normalize(
        &self,
        version: &str,
        builtin: &BuiltinNormalizer,
    ) -> Result<String, VersionError> {
        let stripped = version.strip_prefix(&self.prefix).unwrap_or(version);
        builtin.normalize(stripped)
    }
}

/// Normalize a version, letting `strategy` take over when one is supplied
pub async fn get_normalized_version(
    raw: &str,
    strategy: Option<&dyn NormalizeStrategy>,
) -> Result<String, VersionError> {
    let builtin = BuiltinNormalizer;
    match strategy {
        Some(strategy) => strategy.normalize(raw, &builtin).await,
        None => builtin.normalize(raw),
    }
}

/// Normalize a version taken from an untyped JSON value
pub async fn normalize_json_version(
    value: &Value,
    strategy: Option<&dyn NormalizeStrategy>,
) -> Result<String, VersionError> {
    let raw = raw_version_from_json(value)?;
    get_normalized_version(raw, strategy).await
}
