//! Installation of a release into a wrapper package
//!
//! # Modules
//!
//! - [`installer`]: End-to-end install pipeline
//! - [`extract`]: Native archive extraction
//! - [`platform`]: Platform labels (`linux-x64`, `darwin-arm64`, ...)
//! - [`manifest`]: `package.json` version/bin update
//! - [`error`]: Error types for install operations

pub mod error;
pub mod extract;
pub mod installer;
pub mod manifest;
pub mod platform;

pub use error::InstallError;
pub use installer::{InstallOutcome, Installer};
