//! Version normalization engine
//!
//! Converts an arbitrary upstream version string into a strict
//! `major.minor.patch[-prerelease][+build]` SemVer expression.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Sanitizer  │────▶│  Tokenizer  │────▶│   Parser    │
//! │ (chars→'.') │     │  (section)  │     │ (3 sections)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//! ┌─────────────┐                         ┌─────────────┐
//! │  Strategy   │────── wraps/replaces ──▶│ Synthesizer │
//! │ (override)  │                         │ (x.y.z-...) │
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`sanitize`]: Replaces characters outside `[0-9A-Za-z.-]`
//! - [`section`]: Section tokenizer and `SectionPart`
//! - [`parser`]: Splits a raw string into release/prerelease/build sections
//! - [`synthesizer`]: Renders a parsed version as valid SemVer
//! - [`strategy`]: Override hook and the `get_normalized_version` entry point
//! - [`input`]: Boundary check for versions arriving as JSON values
//! - [`error`]: Error types for normalization

pub mod error;
pub mod input;
pub mod parser;
pub mod sanitize;
pub mod section;
pub mod strategy;
pub mod synthesizer;

pub use error::VersionError;
pub use input::raw_version_from_json;
pub use strategy::{
    BuiltinNormalizer, NormalizeStrategy, PrefixStrippingStrategy, get_normalized_version,
    normalize_json_version,
};
pub use synthesizer::synthesize;
