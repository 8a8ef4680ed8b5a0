//! Version synthesizer
//!
//! Renders any version string as a valid SemVer 2.0 expression with exactly
//! three numeric release components.
//!
//! Relative ordering is only preserved when the upstream scheme is already a
//! 1-3 component numeric release followed by dot-separated qualifiers.
//! Anything else is still rendered validly but may sort differently than the
//! upstream project intends. Use a [`NormalizeStrategy`] for those.
//!
//! [`NormalizeStrategy`]: crate::version::strategy::NormalizeStrategy

use crate::version::error::VersionError;
use crate::version::parser::parse_version;
use crate::version::section::join_parts;

/// Number of numeric release components in a normalized version
const RELEASE_COMPONENTS: usize = 3;

/// Normalize a version string into a strict `major.minor.patch[-pre][+build]` form
///
/// Examples:
/// - "1.2.3-alpha+build" -> "1.2.3-alpha+build" (already valid, unchanged)
/// - "1.2" -> "1.2.0"
/// - "1.2.3.4" -> "1.2.3-4"
/// - "1.2.3.4-beta" -> "1.2.3-4-beta"
/// - "arbitrary text" -> "0.0.0-arbitrary.text"
pub fn synthesize(version: &str) -> Result<String, VersionError> {
    if version.trim().is_empty() {
        return Err(VersionError::Empty);
    }

    if semver::Version::parse(version).is_ok() {
        return Ok(version.to_string());
    }

    let parsed = parse_version(version);
    let release = &parsed.release;

    let first_three_numeric = !release.is_empty()
        && release
            .iter()
            .take(RELEASE_COMPONENTS)
            .all(|part| part.is_number());

    let mut normalized = if first_three_numeric {
        let head = release.len().min(RELEASE_COMPONENTS);
        let mut out = join_parts(&release[..head]);
        for _ in head..RELEASE_COMPONENTS {
            out.push_str(".0");
        }
        if release.len() > RELEASE_COMPONENTS {
            out.push('-');
            out.push_str(&join_parts(&release[RELEASE_COMPONENTS..]));
        }
        out
    } else {
        let mut out = String::from("0.0.0");
        if !release.is_empty() {
            out.push('-');
            out.push_str(&join_parts(release));
        }
        out
    };

    if !parsed.prerelease.is_empty() {
        normalized.push('-');
        normalized.push_str(&join_parts(&parsed.prerelease));
    }

    if !parsed.build_metadata.is_empty() {
        normalized.push('+');
        normalized.push_str(&join_parts(&parsed.build_metadata));
    }

    Ok(normalized)
}
