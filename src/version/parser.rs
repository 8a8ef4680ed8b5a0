//! Version parser
//!
//! Splits a raw version string into release, prerelease and build metadata
//! sections. Only the first `-` and the first `+` after it are delimiters.

use crate::version::section::{SectionPart, tokenize};

/// A version string broken into its three tokenized sections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Version {
    pub release: Vec<SectionPart>,
    pub prerelease: Vec<SectionPart>,
    pub build_metadata: Vec<SectionPart>,
}

/// Parse a raw version string
///
/// Examples:
/// - "1.2.3" -> release [1, 2, 3]
/// - "1.2-rc.1+linux" -> release [1, 2], prerelease [rc, 1], build [linux]
/// - "1.0+build" -> release [1, 0, build], `+` only delimits after a `-`
pub fn parse_version(raw: &str) -> Version {
    let (release_part, remainder) = match raw.split_once('-') {
        Some((release, rest)) => (release, Some(rest)),
        None => (raw, None),
    };

    let (prerelease_part, build_part) = match remainder {
        Some(rest) => match rest.split_once('+') {
            Some((pre, build)) => (Some(pre), Some(build)),
            None => (Some(rest), None),
        },
        None => (None, None),
    };

    Version {
        release: tokenize(release_part),
        prerelease: prerelease_part.map(tokenize).unwrap_or_default(),
        build_metadata: build_part.map(tokenize).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(value: u64) -> SectionPart {
        SectionPart::Number(value)
    }

    fn t(value: &str) -> SectionPart {
        SectionPart::Text(value.to_string())
    }

    #[test]
    fn parse_version_splits_all_three_sections() {
        let version = parse_version("1.2.3-rc.1+linux.x64");

        assert_eq!(
            version,
            Version {
                release: vec![n(1), n(2), n(3)],
                prerelease: vec![t("rc"), n(1)],
                build_metadata: vec![t("linux"), t("x64")],
            }
        );
    }

    #[test]
    fn parse_version_without_delimiters_has_only_release() {
        let version = parse_version("10.4");

        assert_eq!(version.release, vec![n(10), n(4)]);
        assert!(version.prerelease.is_empty());
        assert!(version.build_metadata.is_empty());
    }

    #[test]
    fn parse_version_ignores_plus_before_hyphen() {
        let version = parse_version("1.0+build");

        assert_eq!(version.release, vec![n(1), n(0), t("build")]);
        assert!(version.build_metadata.is_empty());
    }

    #[test]
    fn parse_version_keeps_later_hyphens_in_prerelease() {
        let version = parse_version("1.2.3-alpha-2");

        assert_eq!(version.prerelease, vec![t("alpha-2")]);
    }

    #[test]
    fn parse_version_sanitizes_later_plus_in_build_metadata() {
        let version = parse_version("1-a+b+c");

        assert_eq!(version.build_metadata, vec![t("b"), t("c")]);
    }

    #[test]
    fn parse_version_with_dangling_hyphen_has_empty_prerelease() {
        let version = parse_version("1.2.3-");

        assert_eq!(version.release, vec![n(1), n(2), n(3)]);
        assert!(version.prerelease.is_empty());
    }

    #[test]
    fn parse_version_of_empty_string_is_empty() {
        assert_eq!(parse_version(""), Version::default());
    }
}
