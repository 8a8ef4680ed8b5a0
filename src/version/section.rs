//! Section tokenizer
//!
//! Splits one section of a version string (release, prerelease or build
//! metadata) into dot-separated parts, each either a number or opaque text.

use std::fmt;

use crate::version::sanitize::sanitize;

/// One dot-separated token of a version section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionPart {
    Number(u64),
    Text(String),
}

impl SectionPart {
    pub fn is_number(&self) -> bool {
        matches!(self, SectionPart::Number(_))
    }
}

impl fmt::Display for SectionPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionPart::Number(n) => write!(f, "{}", n),
            SectionPart::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for SectionPart {
    fn from(value: u64) -> Self {
        SectionPart::Number(value)
    }
}

impl From<&str> for SectionPart {
    fn from(value: &str) -> Self {
        SectionPart::Text(value.to_string())
    }
}

/// Tokenize a section into its parts
///
/// - An empty token between two dots becomes `0`
/// - A trailing empty token is dropped, so `"1.2."` yields `[1, 2]`
/// - All-digit tokens that fit in `u64` become numbers, everything else text
pub fn tokenize(section: &str) -> Vec<SectionPart> {
    let sanitized = sanitize(section);
    let tokens: Vec<&str> = sanitized.split('.').collect();
    let last = tokens.len() - 1;

    tokens
        .iter()
        .enumerate()
        .filter_map(|(i, token)| {
            if token.is_empty() {
                return (i != last).then_some(SectionPart::Number(0));
            }
            Some(parse_part(token))
        })
        .collect()
}

/// Join parts with `.` the way they appear in a rendered version
pub fn join_parts(parts: &[SectionPart]) -> String {
    parts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

fn parse_part(token: &str) -> SectionPart {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return SectionPart::Text(token.to_string());
    }

    // Digit runs too large for u64 stay text, without leading zeros
    let digits = match token.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    match digits.parse::<u64>() {
        Ok(n) => SectionPart::Number(n),
        Err(_) => SectionPart::Text(digits.to_string()),
    }
}
