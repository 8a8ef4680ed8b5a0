//! Character sanitization applied before section tokenization

use std::sync::LazyLock;

use regex::Regex;

static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^0-9A-Za-z.\-]").expect("disallowed character pattern is valid")
});

/// Replace every character outside `[0-9A-Za-z.-]` with `.`
///
/// The output has the same number of characters as the input, and applying
/// it twice gives the same result as applying it once.
pub fn sanitize(text: &str) -> String {
    DISALLOWED.replace_all(text, ".").into_owned()
}
