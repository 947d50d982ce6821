//! Permissive URL syntax validation.

use regex::Regex;
use std::sync::OnceLock;

static URL_PATTERN: OnceLock<Regex> = OnceLock::new();

const MAILTO_PREFIX: &str = "mailto:";

/// Anchored, case-insensitive grammar: optional scheme, one host-or-identity
/// form, optional port, optional path or query tail.
fn url_pattern() -> &'static Regex {
    URL_PATTERN.get_or_init(|| {
        Regex::new(concat!(
            r"(?i)^(?:(?:https?|ftp|mailto)://)?",
            r"(?:",
            r"(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+[A-Z]{2,6}\.?|",
            r"localhost|",
            r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}|",
            r"[^@\s]+@[^@\s]+\.[^@\s]+|",
            r"[A-Z0-9.-]+@[A-Z0-9.-]+",
            r")",
            r"(?::\d+)?",
            r"(?:/?|[/?]\S+)?$",
        ))
        .expect("valid regex")
    })
}

/// Returns `true` when `url` is syntactically acceptable.
///
/// A `mailto:` prefix (no `//`) short-circuits the grammar: the rest must
/// contain `@`, and the part after the first `@` must contain a dot.
/// Octets and ports are checked for shape only.
pub fn validate_url(url: &str) -> bool {
    if let Some(address) = url.strip_prefix(MAILTO_PREFIX) {
        return address
            .split('@')
            .nth(1)
            .is_some_and(|domain| domain.contains('.'));
    }

    url_pattern().is_match(url)
}
