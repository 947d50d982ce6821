//! URL decomposition into scheme, authority, host, port, path, query and fragment.

use super::components::{Layout, UrlComponents};
use super::query::parse_query;

/// Characters removed wherever they appear before splitting.
const UNSAFE_CHARS: [char; 3] = ['\t', '\r', '\n'];

/// Splits `url` into its components.
///
/// Never fails: pieces that cannot be recognised come back empty or `None`.
/// Delimiters are consumed in order (scheme `:`, authority `//`, fragment
/// `#`, query `?`) and each is searched for only once.
///
/// # Examples
///
/// ```
/// use url_pwd_analysis::decompose_url;
///
/// let parts = decompose_url("https://user:pw@www.example.com:8080/a?x=1&x=2#top");
/// assert_eq!(parts.host.as_deref(), Some("www.example.com"));
/// assert_eq!(parts.port, Some(8080));
/// assert_eq!(parts.query_params.unwrap().get("x").unwrap().len(), 2);
/// ```
pub fn decompose_url(url: &str) -> UrlComponents {
    let cleaned: String = url
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !UNSAFE_CHARS.contains(c))
        .collect();

    let (scheme, rest) = split_scheme(&cleaned);

    let (authority, rest, has_authority) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find(['/', '?', '#']).unwrap_or(after.len());
            let (authority, rest) = after.split_at(end);
            (authority, rest, true)
        }
        None => ("", rest, false),
    };

    let (rest, fragment) = match rest.split_once('#') {
        Some((before, fragment)) => (before, Some(fragment)),
        None => (rest, None),
    };

    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    let (host, port) = split_authority(authority);
    let query_raw = non_empty(query);
    let query_params = query_raw.as_deref().map(parse_query);
    let layout = Layout {
        scheme: scheme.to_string(),
        authority: has_authority,
        query: query.is_some(),
        fragment: fragment.is_some(),
    };

    UrlComponents {
        original: url.to_string(),
        scheme: scheme.to_ascii_lowercase(),
        authority: authority.to_string(),
        host,
        port,
        path: path.to_string(),
        query_raw,
        query_params,
        fragment: non_empty(fragment),
        layout,
    }
}

/// Scheme is everything before the first `:` when it starts with an ASCII
/// letter and holds only letters, digits, `+`, `-` and `.`. Returned as written.
fn split_scheme(url: &str) -> (&str, &str) {
    if let Some((candidate, rest)) = url.split_once(':') {
        let mut chars = candidate.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if valid {
            return (candidate, rest);
        }
    }
    ("", url)
}

/// Extracts host and port from `[userinfo@]host[:port]`.
///
/// Userinfo ends at the last `@`; the port follows the last `:` and must be
/// all digits. A non-numeric suffix marks the authority as malformed and
/// leaves both absent. A port that does not fit in `u16` is dropped.
fn split_authority(authority: &str) -> (Option<String>, Option<u16>) {
    let host_port = strip_userinfo(authority);

    match host_port.rsplit_once(':') {
        Some((host, port)) if port.bytes().all(|b| b.is_ascii_digit()) => {
            (lower_non_empty(host), port.parse::<u16>().ok())
        }
        Some(_) => (None, None),
        None => (lower_non_empty(host_port), None),
    }
}

/// `host[:port]` part of an authority, everything up to the last `@` removed.
pub(crate) fn strip_userinfo(authority: &str) -> &str {
    authority
        .rsplit_once('@')
        .map_or(authority, |(_userinfo, host_port)| host_port)
}

fn lower_non_empty(host: &str) -> Option<String> {
    (!host.is_empty()).then(|| host.to_lowercase())
}

fn non_empty(part: Option<&str>) -> Option<String> {
    part.filter(|s| !s.is_empty()).map(str::to_string)
}
