//! Decomposed URL value types.

use indexmap::IndexMap;
use serde::Serialize;

/// Query parameters in first-seen order, each name mapped to its values
/// in order of occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct QueryParams {
    entries: IndexMap<String, Vec<String>>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` under `name`, creating the entry on first occurrence.
    pub fn append(&mut self, name: String, value: String) {
        self.entries.entry(name).or_default().push(value);
    }

    /// All values recorded for `name`.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// First value recorded for `name`.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(n, values)| (n.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// How the original text was laid out, for exact recomposition.
///
/// Holds what the normalized public fields lose: the scheme as written and
/// which delimiters were present even when the part after them was empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Layout {
    pub(crate) scheme: String,
    pub(crate) authority: bool,
    pub(crate) query: bool,
    pub(crate) fragment: bool,
}

/// Components of a decomposed URL.
///
/// Absent fields are `None` (serialized as `null`), which is distinct from
/// an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlComponents {
    /// Input exactly as given.
    pub original: String,
    /// Lowercased scheme, empty when none.
    pub scheme: String,
    /// Raw netloc including `userinfo@` and `:port`, empty when none.
    pub authority: String,
    /// Lowercased host without userinfo or port.
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: String,
    /// Query without the leading `?`; `None` when missing or empty.
    pub query_raw: Option<String>,
    /// Present exactly when `query_raw` is.
    pub query_params: Option<QueryParams>,
    /// Fragment without the leading `#`; `None` when missing or empty.
    pub fragment: Option<String>,
    #[serde(skip)]
    pub(crate) layout: Layout,
}

impl UrlComponents {
    /// Rebuilds the URL text from its parts.
    ///
    /// Gives back `original` for any input without leading control
    /// characters or embedded tabs and line breaks, including the scheme's
    /// case and empty `?` or `#` delimiters.
    pub fn recompose(&self) -> String {
        let mut url = String::with_capacity(self.original.len());

        if !self.layout.scheme.is_empty() {
            url.push_str(&self.layout.scheme);
            url.push(':');
        }
        if self.layout.authority {
            url.push_str("//");
            url.push_str(&self.authority);
        }
        url.push_str(&self.path);
        if self.layout.query {
            url.push('?');
            url.push_str(self.query_raw.as_deref().unwrap_or_default());
        }
        if self.layout.fragment {
            url.push('#');
            url.push_str(self.fragment.as_deref().unwrap_or_default());
        }
        url
    }

    pub fn is_secure(&self) -> bool {
        self.scheme.eq_ignore_ascii_case("https")
    }
}
