//! URL validation and decomposition.
//!
//! - [`validate_url`]: permissive syntax check
//! - [`decompose_url`]: total split into [`UrlComponents`]
//! - [`parse_url`]: validation, underscore check and decomposition in one call

mod components;
mod decompose;
mod query;
mod validate;

pub use components::{QueryParams, UrlComponents};
pub use decompose::decompose_url;
use decompose::strip_userinfo;
pub use query::parse_query;
pub use validate::validate_url;

use crate::error::UrlError;

/// Validates `url`, rejects underscores in the authority, then decomposes it.
///
/// Userinfo never reaches logs or error messages; only `host[:port]` is
/// reported.
pub fn parse_url(url: &str) -> Result<UrlComponents, UrlError> {
    if !validate_url(url) {
        #[cfg(feature = "tracing")]
        tracing::warn!(len = url.len(), "rejected URL: invalid format");
        return Err(UrlError::InvalidFormat {
            url: url.to_string(),
        });
    }

    let components = decompose_url(url);
    if components.authority.contains('_') {
        let host = strip_userinfo(&components.authority).to_string();
        #[cfg(feature = "tracing")]
        tracing::warn!(host = %host, "rejected URL: underscore in domain");
        return Err(UrlError::UnderscoreInDomain { host });
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(scheme = %components.scheme, host = ?components.host, "URL decomposed");

    Ok(components)
}

/// Returns `true` when the scheme of `url` is `https`, in any case.
pub fn is_secure_url(url: &str) -> bool {
    decompose_url(url).is_secure()
}
