//! App identifier extraction from store product URLs.

use regex::Regex;
use reqwest::Url;

use crate::error::ExtractError;

/// Recognition patterns tried in order; the first pattern that matches
/// anywhere in the URL wins. Order is a contract, not an implementation
/// detail: an `id`-marked segment outranks a query parameter, which
/// outranks a bare numeric path segment.
const ID_PATTERNS: [&str; 3] = [
    r"id(\d+)",           // marked path segment: /id6747951776
    r"id=(\d+)",          // query parameter: ?id=6747951776
    r"/(\d+)(?:[/?#]|$)", // bare numeric path segment
];

/// Extracts the numeric app identifier embedded in a store product URL.
///
/// Pure and deterministic: identical input always yields identical
/// output, and failures are reported rather than papered over with a
/// fallback identifier.
///
/// # Errors
///
/// - [`ExtractError::MalformedUrl`] if the input does not parse as a URL.
/// - [`ExtractError::NoIdFound`] if no recognition pattern matches.
pub fn extract_app_id(store_url: &str) -> Result<String, ExtractError> {
    if Url::parse(store_url).is_err() {
        return Err(ExtractError::MalformedUrl {
            url: store_url.to_owned(),
        });
    }

    for pattern in ID_PATTERNS {
        let re = Regex::new(pattern).expect("valid app id pattern");
        if let Some(cap) = re.captures(store_url) {
            return Ok(cap[1].to_owned());
        }
    }

    Err(ExtractError::NoIdFound {
        url: store_url.to_owned(),
    })
}
