//! Endpoint URL checks used by the action form.

use crate::constants::SECURE_SCHEME;
use url::Url;

/// True when `value` parses as an absolute URL.
pub fn is_url_valid(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// True when `value` parses as an absolute URL using the `https` scheme.
pub fn is_https_url(value: &str) -> bool {
    Url::parse(value).map_or(false, |url| url.scheme() == SECURE_SCHEME)
}
