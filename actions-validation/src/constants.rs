#![allow(clippy::unwrap_used)]

use lazy_static::lazy_static;
use regex::Regex;

/// Letters, digits, spaces, hyphens and underscores, 1 to 255 characters,
/// no leading or trailing space.
pub const ACTION_NAME_PATTERN: &str = r"^[a-zA-Z0-9_-](?:[a-zA-Z0-9 _-]{0,253}[a-zA-Z0-9_-])?$";

/// HTTP header name accepted for API key authentication.
pub const API_HEADER_PATTERN: &str = r"^[a-zA-Z0-9][a-zA-Z0-9.-]+$";

/// Scheme an action endpoint must use.
pub const SECURE_SCHEME: &str = "https";

lazy_static! {
    pub static ref ACTION_NAME_REGEX: Regex = Regex::new(ACTION_NAME_PATTERN).unwrap();
    pub static ref API_HEADER_REGEX: Regex = Regex::new(API_HEADER_PATTERN).unwrap();
}
