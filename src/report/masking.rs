//! Sensitive-value masking.
//!
//! Names are matched case-insensitively by substring. A masked value keeps
//! its byte length; only the content is hidden.

use once_cell::sync::Lazy;
use regex::Regex;

/// Filler used for masked values.
pub const MASK_CHAR: char = 'X';

static SENSITIVE_ENV_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(key|token|secret|password|credential)").expect("static pattern")
});

static SENSITIVE_COOKIE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(token|session|auth|key|secret|password|credential)")
        .expect("static pattern")
});

/// True when an environment variable name looks like it carries a secret.
pub fn is_sensitive_env_name(name: &str) -> bool {
    SENSITIVE_ENV_NAME.is_match(name)
}

/// True when a cookie name looks like it carries a secret.
pub fn is_sensitive_cookie_name(name: &str) -> bool {
    SENSITIVE_COOKIE_NAME.is_match(name)
}

/// Replace every byte of `value` with [`MASK_CHAR`].
pub fn mask(value: &str) -> String {
    std::iter::repeat(MASK_CHAR).take(value.len()).collect()
}
