//! Request header collection.
//!
//! The HTTP layer hands us lowercase header names, so every name is rendered
//! in canonical MIME form (`x-real-ip` → `X-Real-Ip`) before it is reported or
//! prefix-matched.

use axum::http::header::{AsHeaderName, HeaderMap, COOKIE, HOST};
use axum::http::HeaderName;

use super::Section;

/// Render a header name in canonical form: first letter and every letter
/// following a hyphen upper-cased, the rest lower-cased.
pub fn canonical_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = true;
    for c in name.chars() {
        if upper {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c.to_ascii_lowercase());
        }
        upper = c == '-';
    }
    out
}

/// All values of `name` joined by `", "` in arrival order, or an empty string.
pub fn joined_values(headers: &HeaderMap, name: &HeaderName) -> String {
    headers
        .get_all(name)
        .iter()
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .collect::<Vec<_>>()
        .join(", ")
}

/// First value of `name`, or an empty string when absent.
pub fn first_value<K: AsHeaderName>(headers: &HeaderMap, name: K) -> String {
    headers
        .get(name)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default()
}

/// Every header keyed by canonical name. `Cookie` has its own section and
/// `Host` is reported with the request line.
pub fn collect_headers(headers: &HeaderMap) -> Section {
    headers
        .keys()
        .filter(|name| **name != COOKIE && **name != HOST)
        .map(|name| (canonical_name(name.as_str()), joined_values(headers, name)))
        .collect()
}
