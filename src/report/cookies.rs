//! Cookie collection.
//!
//! Request cookies only carry a name and a value; the remaining attributes
//! exist so the record has the same shape as a `Set-Cookie` cookie and are
//! reported with their unset defaults.

use axum::http::header::{HeaderMap, COOKIE};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::masking::{is_sensitive_cookie_name, mask};

/// Cross-site sending mode of a cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Default,
    Lax,
    Strict,
    None,
}

/// A parsed cookie with its attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub path: String,
    pub domain: String,
    pub expires: Option<DateTime<Utc>>,
    pub max_age: i64,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: Option<SameSite>,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }
}

/// One cookie as it appears in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CookieRecord {
    pub name: String,
    pub value: String,
    pub path: String,
    pub domain: String,
    pub expires: String,
    pub max_age: String,
    pub secure: String,
    pub http_only: String,
    pub same_site: String,
}

impl From<&Cookie> for CookieRecord {
    fn from(cookie: &Cookie) -> Self {
        let value = if is_sensitive_cookie_name(&cookie.name) {
            mask(&cookie.value)
        } else {
            cookie.value.clone()
        };

        Self {
            name: cookie.name.clone(),
            value,
            path: cookie.path.clone(),
            domain: cookie.domain.clone(),
            expires: format_expiry(cookie.expires),
            max_age: cookie.max_age.to_string(),
            secure: cookie.secure.to_string(),
            http_only: cookie.http_only.to_string(),
            same_site: format_same_site(cookie.same_site).to_string(),
        }
    }
}

pub fn format_expiry(expires: Option<DateTime<Utc>>) -> String {
    match expires {
        Some(at) => at.to_rfc3339_opts(SecondsFormat::Secs, true),
        None => "Not set".to_string(),
    }
}

pub fn format_same_site(same_site: Option<SameSite>) -> &'static str {
    match same_site {
        Some(SameSite::Default) => "Default",
        Some(SameSite::Lax) => "Lax",
        Some(SameSite::Strict) => "Strict",
        Some(SameSite::None) => "None",
        None => "Not set",
    }
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_graphic() && !"()<>@,;:\\\"/[]?={}".contains(c)
}

fn is_cookie_value_char(c: char) -> bool {
    matches!(c, ' '..='~') && !matches!(c, '"' | ';' | '\\')
}

/// Parse one `Cookie` header line into `name=value` pairs.
///
/// Pairs with an invalid name are dropped; a value wrapped in double quotes
/// is unwrapped; a value containing quotes, backslashes or non-printable
/// characters drops the pair.
pub fn parse_cookie_line(line: &str) -> Vec<Cookie> {
    line.split(';')
        .filter_map(|part| {
            let part = part.trim();
            if part.is_empty() {
                return None;
            }
            let (name, value) = part.split_once('=').unwrap_or((part, ""));
            let name = name.trim();
            if name.is_empty() || !name.chars().all(is_token_char) {
                return None;
            }
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            if !value.chars().all(is_cookie_value_char) {
                return None;
            }
            Some(Cookie::new(name, value))
        })
        .collect()
}

/// Cookies from every `Cookie` header, in header then pair order.
pub fn parse_cookies(headers: &HeaderMap) -> Vec<Cookie> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(parse_cookie_line)
        .collect()
}

pub fn collect_cookies(headers: &HeaderMap) -> Vec<CookieRecord> {
    parse_cookies(headers).iter().map(CookieRecord::from).collect()
}
