//! Proxy metadata: Cloudflare `Cf-*` headers and Traefik forwarding headers.

use axum::http::header::HeaderMap;

use super::headers::{canonical_name, first_value, joined_values};
use super::Section;

/// Prefix shared by headers Cloudflare adds on the way to the origin.
pub const CLOUDFLARE_PREFIX: &str = "Cf-";

/// Forwarding headers Traefik (and most other proxies) may set.
pub const TRAEFIK_HEADERS: [&str; 10] = [
    "X-Forwarded-For",
    "X-Forwarded-Proto",
    "X-Forwarded-Host",
    "X-Forwarded-Port",
    "X-Real-IP",
    "X-Forwarded-Server",
    "X-Forwarded-User",
    "X-Forwarded-Group",
    "X-Forwarded-Uri",
    "X-Original-URL",
];

/// Every header whose canonical name starts with `Cf-`.
pub fn collect_cloudflare(headers: &HeaderMap) -> Section {
    headers
        .keys()
        .filter_map(|name| {
            let canonical = canonical_name(name.as_str());
            canonical
                .starts_with(CLOUDFLARE_PREFIX)
                .then(|| (canonical, joined_values(headers, name)))
        })
        .collect()
}

/// All ten forwarding headers, first value only, empty when absent.
pub fn collect_traefik(headers: &HeaderMap) -> Section {
    TRAEFIK_HEADERS
        .iter()
        .map(|name| (name.to_string(), first_value(headers, *name)))
        .collect()
}
