//! Debug report construction.
//!
//! # Data Flow
//! ```text
//! request parts + EnvSnapshot
//!     → headers.rs      (all headers but Cookie)
//!     → environment.rs  (env vars, sensitive values masked)
//!     → request.rs      (request line, peer, server)
//!     → proxy.rs        (Cf-* headers, forwarding headers)
//!     → tls.rs          (TlsSession from request extensions)
//!     → cookies.rs      (parsed Cookie header, sensitive values masked)
//!     → DebugReport (serialized once, then dropped)
//! ```
//!
//! # Design Decisions
//! - Every collector is total: missing data becomes an empty string or a
//!   fixed placeholder, never an error
//! - Sections are `BTreeMap`s so JSON output has a stable key order
//! - Masking keeps byte length; only content is hidden

pub mod cookies;
pub mod environment;
pub mod headers;
pub mod masking;
pub mod proxy;
pub mod request;
pub mod tls;

use std::collections::BTreeMap;

use axum::http::request::Parts;
use serde::Serialize;

pub use cookies::CookieRecord;
pub use environment::EnvSnapshot;
pub use tls::TlsSession;

/// A flat name → value mapping within the report.
pub type Section = BTreeMap<String, String>;

/// Everything observable about one request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugReport {
    pub headers: Section,
    pub environment: Section,
    pub request: Section,
    pub cloudflare: Section,
    pub traefik: Section,
    pub remote_info: Section,
    pub server_info: Section,
    pub tls: Section,
    pub cookies: Vec<CookieRecord>,
}

impl DebugReport {
    /// Build the report for one request.
    ///
    /// The peer address is read from `ConnectInfo<SocketAddr>` and the TLS
    /// session from a [`TlsSession`] in the request extensions; both may be
    /// absent.
    pub fn build(parts: &Parts, env: &EnvSnapshot) -> Self {
        Self {
            headers: headers::collect_headers(&parts.headers),
            environment: environment::collect_environment(env),
            request: request::collect_request(parts),
            cloudflare: proxy::collect_cloudflare(&parts.headers),
            traefik: proxy::collect_traefik(&parts.headers),
            remote_info: request::collect_remote(parts),
            server_info: request::collect_server(parts, env),
            tls: tls::collect_tls(parts.extensions.get::<TlsSession>()),
            cookies: cookies::collect_cookies(&parts.headers),
        }
    }
}
