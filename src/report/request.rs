//! Request line, peer and server details.

use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use axum::http::header::{HOST, REFERER, USER_AGENT};
use axum::http::request::Parts;
use axum::http::Version;

use super::environment::{EnvSnapshot, SERVER_SOFTWARE};
use super::headers::first_value;
use super::Section;

/// Protocol string as it appears on the request line.
pub fn protocol_name(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2.0",
        Version::HTTP_3 => "HTTP/3.0",
        _ => "",
    }
}

/// Peer address of the connection, or an empty string when the server was
/// not set up to record it.
pub fn remote_addr(parts: &Parts) -> String {
    parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_default()
}

/// Host the client asked for: the URI authority when the request target
/// carries one (absolute-form, or `:authority` on HTTP/2), else the `Host`
/// header.
pub fn host(parts: &Parts) -> String {
    match parts.uri.authority() {
        Some(authority) => authority.to_string(),
        None => first_value(&parts.headers, HOST),
    }
}

/// Request target as the client sent it. HTTP/1 absolute-form targets keep
/// their scheme and authority; HTTP/2 reports `:path`.
fn request_uri(parts: &Parts) -> String {
    let absolute_form = parts.version < Version::HTTP_2 && parts.uri.scheme().is_some();
    if absolute_form {
        return parts.uri.to_string();
    }
    parts
        .uri
        .path_and_query()
        .map(|pq| pq.to_string())
        .unwrap_or_else(|| parts.uri.path().to_string())
}

pub fn collect_request(parts: &Parts) -> Section {
    Section::from([
        ("Method".to_string(), parts.method.to_string()),
        ("URL".to_string(), parts.uri.to_string()),
        ("Protocol".to_string(), protocol_name(parts.version).to_string()),
        ("Host".to_string(), host(parts)),
        ("RemoteAddr".to_string(), remote_addr(parts)),
        ("RequestURI".to_string(), request_uri(parts)),
    ])
}

pub fn collect_remote(parts: &Parts) -> Section {
    Section::from([
        ("RemoteAddr".to_string(), remote_addr(parts)),
        ("UserAgent".to_string(), first_value(&parts.headers, USER_AGENT)),
        ("Referer".to_string(), first_value(&parts.headers, REFERER)),
    ])
}

/// `SERVER_SOFTWARE` is reported as-is, without the environment masking pass.
pub fn collect_server(parts: &Parts, env: &EnvSnapshot) -> Section {
    Section::from([
        ("ServerProtocol".to_string(), protocol_name(parts.version).to_string()),
        ("ServerSoftware".to_string(), env.get(SERVER_SOFTWARE).to_string()),
    ])
}
