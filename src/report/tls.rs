//! TLS session details.

use rustls::CipherSuite;

use super::Section;

/// Negotiated parameters of the TLS connection a request arrived on.
///
/// Attached to request extensions by the TLS acceptor; absent on plain HTTP.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsSession {
    /// Wire protocol version (0x0303 for TLS 1.2, 0x0304 for TLS 1.3).
    pub version: u16,
    /// IANA cipher suite identifier.
    pub cipher_suite: u16,
    /// SNI hostname sent by the client.
    pub server_name: Option<String>,
    /// ALPN protocol agreed on, e.g. `h2`.
    pub negotiated_protocol: Option<String>,
}

pub fn version_name(version: u16) -> &'static str {
    match version {
        0x0301 => "TLS 1.0",
        0x0302 => "TLS 1.1",
        0x0303 => "TLS 1.2",
        0x0304 => "TLS 1.3",
        _ => "Unknown",
    }
}

/// IANA name of a cipher suite, `0xXXXX` when the identifier is unknown.
pub fn cipher_suite_name(id: u16) -> String {
    let Some(name) = CipherSuite::from(id).as_str() else {
        return format!("0x{:04X}", id);
    };
    // TLS 1.3 suites carry no key-exchange part in their registered names.
    match name.strip_prefix("TLS13_") {
        Some(rest) => format!("TLS_{}", rest),
        None => name.to_string(),
    }
}

pub fn collect_tls(session: Option<&TlsSession>) -> Section {
    let Some(session) = session else {
        return Section::from([("TLS".to_string(), "Not used".to_string())]);
    };

    Section::from([
        ("TLS Version".to_string(), version_name(session.version).to_string()),
        ("Cipher Suite".to_string(), cipher_suite_name(session.cipher_suite)),
        (
            "Server Name".to_string(),
            session.server_name.clone().unwrap_or_default(),
        ),
        (
            "Negotiated Proto".to_string(),
            session.negotiated_protocol.clone().unwrap_or_default(),
        ),
    ])
}
