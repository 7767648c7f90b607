//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → tls.rs (optional TLS handshake via rustls)
//!         → SessionAcceptor records version, cipher suite, SNI, ALPN
//!         → TlsSession attached to every request on the connection
//!     → Hand off to HTTP layer
//! ```
//!
//! # Design Decisions
//! - TLS is optional; plain HTTP requests simply carry no TlsSession
//! - Session details are captured once per connection, not per request

pub mod tls;
