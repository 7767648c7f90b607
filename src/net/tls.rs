//! TLS configuration, certificate loading and session capture.

use std::io;
use std::path::Path;

use axum::Extension;
use axum_server::accept::{Accept, DefaultAcceptor};
use axum_server::tls_rustls::{RustlsAcceptor, RustlsConfig};
use futures_util::future::BoxFuture;
use rustls::ServerConnection;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_rustls::server::TlsStream;
use tower::Layer;

use crate::report::TlsSession;

/// Load TLS configuration from certificate and key files.
pub async fn load_tls_config(cert_path: &Path, key_path: &Path) -> Result<RustlsConfig, io::Error> {
    if !cert_path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Certificate file not found: {:?}", cert_path),
        ));
    }
    if !key_path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Private key file not found: {:?}", key_path),
        ));
    }

    // Advertises h2 and http/1.1 over ALPN.
    RustlsConfig::from_pem_file(cert_path, key_path).await
}

/// Read the negotiated parameters off a completed handshake.
pub fn session_of(conn: &ServerConnection) -> TlsSession {
    TlsSession {
        version: conn.protocol_version().map(u16::from).unwrap_or_default(),
        cipher_suite: conn
            .negotiated_cipher_suite()
            .map(|suite| u16::from(suite.suite()))
            .unwrap_or_default(),
        server_name: conn.server_name().map(str::to_string),
        negotiated_protocol: conn
            .alpn_protocol()
            .map(|p| String::from_utf8_lossy(p).into_owned()),
    }
}

/// TLS acceptor that attaches the connection's [`TlsSession`] to every
/// request served on it.
#[derive(Clone)]
pub struct SessionAcceptor {
    inner: RustlsAcceptor<DefaultAcceptor>,
}

impl SessionAcceptor {
    pub fn new(config: RustlsConfig) -> Self {
        Self {
            inner: RustlsAcceptor::new(config),
        }
    }
}

impl<I, S> Accept<I, S> for SessionAcceptor
where
    I: AsyncRead + AsyncWrite + Unpin + Send + 'static,
    S: Send + 'static,
{
    type Stream = TlsStream<I>;
    type Service = axum::middleware::AddExtension<S, TlsSession>;
    type Future = BoxFuture<'static, io::Result<(Self::Stream, Self::Service)>>;

    fn accept(&self, stream: I, service: S) -> Self::Future {
        let acceptor = self.inner.clone();

        Box::pin(async move {
            let (stream, service) = acceptor.accept(stream, service).await?;
            let session = session_of(stream.get_ref().1);

            tracing::debug!(
                version = session.version,
                cipher_suite = session.cipher_suite,
                server_name = ?session.server_name,
                alpn = ?session.negotiated_protocol,
                "TLS handshake complete"
            );

            Ok((stream, Extension(session).layer(service)))
        })
    }
}
