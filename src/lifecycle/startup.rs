//! Startup orchestration.
//!
//! # Responsibilities
//! - Resolve the listening address from validated configuration
//! - Load TLS material when TLS is configured
//! - Bind the listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;
use std::path::Path;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::InspectorConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::net::tls::load_tls_config;
use crate::report::EnvSnapshot;

/// Errors that stop the server from starting or keep it from serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid bind address '{address}': {source}")]
    Address {
        address: String,
        source: std::net::AddrParseError,
    },
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        source: std::io::Error,
    },
    #[error("failed to load TLS material: {0}")]
    Tls(std::io::Error),
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Serve `config` until `shutdown` fires.
pub async fn run(
    config: InspectorConfig,
    env: EnvSnapshot,
    shutdown: &Shutdown,
) -> Result<(), ServerError> {
    let address: SocketAddr = config
        .listener
        .bind_address
        .parse()
        .map_err(|source| ServerError::Address {
            address: config.listener.bind_address.clone(),
            source,
        })?;

    tracing::info!(
        bind_address = %address,
        tls = config.listener.tls.is_some(),
        request_timeout_secs = config.timeouts.request_secs,
        env_vars = env.len(),
        "Configuration loaded"
    );

    let tls = match &config.listener.tls {
        Some(tls) => Some(
            load_tls_config(Path::new(&tls.cert_path), Path::new(&tls.key_path))
                .await
                .map_err(ServerError::Tls)?,
        ),
        None => None,
    };

    let server = HttpServer::new(config, env);
    let signal = shutdown.subscribe();

    match tls {
        Some(tls) => {
            let listener = std::net::TcpListener::bind(address)
                .map_err(|source| ServerError::Bind { address, source })?;
            server.run_tls(listener, tls, signal).await?
        }
        None => {
            let listener = TcpListener::bind(address)
                .await
                .map_err(|source| ServerError::Bind { address, source })?;
            server.run(listener, signal).await?
        }
    }

    Ok(())
}
