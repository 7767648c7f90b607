//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with both handlers
//! - Wire up middleware (tracing, timeout, body limit, cache headers)
//! - Serve plain HTTP on a bound listener, or TLS through axum-server
//! - Stop on the shutdown broadcast

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue},
    routing::{any, get},
    Router,
};
use axum_server::tls_rustls::RustlsConfig;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer, set_header::SetResponseHeaderLayer, timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::InspectorConfig;
use crate::http::handlers::{debug_info, index};
use crate::net::tls::SessionAcceptor;
use crate::report::EnvSnapshot;

/// Path of the JSON report.
pub const DEBUG_INFO_PATH: &str = "/api/debug-info";

/// How long in-flight TLS connections get to finish after shutdown.
const TLS_DRAIN_SECS: u64 = 10;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub env: Arc<EnvSnapshot>,
}

/// HTTP server for the inspector.
pub struct HttpServer {
    router: Router,
    config: InspectorConfig,
}

impl HttpServer {
    /// Create a new HTTP server reporting the given environment snapshot.
    pub fn new(config: InspectorConfig, env: EnvSnapshot) -> Self {
        let state = AppState { env: Arc::new(env) };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &InspectorConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", get(index))
            .route(DEBUG_INFO_PATH, any(debug_info))
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)));

        if config.security.no_store {
            router = router.layer(SetResponseHeaderLayer::overriding(
                header::CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            ));
        }

        router.layer(TraceLayer::new_for_http())
    }

    /// The fully layered router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting plain HTTP connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, tls = false, "HTTP server starting");

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Run the server terminating TLS on the given listener. Each request
    /// carries the session negotiated on its connection.
    pub async fn run_tls(
        self,
        listener: std::net::TcpListener,
        tls: RustlsConfig,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, tls = true, "HTTP server starting");

        let handle = axum_server::Handle::new();
        let drain = handle.clone();
        tokio::spawn(async move {
            let _ = shutdown.recv().await;
            drain.graceful_shutdown(Some(Duration::from_secs(TLS_DRAIN_SECS)));
        });

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum_server::from_tcp(listener)
            .acceptor(SessionAcceptor::new(tls))
            .handle(handle)
            .serve(app)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }
}
