//! Shared utilities for integration tests.

use std::net::SocketAddr;

use request_inspector::config::InspectorConfig;
use request_inspector::http::HttpServer;
use request_inspector::lifecycle::Shutdown;
use request_inspector::report::EnvSnapshot;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A running inspector on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub task: JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the inspector with the given environment snapshot.
pub async fn start_inspector(env: EnvSnapshot) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = InspectorConfig::default();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, env);
    let server_shutdown = shutdown.subscribe();

    let task = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestServer {
        addr,
        shutdown,
        task,
    }
}

/// Client that never goes through an ambient HTTP proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
