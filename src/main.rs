//! Request Inspector
//!
//! Reports back everything a backend can observe about the request that
//! reached it: headers, environment, proxy metadata, TLS and cookies.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌────────────────────────────────────────────────┐
//!                     │               REQUEST INSPECTOR                │
//!                     │                                                │
//!   Client / Proxy    │  ┌──────────┐   ┌──────────┐   ┌────────────┐  │
//!   ──────────────────┼─▶│ listener │──▶│   http   │──▶│  handlers  │  │
//!                     │  │ (+ TLS)  │   │  server  │   │  / , /api  │  │
//!                     │  └──────────┘   └──────────┘   └─────┬──────┘  │
//!                     │                                      │         │
//!                     │                                      ▼         │
//!   JSON / HTML       │                               ┌────────────┐   │
//!   ◀─────────────────┼───────────────────────────────│   report   │   │
//!                     │                               │  builder   │◀──┼── EnvSnapshot
//!                     │                               └────────────┘   │
//!                     │  config · observability · lifecycle            │
//!                     └────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use request_inspector::config::{resolve_config, Overrides};
use request_inspector::lifecycle::{signals, startup, Shutdown};
use request_inspector::observability::init_logging;
use request_inspector::report::EnvSnapshot;

#[derive(Parser)]
#[command(name = "request-inspector", version)]
#[command(about = "Echo back everything a backend sees of a request", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in defaults when omitted.
    #[arg(short, long, env = "REQUEST_INSPECTOR_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on, e.g. 127.0.0.1:8000.
    #[arg(short, long)]
    bind: Option<String>,

    /// Port to listen on, keeping the configured host.
    #[arg(short, long, env = "REQUEST_INSPECTOR_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,

    /// Validate the configuration and exit.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = resolve_config(
        cli.config.as_deref(),
        Overrides {
            bind: cli.bind,
            port: cli.port,
            log_level: cli.log_level,
        },
    )?;

    if cli.check {
        println!("Configuration OK");
        return Ok(());
    }

    init_logging(&config.observability)?;

    tracing::info!("request-inspector v{} starting", env!("CARGO_PKG_VERSION"));

    let env = EnvSnapshot::capture();
    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    startup::run(config, env, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
