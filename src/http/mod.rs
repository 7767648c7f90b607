//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP (or TLS via net::tls::SessionAcceptor) connection
//!     → server.rs (Axum setup, middleware, serving)
//!     → handlers.rs
//!         GET /              → page.rs (embedded template)
//!         /api/debug-info    → report::DebugReport::build → JSON
//!     → Send to client
//! ```

pub mod handlers;
pub mod page;
pub mod server;

pub use server::{AppState, HttpServer, DEBUG_INFO_PATH};
