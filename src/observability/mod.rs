//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (startup, handshakes, report builds)
//!     → tower-http TraceLayer spans (one per request)
//!
//! Consumers:
//!     → logging.rs subscriber → stdout (pretty, compact or JSON)
//! ```
//!
//! # Design Decisions
//! - Structured fields rather than formatted messages
//! - `RUST_LOG` overrides the configured level

pub mod logging;

pub use logging::init_logging;
