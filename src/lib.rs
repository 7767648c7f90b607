//! Request Inspector Library

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod report;

pub use config::InspectorConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use report::{DebugReport, EnvSnapshot};
