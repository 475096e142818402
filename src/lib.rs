//! MCP relay library.
//!
//! Forwards a handful of MCP routes to the team wellbeing API and mirrors
//! the upstream answer, or returns a fixed error envelope when the upstream
//! call fails.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::RelayConfig;
pub use http::RelayServer;
pub use lifecycle::Shutdown;
