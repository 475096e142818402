//! Observability subsystem.
//!
//! Logging only: the relay emits a startup line at `info` and per-request
//! events at `debug`/`warn` through `tracing`.

pub mod logging;

pub use logging::init_logging;
