//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     → loader.rs (apply --port / PORT override)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → handed to RelayServer at construction
//! ```

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigError, RelayArgs};
pub use schema::{DefaultsConfig, ListenerConfig, ObservabilityConfig, RelayConfig, UpstreamConfig};
pub use validation::{validate_config, ValidationError};
