//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, trace layer)
//!     → request.rs (query extraction, default substitution)
//!     → handlers.rs (build upstream URL, await one GET)
//!     → response.rs (mirror upstream or emit error envelope)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::ErrorEnvelope;
pub use server::{AppState, RelayServer};
