//! Upstream wellbeing API access.
//!
//! # Data Flow
//! ```text
//! handler
//!     → url.rs (fixed base + path, percent-encoded query)
//!     → client.rs (single GET, 2xx or UpstreamError)
//!     → handler maps the outcome to a response
//! ```

pub mod client;
pub mod url;

pub use client::{UpstreamClient, UpstreamError, UpstreamResponse};
pub use url::UpstreamUrls;
