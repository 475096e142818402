//! Inbound request extraction.
//!
//! Query parameters are read leniently: unknown parameters are ignored,
//! repeated `channel` values are joined with `,`, and empty values count as
//! absent so the default is substituted.

use axum::http::HeaderName;

/// Header carrying the per-request correlation ID.
pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Query string of `GET /mcp/slack/messages`.
#[derive(Debug, Default)]
pub struct MessagesQuery {
    channels: Vec<String>,
}

impl MessagesQuery {
    /// Keep every non-empty `channel` value, in request order.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let channels = pairs
            .into_iter()
            .filter(|(key, value)| key == "channel" && !value.is_empty())
            .map(|(_, value)| value)
            .collect();

        Self { channels }
    }

    /// The requested channel(s), or `default` when none were given.
    pub fn channel_or(&self, default: &str) -> String {
        if self.channels.is_empty() {
            default.to_string()
        } else {
            self.channels.join(",")
        }
    }
}
