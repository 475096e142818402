//! Route handlers.
//!
//! Each relayed route builds one upstream URL, awaits one GET and hands the
//! outcome to [`relay`]. Handlers share nothing mutable.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Response,
};

use crate::http::request::MessagesQuery;
use crate::http::response::relay;
use crate::http::server::AppState;

/// Plain-text banner served on `/`.
pub const BANNER: &str =
    "MCP JS Server is running. Use /mcp/status to fetch team wellbeing status.";

pub const STATUS_ERROR: &str = "Failed to fetch wellbeing status";
pub const MESSAGES_ERROR: &str = "Failed to fetch Slack messages";
pub const CHANNELS_ERROR: &str = "Failed to fetch Slack channels";

/// `GET /`
pub async fn banner() -> &'static str {
    BANNER
}

/// `GET /mcp/status`
pub async fn mcp_status(State(state): State<AppState>) -> Response {
    let url = state.urls.mcp_status();
    tracing::debug!(upstream = %url, "Relaying wellbeing status");

    relay(STATUS_ERROR, state.client.get(&url).await)
}

/// `GET /mcp/slack/messages?channel=<name>`
///
/// Repeated `channel` values are forwarded joined with `,`. A query string
/// that cannot be decoded at all falls back to the default channel instead
/// of producing a 400.
pub async fn slack_messages(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let query = query
        .map(|Query(pairs)| MessagesQuery::from_pairs(pairs))
        .unwrap_or_default();
    let channel = query.channel_or(&state.default_channel);
    let url = state.urls.slack_messages(&channel);
    tracing::debug!(upstream = %url, channel = %channel, "Relaying Slack messages");

    relay(MESSAGES_ERROR, state.client.get(&url).await)
}

/// `GET /mcp/slack/channels`
pub async fn slack_channels(State(state): State<AppState>) -> Response {
    let url = state.urls.slack_channels();
    tracing::debug!(upstream = %url, "Relaying Slack channels");

    relay(CHANNELS_ERROR, state.client.get(&url).await)
}
