//! Upstream URL construction.

/// Path prefix shared by every wellbeing API endpoint.
pub const API_PREFIX: &str = "/api/wellbeing";

/// Builds the upstream URL for each relayed route from a fixed base.
#[derive(Debug, Clone)]
pub struct UpstreamUrls {
    base: String,
}

impl UpstreamUrls {
    /// `base_url` is the upstream origin, e.g. `http://localhost:8080`.
    /// A trailing slash is tolerated.
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `{base}/api/wellbeing/mcp/status`
    pub fn mcp_status(&self) -> String {
        format!("{}{}/mcp/status", self.base, API_PREFIX)
    }

    /// `{base}/api/wellbeing/slack/messages?channel=<encoded>`
    ///
    /// The caller is responsible for substituting the default channel.
    pub fn slack_messages(&self, channel: &str) -> String {
        format!(
            "{}{}/slack/messages?channel={}",
            self.base,
            API_PREFIX,
            urlencoding::encode(channel)
        )
    }

    /// `{base}/api/wellbeing/slack/channels`
    pub fn slack_channels(&self) -> String {
        format!("{}{}/slack/channels", self.base, API_PREFIX)
    }
}
