//! MCP relay.
//!
//! A small HTTP relay in front of the team wellbeing API.
//!
//! ```text
//!     Client ──▶ GET /mcp/status           ──▶ {base}/api/wellbeing/mcp/status
//!            ──▶ GET /mcp/slack/messages   ──▶ {base}/api/wellbeing/slack/messages?channel=…
//!            ──▶ GET /mcp/slack/channels   ──▶ {base}/api/wellbeing/slack/channels
//!            ──▶ GET /                     ──▶ (local banner)
//! ```
//!
//! Upstream success is mirrored verbatim; any upstream failure becomes a
//! 500 with `{"error": "...", "details": "..."}`.

use clap::Parser;
use tokio::net::TcpListener;

use mcp_relay::config::RelayArgs;
use mcp_relay::observability::init_logging;
use mcp_relay::{RelayServer, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RelayArgs::parse().into_config()?;
    init_logging(&config.observability.log_level);

    tracing::debug!(
        bind_address = %config.listener.bind_address(),
        upstream = %config.upstream.base_url,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(config.listener.bind_address()).await?;

    // Held for the life of the process; OS signals drive shutdown here.
    let shutdown = Shutdown::new();
    RelayServer::new(config).run(listener, shutdown.subscribe()).await?;

    Ok(())
}
