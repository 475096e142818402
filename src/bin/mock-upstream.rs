//! Stand-in for the team wellbeing API, serving canned JSON so the relay
//! can be tried locally.

use axum::{extract::Query, routing::get, Json, Router};
use clap::Parser;
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;

#[derive(Parser)]
#[command(name = "mock-upstream")]
#[command(about = "Serves sample wellbeing API responses", long_about = None)]
struct Cli {
    #[arg(short, long, default_value_t = 8080)]
    port: u16,
}

#[derive(Deserialize)]
struct ChannelQuery {
    channel: Option<String>,
}

async fn mcp_status() -> Json<Value> {
    Json(json!({
        "overallMood": "positive",
        "overallStressLevel": "moderate",
        "overloadedMembers": ["charlie.tech"],
        "memberFeelings": {
            "alice.dev": "motivated",
            "bob.eng": "satisfied",
            "charlie.tech": "stretched",
        },
    }))
}

async fn slack_messages(Query(query): Query<ChannelQuery>) -> Json<Value> {
    let channel = query
        .channel
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| "general".to_string());

    Json(json!([
        {
            "messageId": "msg1",
            "channel_id": "C1234567890",
            "channel_name": channel,
            "user_id": "U1111111111",
            "username": "alice.dev",
            "text": "Good morning team! Ready for the sprint planning today",
            "timestamp": "2024-01-15T09:00:00",
            "thread_ts": null,
            "reaction_count": 5,
        },
        {
            "messageId": "msg2",
            "channel_id": "C1234567890",
            "channel_name": channel,
            "user_id": "U2222222222",
            "username": "bob.eng",
            "text": "The deployment went smoothly yesterday, great work everyone!",
            "timestamp": "2024-01-15T10:30:00",
            "thread_ts": null,
            "reaction_count": 8,
        },
    ]))
}

async fn slack_channels() -> Json<Value> {
    Json(json!(["general", "development", "random", "team-updates"]))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    mcp_relay::observability::init_logging("info");

    let app = Router::new()
        .route("/api/wellbeing/mcp/status", get(mcp_status))
        .route("/api/wellbeing/slack/messages", get(slack_messages))
        .route("/api/wellbeing/slack/channels", get(slack_channels));

    let addr = SocketAddr::from(([127, 0, 0, 1], cli.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(address = %addr, "Mock wellbeing API listening");

    axum::serve(listener, app).await?;
    Ok(())
}
