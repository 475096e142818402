//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the relay routes
//! - Wire up middleware (request ID, tracing)
//! - Bind the router to a listener and serve until shutdown

use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::RelayConfig;
use crate::http::handlers;
use crate::http::request::X_REQUEST_ID;
use crate::lifecycle::signals::wait_for_signal;
use crate::lifecycle::ShutdownSignal;
use crate::upstream::{UpstreamClient, UpstreamUrls};

/// Application state injected into handlers. Read-only after construction.
#[derive(Clone)]
pub struct AppState {
    pub client: UpstreamClient,
    pub urls: UpstreamUrls,
    pub default_channel: Arc<str>,
}

impl AppState {
    pub fn from_config(config: &RelayConfig) -> Self {
        Self {
            client: UpstreamClient::new(config.upstream.max_body_bytes),
            urls: UpstreamUrls::new(&config.upstream.base_url),
            default_channel: Arc::from(config.defaults.channel.as_str()),
        }
    }
}

/// HTTP server for the relay.
pub struct RelayServer {
    router: Router,
}

impl RelayServer {
    /// Create a new relay server with the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        let state = AppState::from_config(&config);
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::banner))
            .route("/mcp/status", get(handlers::mcp_status))
            .route("/mcp/slack/messages", get(handlers::slack_messages))
            .route("/mcp/slack/channels", get(handlers::slack_channels))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(X_REQUEST_ID.clone(), MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::new(X_REQUEST_ID.clone())),
            )
    }

    /// The fully layered router, for embedding or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve on `listener` until an OS signal or `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!("MCP JS Server listening on port {}", addr.port());

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = wait_for_signal() => {}
                    _ = shutdown.requested() => {}
                }
            })
            .await?;

        tracing::debug!("HTTP server stopped");
        Ok(())
    }
}
