//! Outbound HTTP client for the wellbeing API.
//!
//! # Responsibilities
//! - Issue a single GET per relayed request
//! - Treat any non-2xx status as a failure
//! - Buffer the upstream body so the caller gets it byte for byte
//!
//! No retries and no timeout: a hanging upstream only holds the request
//! that is waiting on it.

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderValue, Method, Request, StatusCode, Uri};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use std::error::Error as StdError;
use thiserror::Error;

/// The single "upstream call failed" category. Variants only differ in the
/// message that ends up in the error envelope's `details`.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("{0}")]
    Transport(String),

    #[error("Request failed with status code {}", .0.as_u16())]
    Status(StatusCode),

    #[error("Failed to read upstream response: {0}")]
    Body(String),
}

/// A successful (2xx) upstream response, kept opaque.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

/// Shared outbound client. Cloning is cheap and shares the connection pool.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client<HttpConnector, Body>,
    max_body_bytes: usize,
}

impl UpstreamClient {
    pub fn new(max_body_bytes: usize) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        Self {
            client,
            max_body_bytes,
        }
    }

    /// GET `url` and return the response if the status is 2xx.
    pub async fn get(&self, url: &str) -> Result<UpstreamResponse, UpstreamError> {
        let uri: Uri = url.parse().map_err(|e: axum::http::uri::InvalidUri| {
            UpstreamError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            }
        })?;

        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::ACCEPT, "application/json, text/plain, */*")
            .header(header::USER_AGENT, concat!("mcp-relay/", env!("CARGO_PKG_VERSION")))
            .body(Body::empty())
            .map_err(|e| UpstreamError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let response = self
            .client
            .request(request)
            .await
            .map_err(|e| UpstreamError::Transport(error_chain(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        let body = axum::body::to_bytes(Body::new(response.into_body()), self.max_body_bytes)
            .await
            .map_err(|e| UpstreamError::Body(error_chain(&e)))?;

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}

/// Render an error and its sources as one line, e.g.
/// `client error (Connect): tcp connect error: Connection refused (os error 111)`.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
