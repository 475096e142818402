//! Response handling.
//!
//! # Responsibilities
//! - Mirror a successful upstream response (status + body) to the caller
//! - Map any upstream failure to the fixed `{error, details}` envelope
//!
//! The upstream failure status is never surfaced; failures are always 500.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::upstream::{UpstreamError, UpstreamResponse};

/// JSON body returned when the upstream call fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    /// Fixed, per-route message.
    pub error: &'static str,
    /// Description of what went wrong upstream.
    pub details: String,
}

impl ErrorEnvelope {
    pub fn new(error: &'static str, cause: &UpstreamError) -> Self {
        Self {
            error,
            details: cause.to_string(),
        }
    }
}

impl IntoResponse for ErrorEnvelope {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        let content_type = self
            .content_type
            .unwrap_or_else(|| HeaderValue::from_static("application/json"));

        (self.status, [(header::CONTENT_TYPE, content_type)], self.body).into_response()
    }
}

/// Turn the outcome of one upstream call into the caller's response.
pub fn relay(error_message: &'static str, outcome: Result<UpstreamResponse, UpstreamError>) -> Response {
    match outcome {
        Ok(upstream) => upstream.into_response(),
        Err(e) => {
            tracing::debug!(error = %e, "{}", error_message);
            ErrorEnvelope::new(error_message, &e).into_response()
        }
    }
}
