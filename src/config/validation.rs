//! Configuration validation.
//!
//! Serde handles the syntax; this module checks the values make sense
//! together. All problems are reported, not just the first.

use thiserror::Error;
use url::Url;

use crate::config::schema::RelayConfig;

/// A single semantic problem found in a [`RelayConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("upstream.base_url '{url}' is not a valid URL: {reason}")]
    InvalidUpstreamUrl { url: String, reason: String },

    #[error("upstream.base_url '{0}' must use the http scheme")]
    UnsupportedScheme(String),

    #[error("upstream.max_body_bytes must be greater than zero")]
    ZeroBodyLimit,

    #[error("listener.host must not be empty")]
    EmptyHost,

    #[error("defaults.channel must not be empty")]
    EmptyDefaultChannel,
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }

    match Url::parse(&config.upstream.base_url) {
        // The outbound connector speaks plain HTTP only.
        Ok(url) if url.scheme() != "http" => {
            errors.push(ValidationError::UnsupportedScheme(config.upstream.base_url.clone()));
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidUpstreamUrl {
            url: config.upstream.base_url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.upstream.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if config.defaults.channel.is_empty() {
        errors.push(ValidationError::EmptyDefaultChannel);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
