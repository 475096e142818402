//! Structured logging.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset: `level` globally, the HTTP stack
/// crates at `warn`. At `info` the relay prints only its startup line.
pub fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!("{level},tower_http=warn,hyper=warn,hyper_util=warn"))
}

/// Install the global tracing subscriber. `RUST_LOG` wins when set.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level));

    // A second call (e.g. from tests) is a no-op rather than a panic.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
