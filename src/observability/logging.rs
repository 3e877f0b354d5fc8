//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Configure log level via `RUST_LOG`
//!
//! Private keys never appear in log fields; see the ledger module's
//! security constraints.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "token_launch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
