//! Structured logging.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Level comes from configuration; RUST_LOG overrides it when set

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Initialize the global tracing subscriber.
pub fn init(config: &ObservabilityConfig) {
    let default_filter = format!(
        "testnet_faucet={},tower_http=info",
        config.log_level
    );
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
