//! Tracing setup: env-filtered subscriber with optional JSON output.

pub mod events;
pub mod spans;

use std::sync::Once;

use biosearch_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a filter directive, e.g.
/// `BIOSEARCH_LOG=biosearch_retrieval=debug,biosearch_storage=warn`.
pub const LOG_ENV: &str = "BIOSEARCH_LOG";

static INIT: Once = Once::new();

/// Filter from `BIOSEARCH_LOG`, falling back to the configured level.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Idempotent. If another subscriber was installed first, that one stays.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config);
        let registry = tracing_subscriber::registry().with(filter);

        let installed = if config.json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_span_list(true),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };

        if installed.is_ok() {
            tracing::debug!(json = config.json, level = %config.log_level, "tracing initialized");
        }
    });
}
