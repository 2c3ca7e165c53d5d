#![doc(test(attr(deny(warnings))))]

//! Fintrack turns raw income and expense records into monthly summaries,
//! goal progress, and savings tips, and gates feature access through a
//! one-time purchase activation flow.

pub use fintrack_core as core;
pub use fintrack_domain as domain;
pub use fintrack_store_json as store_json;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("fintrack=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Fintrack tracing initialized.");
    });
}
