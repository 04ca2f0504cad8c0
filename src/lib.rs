pub mod analyst;
pub mod attachment;
pub mod config;
pub mod error;
pub mod handlers;
pub mod locale;
pub mod metrics;
pub mod models;
pub mod providers;
pub mod server;
pub mod signals;
pub mod tariff;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// Note: This function can only be called once per process.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
