//! Diagnostic logging setup.
//!
//! Events go to stderr so stdout stays clean for `--json` output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the event filter.
///
/// An explicit level wins over `RUST_LOG`, which wins over [`DEFAULT_FILTER`].
pub fn env_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(level: Option<&str>) {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let _ = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(console_layer)
        .try_init();
}
