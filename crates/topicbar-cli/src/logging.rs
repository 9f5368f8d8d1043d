//! Tracing setup.
//!
//! The subscriber is installed before the config file is read so that
//! config loading can log. `RUST_LOG` wins outright; otherwise the default
//! filter sits behind a reload handle and the config's `log_level`
//! replaces it once loaded.

use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

/// Filter used when neither RUST_LOG nor log_level is set.
pub const DEFAULT_FILTER: &str = "warn,topicbar_engine=info,topicbar_client=info";

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Install the global subscriber. Returns a handle unless RUST_LOG is set.
pub fn init() -> Option<FilterHandle> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
        return None;
    }

    let (filter, handle) = reload::Layer::new(EnvFilter::new(DEFAULT_FILTER));
    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
    Some(handle)
}

/// Replace the filter with `level`. An invalid directive keeps the old one.
pub fn apply_log_level(handle: &FilterHandle, level: &str) -> bool {
    let filter = match EnvFilter::try_new(level) {
        Ok(filter) => filter,
        Err(e) => {
            tracing::warn!("Invalid log_level '{}': {}", level, e);
            return false;
        }
    };
    match handle.reload(filter) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Failed to apply log_level '{}': {}", level, e);
            false
        }
    }
}
