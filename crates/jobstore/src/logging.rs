use crate::config::LoggerConfig;

use tracing_subscriber::EnvFilter;

/// Installs a global `fmt` subscriber filtered at the configured level.
///
/// `RUST_LOG`, when set, takes precedence. Only the first call installs a
/// subscriber; later calls return `false` and leave it in place.
pub fn init(config: &LoggerConfig) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
