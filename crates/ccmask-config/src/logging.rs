//! Logging bootstrap for ccmask.
//!
//! Diagnostics go to stderr so the wrapped compiler keeps exclusive use of
//! stdout. Filter resolution order: `CCMASK_LOG`, then `RUST_LOG`, then
//! `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the ccmask-specific log filter.
pub const LOG_ENV_VAR: &str = "CCMASK_LOG";

/// Initialize the global tracing subscriber.
/// Call this once at application startup.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
