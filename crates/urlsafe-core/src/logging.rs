//! Logging init: tracing subscriber writing to stderr, env-filter controlled.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
///
/// Honours `RUST_LOG`; without it, logs at info with debug for the urlsafe
/// crates. Call once at process startup; the core itself only emits events
/// and works with or without a subscriber installed.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,urlsafe_core=debug,urlsafed=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
