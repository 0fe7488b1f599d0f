//! Log subscriber installation for the `holdem` binary.
//!
//! Library code (the engine, the command handlers) only emits `tracing`
//! events. The binary installs one `fmt` subscriber writing to stderr so log
//! lines never interleave with the table rendered on stdout.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn,holdem_engine=info";

/// Filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
