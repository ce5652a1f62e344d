//! Console logging bootstrap.
//!
//! Installs a `tracing` subscriber writing human-readable events to
//! stderr, filtered through `RUST_LOG` (defaulting to `info`).

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Call once at process startup. Subsequent calls are ignored rather than
/// panicking, so tests and embedders can call it freely.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
