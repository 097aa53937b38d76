//! Logging setup built on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,resizable=debug,resizable_core=debug";

/// Install a global fmt subscriber.
///
/// Honors `RUST_LOG` when present and falls back to [`DEFAULT_FILTER`].
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install a global fmt subscriber with an explicit fallback filter.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_with_filter(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
