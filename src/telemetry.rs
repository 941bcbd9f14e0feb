//! Logging bootstrap.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "library_api=info,library_server=info,tower_http=info";

/// Install the global fmt subscriber. `RUST_LOG` overrides [`DEFAULT_FILTER`].
/// Calling twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).try_init().ok();
}
