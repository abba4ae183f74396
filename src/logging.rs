//! Logging Module
//!
//! Installs a `tracing` subscriber for applications and tests embedding the cache.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "ttl_cache=info";

/// Initializes a global subscriber with an env filter and fmt output.
///
/// `RUST_LOG` overrides `default_filter`. Returns false if a global
/// subscriber was already installed, in which case nothing changes.
pub fn init(default_filter: &str) -> bool {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
