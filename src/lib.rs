//! TTL Cache - A bounded in-memory key-value cache
//!
//! Provides a capacity-bounded store with per-entry TTL expiration and
//! eviction by first-insertion order.

pub mod cache;
pub mod config;
pub mod error;
pub mod logging;
pub mod tasks;

pub use cache::{Cache, SharedCache};
pub use config::CacheConfig;
pub use error::{ConfigError, DbError};
pub use tasks::spawn_sweep_task;
