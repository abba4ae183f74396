//! Configuration Module
//!
//! Handles loading cache configuration from code, JSON or environment variables.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Cache configuration parameters.
///
/// Durations are whole milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of live entries
    pub capacity: usize,
    /// Entry lifetime in milliseconds, None = entries never expire
    #[serde(default)]
    pub ttl: Option<u64>,
    /// Background sweep interval in milliseconds, None = lazy expiry only.
    /// Read by [`SharedCache::with_sweep`](crate::SharedCache::with_sweep).
    #[serde(default)]
    pub sweep_interval: Option<u64>,
}

impl CacheConfig {
    /// Creates a config with the given capacity and no expiry.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ttl: None,
            sweep_interval: None,
        }
    }

    /// Sets the entry lifetime in milliseconds.
    pub fn with_ttl(mut self, ttl_ms: u64) -> Self {
        self.ttl = Some(ttl_ms);
        self
    }

    /// Sets the background sweep interval in milliseconds.
    pub fn with_sweep_interval(mut self, interval_ms: u64) -> Self {
        self.sweep_interval = Some(interval_ms);
        self
    }

    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum live entries (default: 1000)
    /// - `CACHE_TTL_MS` - Entry lifetime in milliseconds (default: none)
    /// - `CACHE_SWEEP_INTERVAL_MS` - Sweep interval in milliseconds (default: none)
    pub fn from_env() -> Self {
        Self {
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            ttl: env::var("CACHE_TTL_MS").ok().and_then(|v| v.parse().ok()),
            sweep_interval: env::var("CACHE_SWEEP_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Parses and validates a JSON document such as `{"capacity": 3, "ttl": 60000}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects a zero capacity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::InvalidCapacity(self.capacity));
        }
        Ok(())
    }

    pub fn ttl_duration(&self) -> Option<Duration> {
        self.ttl.map(Duration::from_millis)
    }

    pub fn sweep_interval_duration(&self) -> Option<Duration> {
        self.sweep_interval.map(Duration::from_millis)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.ttl, None);
        assert_eq!(config.sweep_interval, None);
    }

    #[test]
    fn test_config_builder() {
        let config = CacheConfig::new(3).with_ttl(60_000);
        assert_eq!(config.capacity, 3);
        assert_eq!(config.ttl_duration(), Some(Duration::from_secs(60)));
        assert_eq!(config.sweep_interval_duration(), None);

        let config = config.with_sweep_interval(250);
        assert_eq!(config.sweep_interval_duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_config_from_env() {
        // Single test touching these vars to avoid races between tests
        env::remove_var("CACHE_CAPACITY");
        env::remove_var("CACHE_TTL_MS");
        env::remove_var("CACHE_SWEEP_INTERVAL_MS");
        assert_eq!(CacheConfig::from_env(), CacheConfig::default());

        env::set_var("CACHE_CAPACITY", "25");
        env::set_var("CACHE_TTL_MS", "1500");
        env::set_var("CACHE_SWEEP_INTERVAL_MS", "not-a-number");
        let config = CacheConfig::from_env();
        assert_eq!(config.capacity, 25);
        assert_eq!(config.ttl, Some(1500));
        assert_eq!(config.sweep_interval, None);

        env::remove_var("CACHE_CAPACITY");
        env::remove_var("CACHE_TTL_MS");
        env::remove_var("CACHE_SWEEP_INTERVAL_MS");
    }

    #[test]
    fn test_config_from_json() {
        let config = CacheConfig::from_json(r#"{"capacity": 3, "ttl": 60000}"#).unwrap();
        assert_eq!(config.capacity, 3);
        assert_eq!(config.ttl, Some(60_000));
        assert_eq!(config.sweep_interval, None);
    }

    #[test]
    fn test_config_from_json_without_ttl() {
        let config = CacheConfig::from_json(r#"{"capacity": 3}"#).unwrap();
        assert_eq!(config.ttl_duration(), None);
    }

    #[test]
    fn test_config_from_json_rejects_zero_capacity() {
        let result = CacheConfig::from_json(r#"{"capacity": 0}"#);
        assert!(matches!(result, Err(ConfigError::InvalidCapacity(0))));
    }

    #[test]
    fn test_config_from_json_rejects_malformed() {
        let result = CacheConfig::from_json(r#"{"ttl": 5}"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }
}
