//! Waiter configuration.

use std::time::Duration;

use nimbus_core::{NimbusError, NimbusResult};
use nimbus_dynamodb_model::waiter::{DEFAULT_INTERVAL_SECS, DEFAULT_MAX_ATTEMPTS, WaiterDescriptor};

/// Polling cadence for a waiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaiterConfig {
    /// Delay between attempts.
    pub interval: Duration,
    /// Attempts before giving up. Always at least 1.
    pub max_attempts: u32,
}

impl Default for WaiterConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl WaiterConfig {
    /// The cadence declared by a waiter descriptor.
    #[must_use]
    pub fn for_descriptor(descriptor: &WaiterDescriptor) -> Self {
        Self {
            interval: Duration::from_secs(descriptor.interval_secs),
            max_attempts: descriptor.max_attempts,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `WAITER_INTERVAL_SECS` | `20` |
    /// | `WAITER_MAX_ATTEMPTS` | `25` |
    pub fn from_env() -> NimbusResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> NimbusResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("WAITER_INTERVAL_SECS") {
            let secs: u64 = v.trim().parse().map_err(|_| {
                NimbusError::Config(format!("WAITER_INTERVAL_SECS is not a number: {v}"))
            })?;
            config.interval = Duration::from_secs(secs);
        }
        if let Some(v) = lookup("WAITER_MAX_ATTEMPTS") {
            let attempts: u32 = v.trim().parse().map_err(|_| {
                NimbusError::Config(format!("WAITER_MAX_ATTEMPTS is not a number: {v}"))
            })?;
            if attempts == 0 {
                return Err(NimbusError::Config(
                    "WAITER_MAX_ATTEMPTS must be at least 1".to_owned(),
                ));
            }
            config.max_attempts = attempts;
        }

        Ok(config)
    }

    /// Override the interval.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Override the attempt limit. Zero is clamped to one.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }
}
