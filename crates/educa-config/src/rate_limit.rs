//! Rate limiting configuration for the authentication endpoints.
//!
//! Login, signup and the password flows are throttled per client address
//! with a token bucket:
//!
//! - `RATE_LIMIT_AUTH_PER_SECOND`: tokens replenished per second (default: 10)
//! - `RATE_LIMIT_AUTH_BURST_SIZE`: bucket capacity (default: 5)
//! - `RATE_LIMIT_ENABLED`: set to `false` to disable throttling (default: true)

use std::num::NonZeroU32;

use governor::Quota;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub enabled: bool,
    pub auth_per_second: u32,
    pub auth_burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            auth_per_second: 10,
            auth_burst_size: 5,
        }
    }
}

impl RateLimitConfig {
    /// Falls back to defaults for unset or unparseable variables.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: std::env::var("RATE_LIMIT_ENABLED")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.enabled),
            auth_per_second: std::env::var("RATE_LIMIT_AUTH_PER_SECOND")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.auth_per_second),
            auth_burst_size: std::env::var("RATE_LIMIT_AUTH_BURST_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.auth_burst_size),
        }
    }

    /// Token bucket quota for auth endpoints. Zero values are raised to one.
    #[must_use]
    pub fn auth_quota(&self) -> Quota {
        let per_second = NonZeroU32::new(self.auth_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(self.auth_burst_size).unwrap_or(NonZeroU32::MIN);
        Quota::per_second(per_second).allow_burst(burst)
    }
}
