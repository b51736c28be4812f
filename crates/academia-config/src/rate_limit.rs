//! Rate limiting configuration for the login endpoint.
//!
//! Password guessing is the only abuse vector worth throttling here, so only
//! `POST /api/login` is limited. The key is the client IP as reported by
//! `X-Forwarded-For` / `X-Real-Ip` / `Forwarded`, falling back to the peer
//! address.
//!
//! - `RATE_LIMIT_LOGIN_PER_SECOND`: seconds between replenished attempts (default: 10)
//! - `RATE_LIMIT_LOGIN_BURST_SIZE`: attempts allowed in a burst (default: 5)

use tower_governor::governor::{GovernorConfig, GovernorConfigBuilder};
use tower_governor::key_extractor::SmartIpKeyExtractor;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Interval, in seconds, after which one login attempt is replenished.
    pub login_per_second: u64,
    /// Maximum login attempts that can accumulate.
    pub login_burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            login_per_second: 10,
            login_burst_size: 5,
        }
    }
}

impl RateLimitConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            login_per_second: std::env::var("RATE_LIMIT_LOGIN_PER_SECOND")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.login_per_second),
            login_burst_size: std::env::var("RATE_LIMIT_LOGIN_BURST_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.login_burst_size),
        }
    }

    /// Creates a `GovernorConfig` for the login route.
    ///
    /// # Panics
    ///
    /// Panics if either value is zero.
    #[must_use]
    pub fn login_governor_config(
        &self,
    ) -> GovernorConfig<SmartIpKeyExtractor, ::governor::middleware::NoOpMiddleware> {
        GovernorConfigBuilder::default()
            .per_second(self.login_per_second)
            .burst_size(self.login_burst_size)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .expect("Failed to build login rate limiter config")
    }
}
