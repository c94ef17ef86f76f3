//! Client configuration defaults and the process-wide debug flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Base URL for the public CoinGecko REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of retries when retries are enabled.
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;

/// Default delay between retries when retries are enabled.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Requests per minute allowed on the public (demo) tier.
pub const RATE_LIMIT_PER_MINUTE: u32 = 30;

static DEBUG: AtomicBool = AtomicBool::new(false);

/// Turn verbose diagnostics on or off for every client in the process.
///
/// The flag is read each time a diagnostic is emitted, so changing it affects
/// requests that fail afterwards.
pub fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

/// Whether verbose diagnostics are enabled.
pub fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

/// Settings consumed by [`CoinGeckoClient`](crate::rest::CoinGeckoClient).
///
/// Retries and rate limiting are both off by default: the retry and rate
/// values are kept as configuration but have no effect until enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL, endpoint paths are appended to it.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Maximum retries for transient failures.
    pub retry_attempts: u32,
    /// Minimum delay between retries.
    pub retry_delay: Duration,
    /// Whether transient failures are retried.
    pub retry_enabled: bool,
    /// Requests allowed per sliding minute.
    pub rate_limit_per_minute: u32,
    /// Whether `rate_limit_per_minute` is enforced before each request.
    pub rate_limit_enforced: bool,
    /// Custom user agent, defaults to `coingecko-api-client/<version>`.
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
            retry_enabled: false,
            rate_limit_per_minute: RATE_LIMIT_PER_MINUTE,
            rate_limit_enforced: false,
            user_agent: None,
        }
    }
}
