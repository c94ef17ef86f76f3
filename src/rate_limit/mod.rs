//! Optional client-side rate limiting.
//!
//! The public API allows roughly 30 requests per minute. The client only
//! throttles itself when [`ClientConfig::rate_limit_enforced`] is set,
//! otherwise the limit is advisory.
//!
//! [`ClientConfig::rate_limit_enforced`]: crate::config::ClientConfig::rate_limit_enforced
//!
//! ```rust
//! use std::time::Duration;
//! use coingecko_api_client::rate_limit::SlidingWindow;
//!
//! let mut window = SlidingWindow::new(Duration::from_secs(60), 30);
//! assert!(window.try_acquire().is_ok());
//! assert_eq!(window.remaining(), 29);
//! ```

mod window;

pub use window::SlidingWindow;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

/// Shared per-minute request throttle.
///
/// Clones share the same window.
#[derive(Debug, Clone)]
pub struct RequestThrottle {
    window: Arc<Mutex<SlidingWindow>>,
}

impl RequestThrottle {
    /// Allow `per_minute` requests in any 60 second window.
    pub fn per_minute(per_minute: u32) -> Self {
        Self::new(Duration::from_secs(60), per_minute)
    }

    /// Allow `max_requests` requests in any `window`.
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            window: Arc::new(Mutex::new(SlidingWindow::new(window, max_requests.max(1)))),
        }
    }

    /// Wait until a permit is available and take it.
    pub async fn acquire(&self) {
        loop {
            let mut window = self.window.lock().await;
            match window.try_acquire() {
                Ok(()) => return,
                Err(wait_time) => {
                    let limit = window.capacity();
                    drop(window);
                    tracing::debug!(?wait_time, limit, "rate limit reached, waiting");
                    tokio::time::sleep(wait_time).await;
                }
            }
        }
    }

    /// Remaining permits in the current window.
    pub async fn remaining(&self) -> u32 {
        self.window.lock().await.remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_throttle_shared_between_clones() {
        let throttle = RequestThrottle::per_minute(2);
        let other = throttle.clone();

        throttle.acquire().await;
        other.acquire().await;
        assert_eq!(throttle.remaining().await, 0);
    }

    #[tokio::test]
    async fn test_throttle_waits_for_window() {
        let throttle = RequestThrottle::new(Duration::from_millis(40), 1);
        throttle.acquire().await;

        let start = std::time::Instant::now();
        throttle.acquire().await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
