//! Per-minute request log backing [`RequestThrottle`](super::RequestThrottle).

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Send times of recent requests, oldest first.
///
/// A permit is granted while fewer than `limit` requests were sent during the
/// last `period`. Entries are only stored for requests actually made, so a
/// huge limit costs nothing up front.
#[derive(Debug)]
pub struct SlidingWindow {
    sent: VecDeque<Instant>,
    period: Duration,
    limit: u32,
}

impl SlidingWindow {
    /// Allow `limit` requests in any `period`.
    pub fn new(period: Duration, limit: u32) -> Self {
        Self {
            sent: VecDeque::new(),
            period,
            limit,
        }
    }

    /// Record a request if the window has room.
    ///
    /// On refusal returns how long until the oldest request expires.
    pub fn try_acquire(&mut self) -> Result<(), Duration> {
        let now = Instant::now();
        self.expire(now);

        if (self.sent.len() as u64) < u64::from(self.limit) {
            self.sent.push_back(now);
            return Ok(());
        }
        let wait = self
            .sent
            .front()
            .map(|oldest| self.period.saturating_sub(now.duration_since(*oldest)))
            .unwrap_or(self.period);
        Err(wait)
    }

    /// Permits left before the window is full.
    pub fn remaining(&self) -> u32 {
        let now = Instant::now();
        let live = self
            .sent
            .iter()
            .filter(|at| now.duration_since(**at) < self.period)
            .count();
        self.limit
            .saturating_sub(u32::try_from(live).unwrap_or(u32::MAX))
    }

    /// Requests allowed per period.
    pub fn capacity(&self) -> u32 {
        self.limit
    }

    fn expire(&mut self, now: Instant) {
        while let Some(oldest) = self.sent.front() {
            if now.duration_since(*oldest) < self.period {
                break;
            }
            self.sent.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_refuses_past_limit() {
        let mut window = SlidingWindow::new(Duration::from_secs(60), 3);

        assert!(window.try_acquire().is_ok());
        assert!(window.try_acquire().is_ok());
        assert!(window.try_acquire().is_ok());
        let wait = window.try_acquire().unwrap_err();
        assert!(wait <= Duration::from_secs(60));
    }

    #[test]
    fn test_frees_up_after_period() {
        let mut window = SlidingWindow::new(Duration::from_millis(50), 1);

        assert!(window.try_acquire().is_ok());
        assert!(window.try_acquire().is_err());

        thread::sleep(Duration::from_millis(60));

        assert!(window.try_acquire().is_ok());
    }

    #[test]
    fn test_remaining() {
        let mut window = SlidingWindow::new(Duration::from_secs(60), 2);

        assert_eq!(window.remaining(), 2);
        window.try_acquire().ok();
        assert_eq!(window.remaining(), 1);
        assert_eq!(window.capacity(), 2);
    }

    #[test]
    fn test_huge_limit_is_lazy() {
        let mut window = SlidingWindow::new(Duration::from_secs(60), u32::MAX);

        assert!(window.try_acquire().is_ok());
        assert_eq!(window.remaining(), u32::MAX - 1);
    }
}
