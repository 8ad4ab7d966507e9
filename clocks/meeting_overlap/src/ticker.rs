//! Periodic clock refresh
//!
//! The frame loop polls the ticker every update; it fires at most once per
//! interval. Cancelling it is final, so nothing fires after teardown.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    last_fired: Instant,
    cancelled: bool,
}

impl Ticker {
    /// Start a ticker whose first firing is one interval after `start`
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            last_fired: start,
            cancelled: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true when an interval has elapsed since the last firing
    ///
    /// Missed intervals collapse into a single firing.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.cancelled || now.saturating_duration_since(self.last_fired) < self.interval {
            return false;
        }
        self.last_fired = now;
        true
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_secs(60), start);
        assert!(!ticker.poll(start + Duration::from_secs(59)));
        assert!(ticker.poll(start + Duration::from_secs(60)));
        assert!(!ticker.poll(start + Duration::from_secs(61)));
        assert!(ticker.poll(start + Duration::from_secs(120)));
    }

    #[test]
    fn test_missed_intervals_collapse() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_secs(60), start);
        assert!(ticker.poll(start + Duration::from_secs(600)));
        assert!(!ticker.poll(start + Duration::from_secs(601)));
    }

    #[test]
    fn test_cancel_is_final() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_secs(1), start);
        ticker.cancel();
        assert!(!ticker.poll(start + Duration::from_secs(3600)));
    }
}
