//! Resize-notification debouncing for breakpoint consumers.
//!
//! Viewport resizes arrive in bursts. [`ResizeDebouncer`] holds the latest
//! width until no new width has been observed for the configured delay, so
//! the dashboard re-resolves its breakpoint once per burst. Time is passed in
//! by the caller.

use std::time::{Duration, Instant};

/// Default quiet period before a resize is delivered.
pub const DEFAULT_RESIZE_DEBOUNCE: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy)]
struct Pending {
    width: u32,
    last_seen: Instant,
}

/// Coalesces a burst of viewport widths into the last one.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    delay: Duration,
    pending: Option<Pending>,
}

impl ResizeDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Records a width and restarts the quiet period.
    pub fn observe(&mut self, width: u32, now: Instant) {
        self.pending = Some(Pending {
            width,
            last_seen: now,
        });
    }

    /// Returns the latest width once the quiet period has elapsed.
    ///
    /// A delivered width is cleared; later polls return `None` until the
    /// next `observe`.
    pub fn poll(&mut self, now: Instant) -> Option<u32> {
        let pending = self.pending?;
        if now.saturating_duration_since(pending.last_seen) >= self.delay {
            self.pending = None;
            Some(pending.width)
        } else {
            None
        }
    }

    /// Whether a width is waiting for its quiet period.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_RESIZE_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_poll_without_observation_returns_none() {
        let mut debouncer = ResizeDebouncer::default();
        assert_eq!(debouncer.poll(Instant::now()), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_width_delivered_after_quiet_period() {
        let start = Instant::now();
        let mut debouncer = ResizeDebouncer::new(ms(150));
        debouncer.observe(1024, start);
        assert_eq!(debouncer.poll(start + ms(100)), None);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.poll(start + ms(150)), Some(1024));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_burst_delivers_only_last_width() {
        let start = Instant::now();
        let mut debouncer = ResizeDebouncer::new(ms(150));
        debouncer.observe(1300, start);
        debouncer.observe(1100, start + ms(50));
        debouncer.observe(700, start + ms(100));
        // Quiet period restarts at the last observation.
        assert_eq!(debouncer.poll(start + ms(200)), None);
        assert_eq!(debouncer.poll(start + ms(250)), Some(700));
    }

    #[test]
    fn test_delivered_width_is_cleared() {
        let start = Instant::now();
        let mut debouncer = ResizeDebouncer::new(ms(10));
        debouncer.observe(800, start);
        assert_eq!(debouncer.poll(start + ms(10)), Some(800));
        assert_eq!(debouncer.poll(start + ms(20)), None);
    }

    #[test]
    fn test_zero_delay_delivers_immediately() {
        let start = Instant::now();
        let mut debouncer = ResizeDebouncer::new(Duration::ZERO);
        debouncer.observe(480, start);
        assert_eq!(debouncer.poll(start), Some(480));
    }
}
