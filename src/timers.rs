//! Deadline-based timers driven by the UI loop
//!
//! Nothing here sleeps or spawns. Every timer is advanced by passing the
//! current instant, so the UI loop's 100 ms poll drives them and tests can
//! step time explicitly.

use std::time::{Duration, Instant};

use crate::catalog::FEATURED_WINDOW;

/// Delay before the splash screen hands over to the main screen
pub const SPLASH_DELAY: Duration = Duration::from_millis(3000);

/// Featured highlight rotation period
pub const ROTATION_PERIOD: Duration = Duration::from_millis(5000);

/// Default quiet period before a suggestion request is issued
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

// =============================================================================
// One-shot
// =============================================================================

/// Fires once after a fixed delay
#[derive(Debug, Clone)]
pub struct OneShot {
    deadline: Option<Instant>,
}

impl OneShot {
    pub fn start(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: Some(now + delay),
        }
    }

    /// True exactly once, on the first poll at or past the deadline
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

// =============================================================================
// Feature Rotation
// =============================================================================

/// Cycles the featured highlight through the featured window
#[derive(Debug, Clone)]
pub struct FeatureRotation {
    index: usize,
    next_at: Option<Instant>,
    period: Duration,
}

impl Default for FeatureRotation {
    fn default() -> Self {
        Self::new(ROTATION_PERIOD)
    }
}

impl FeatureRotation {
    pub fn new(period: Duration) -> Self {
        Self {
            index: 0,
            next_at: None,
            period,
        }
    }

    /// Currently highlighted position in the featured window
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_running(&self) -> bool {
        self.next_at.is_some()
    }

    /// Arm the timer; a running timer keeps its schedule
    pub fn start(&mut self, now: Instant) {
        if self.next_at.is_none() {
            self.next_at = Some(now + self.period);
        }
    }

    /// Disarm the timer; the index is kept for when the view returns
    pub fn stop(&mut self) {
        self.next_at = None;
    }

    /// Back to the first featured item
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Keep the index inside a window that may have shrunk
    pub fn clamp(&mut self, window: usize) {
        if self.index >= window.min(FEATURED_WINDOW) {
            self.index = 0;
        }
    }

    /// Apply every firing due by `now`; returns how many fired
    pub fn tick(&mut self, now: Instant, window: usize) -> usize {
        let window = window.min(FEATURED_WINDOW);
        let mut fired = 0;

        while let Some(next_at) = self.next_at {
            if now < next_at {
                break;
            }
            self.index = if window == 0 {
                0
            } else {
                (self.index + 1) % window
            };
            self.next_at = Some(next_at + self.period);
            fired += 1;
        }

        fired
    }
}

// =============================================================================
// Debounce
// =============================================================================

/// Holds the latest value until input has been quiet for `delay`
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debounce<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending value and restart the quiet period
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending value once its quiet period has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, due)) if now >= *due => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_one_shot_fires_once() {
        let t0 = Instant::now();
        let mut timer = OneShot::start(t0, SPLASH_DELAY);
        assert!(!timer.poll(t0 + ms(2999)));
        assert!(timer.poll(t0 + ms(3000)));
        assert!(!timer.poll(t0 + ms(9000)));
    }

    #[test]
    fn test_one_shot_cancelled_never_fires() {
        let t0 = Instant::now();
        let mut timer = OneShot::start(t0, SPLASH_DELAY);
        timer.cancel();
        assert!(!timer.poll(t0 + ms(5000)));
    }

    #[test]
    fn test_rotation_full_cycle() {
        let t0 = Instant::now();
        let mut rotation = FeatureRotation::default();
        rotation.start(t0);

        assert_eq!(rotation.tick(t0 + ms(4999), 5), 0);
        assert_eq!(rotation.index(), 0);

        assert_eq!(rotation.tick(t0 + ms(20_000), 5), 4);
        assert_eq!(rotation.index(), 4);

        assert_eq!(rotation.tick(t0 + ms(25_000), 5), 1);
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn test_rotation_short_window() {
        let t0 = Instant::now();
        let mut rotation = FeatureRotation::default();
        rotation.start(t0);

        rotation.tick(t0 + ms(10_000), 2);
        assert_eq!(rotation.index(), 0);
        rotation.tick(t0 + ms(15_000), 2);
        assert_eq!(rotation.index(), 1);
    }

    #[test]
    fn test_rotation_empty_window_stays_at_zero() {
        let t0 = Instant::now();
        let mut rotation = FeatureRotation::default();
        rotation.start(t0);
        rotation.tick(t0 + ms(30_000), 0);
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn test_rotation_stopped_does_not_fire() {
        let t0 = Instant::now();
        let mut rotation = FeatureRotation::default();
        rotation.start(t0);
        rotation.stop();
        assert_eq!(rotation.tick(t0 + ms(60_000), 5), 0);
        assert!(!rotation.is_running());
    }

    #[test]
    fn test_rotation_restart_keeps_index() {
        let t0 = Instant::now();
        let mut rotation = FeatureRotation::default();
        rotation.start(t0);
        rotation.tick(t0 + ms(10_000), 5);
        rotation.stop();

        let t1 = t0 + ms(40_000);
        rotation.start(t1);
        assert_eq!(rotation.index(), 2);
        assert_eq!(rotation.tick(t1 + ms(4_000), 5), 0);
        assert_eq!(rotation.tick(t1 + ms(5_000), 5), 1);
        assert_eq!(rotation.index(), 3);
    }

    #[test]
    fn test_rotation_clamp() {
        let t0 = Instant::now();
        let mut rotation = FeatureRotation::default();
        rotation.start(t0);
        rotation.tick(t0 + ms(15_000), 5);
        assert_eq!(rotation.index(), 3);
        rotation.clamp(2);
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn test_debounce_takes_latest_after_quiet_period() {
        let t0 = Instant::now();
        let mut debounce = Debounce::new(ms(300));

        debounce.schedule("lo", t0);
        debounce.schedule("los", t0 + ms(100));
        assert_eq!(debounce.poll(t0 + ms(300)), None);
        assert_eq!(debounce.poll(t0 + ms(400)), Some("los"));
        assert_eq!(debounce.poll(t0 + ms(900)), None);
    }

    #[test]
    fn test_debounce_cancel() {
        let t0 = Instant::now();
        let mut debounce = Debounce::new(ms(300));
        debounce.schedule(1, t0);
        debounce.cancel();
        assert!(!debounce.is_pending());
        assert_eq!(debounce.poll(t0 + ms(1000)), None);
    }

    #[test]
    fn test_zero_delay_debounce_fires_on_next_poll() {
        let t0 = Instant::now();
        let mut debounce = Debounce::new(Duration::ZERO);
        debounce.schedule(7, t0);
        assert_eq!(debounce.poll(t0), Some(7));
    }
}
