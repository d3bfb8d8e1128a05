// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debouncing driven by caller-supplied timestamps.
//!
//! Viewport resize events arrive in bursts. [`Debouncer`] holds on to the most
//! recent value and only releases it once no newer value has arrived for the
//! quiet period. It never reads a clock and never owns a timer: the owner
//! polls it, typically from the frame loop, so there is nothing to cancel on
//! teardown.

use crate::time::{Duration, HostTime};

/// Holds the latest pushed value until it has been quiet for `delay`.
///
/// The latest value is never dropped: it is released by [`poll`](Self::poll)
/// once settled or by [`flush`](Self::flush) on demand.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, HostTime)>,
}

impl<T> Debouncer<T> {
    /// Creates an empty debouncer with the given quiet period.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Returns the quiet period.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Records a new value observed at `now`, replacing any pending value and
    /// restarting the quiet period.
    pub fn push(&mut self, value: T, now: HostTime) {
        self.pending = Some((value, now));
    }

    /// Returns the pending value if it has been quiet for at least the delay.
    ///
    /// A `now` earlier than the push time counts as not yet settled.
    pub fn poll(&mut self, now: HostTime) -> Option<T> {
        let (_, pushed_at) = self.pending.as_ref()?;
        if now.saturating_duration_since(*pushed_at) < self.delay {
            return None;
        }
        self.pending.take().map(|(value, _)| value)
    }

    /// Releases the pending value regardless of the quiet period.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Returns `true` if a value is waiting to settle.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops any pending value.
    pub fn clear(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn releases_after_quiet_period() {
        let mut d = Debouncer::new(Duration(100));
        d.push(1, HostTime(0));
        assert_eq!(d.poll(HostTime(99)), None);
        assert_eq!(d.poll(HostTime(100)), Some(1));
        assert_eq!(d.poll(HostTime(500)), None, "value is released only once");
    }

    #[test]
    fn burst_keeps_latest_value() {
        let mut d = Debouncer::new(Duration(100));
        d.push(1, HostTime(0));
        d.push(2, HostTime(50));
        d.push(3, HostTime(120));
        assert_eq!(d.poll(HostTime(150)), None, "quiet period restarts on push");
        assert_eq!(d.poll(HostTime(220)), Some(3));
    }

    #[test]
    fn flush_ignores_delay() {
        let mut d = Debouncer::new(Duration(100));
        assert_eq!(d.flush(), None);
        d.push("last", HostTime(10));
        assert!(d.is_pending());
        assert_eq!(d.flush(), Some("last"));
        assert!(!d.is_pending());
    }

    #[test]
    fn clock_going_backwards_does_not_release() {
        let mut d = Debouncer::new(Duration(100));
        d.push(7, HostTime(1_000));
        assert_eq!(d.poll(HostTime(10)), None);
        assert!(d.is_pending(), "value must survive an out-of-order poll");
    }

    #[test]
    fn clear_drops_pending() {
        let mut d = Debouncer::new(Duration(100));
        d.push(1, HostTime(0));
        d.clear();
        assert_eq!(d.poll(HostTime(1_000)), None);
    }
}
