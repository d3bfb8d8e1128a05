// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render clock for the frame gate.
//!
//! [`RenderClock`] remembers two instants: when the loop started (its
//! origin) and the last *accepted* frame. Accepting a frame advances the
//! accepted timestamp by whole intervals only:
//!
//! ```text
//! last_accepted = now - ((now - last_accepted) % interval)
//! ```
//!
//! Accepted timestamps therefore stay on a grid anchored at the origin. A late
//! frame does not push the grid later, so the long-run frame rate does not
//! drift below the target.

use crate::time::{Duration, HostTime};

/// Loop origin plus drift-corrected accepted-frame timestamp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderClock {
    origin: Option<HostTime>,
    last_accepted: Option<HostTime>,
}

impl RenderClock {
    /// Creates a clock that has not seen a frame yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            origin: None,
            last_accepted: None,
        }
    }

    /// The timestamp of the first accepted frame, if any.
    #[must_use]
    pub const fn origin(&self) -> Option<HostTime> {
        self.origin
    }

    /// The drift-corrected timestamp of the last accepted frame, if any.
    #[must_use]
    pub const fn last_accepted(&self) -> Option<HostTime> {
        self.last_accepted
    }

    /// Offers a platform timestamp to the gate.
    ///
    /// The first offer is always accepted and becomes the origin. Afterwards
    /// a timestamp is accepted when at least `interval` has passed since the
    /// last accepted frame; timestamps earlier than the last accepted frame are
    /// rejected. On acceptance, returns the new (grid-aligned) accepted
    /// timestamp.
    pub fn try_accept(&mut self, now: HostTime, interval: Duration) -> Option<HostTime> {
        let Some(last) = self.last_accepted else {
            self.origin = Some(now);
            self.last_accepted = Some(now);
            return Some(now);
        };
        if now < last {
            return None;
        }
        let elapsed = now - last;
        if elapsed < interval {
            return None;
        }
        let accepted = now.saturating_sub(elapsed % interval);
        self.last_accepted = Some(accepted);
        Some(accepted)
    }

    /// Time elapsed since the origin, or zero before the first frame.
    #[must_use]
    pub fn elapsed(&self, now: HostTime) -> Duration {
        match self.origin {
            Some(origin) => now.saturating_duration_since(origin),
            None => Duration::ZERO,
        }
    }

    /// Forgets the origin and the last accepted frame.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_offer_sets_origin() {
        let mut clock = RenderClock::new();
        assert_eq!(clock.elapsed(HostTime(500)), Duration::ZERO);
        assert_eq!(clock.try_accept(HostTime(1_000), Duration(100)), Some(HostTime(1_000)));
        assert_eq!(clock.origin(), Some(HostTime(1_000)));
        assert_eq!(clock.elapsed(HostTime(1_250)), Duration(250));
    }

    #[test]
    fn remainder_is_subtracted() {
        let mut clock = RenderClock::new();
        clock.try_accept(HostTime(0), Duration(100));
        assert_eq!(clock.try_accept(HostTime(99), Duration(100)), None);
        // 130 since last → keep 100 of it, carry the 30.
        assert_eq!(clock.try_accept(HostTime(130), Duration(100)), Some(HostTime(100)));
        assert_eq!(clock.last_accepted(), Some(HostTime(100)));
        // A frame 250 after the grid point skips one whole interval.
        assert_eq!(clock.try_accept(HostTime(350), Duration(100)), Some(HostTime(300)));
    }

    #[test]
    fn earlier_timestamps_are_rejected() {
        let mut clock = RenderClock::new();
        clock.try_accept(HostTime(1_000), Duration(100));
        assert_eq!(clock.try_accept(HostTime(500), Duration(100)), None);
        assert_eq!(clock.last_accepted(), Some(HostTime(1_000)));
    }

    #[test]
    fn zero_interval_accepts_everything() {
        let mut clock = RenderClock::new();
        clock.try_accept(HostTime(0), Duration::ZERO);
        assert_eq!(clock.try_accept(HostTime(0), Duration::ZERO), Some(HostTime(0)));
        assert_eq!(clock.try_accept(HostTime(7), Duration::ZERO), Some(HostTime(7)));
    }

    #[test]
    fn reset_clears_state() {
        let mut clock = RenderClock::new();
        clock.try_accept(HostTime(10), Duration(1));
        clock.reset();
        assert_eq!(clock, RenderClock::new());
    }
}
