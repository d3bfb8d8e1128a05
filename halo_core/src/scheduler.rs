// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimum-interval frame gate with explicit start/cancel handles.
//!
//! The platform's per-frame callback usually fires at the display refresh
//! rate. [`FrameScheduler`] sits between that callback and the painter and
//! only lets through as many frames as the current target rate allows. See
//! the [`FrameScheduler`] docs for the handle protocol.

use crate::clock::RenderClock;
use crate::time::{Duration, HostTime, Timebase};
use crate::timing::{Delivery, FrameTick};

/// Opaque identifier of a scheduled animation loop.
///
/// Handles are never reused within one [`FrameScheduler`], so a stale handle
/// can never be mistaken for the live one.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimationHandle(u64);

impl AnimationHandle {
    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl core::fmt::Debug for AnimationHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "AnimationHandle({})", self.0)
    }
}

/// Frame gate that turns platform ticks into accepted [`FrameTick`]s.
///
/// # Handle protocol
///
/// [`start`](Self::start) returns an [`AnimationHandle`]; the platform tags
/// every frame request with it and hands each callback timestamp back through
/// [`deliver`](Self::deliver). At most one handle is live. Once a handle has
/// been [cancelled](Self::cancel) (or replaced by a new `start`), delivering
/// it never runs the tick callback again and returns
/// [`Delivery::Cancelled`], which tells the platform to stop re-requesting
/// frames for it.
///
/// # Gating
///
/// A timestamp is accepted when at least `1 / target_fps` has passed since the
/// last accepted frame. The accepted timestamp is advanced by whole intervals
/// (see [`RenderClock`]), so accepted frames never drift.
///
/// # Restarts
///
/// Calling `start` again (for example after a tier change) changes the
/// interval but keeps the [`RenderClock`]: elapsed animation time continues
/// from where it was.
///
/// # Usage
///
/// ```rust
/// use halo_core::scheduler::FrameScheduler;
/// use halo_core::time::{HostTime, Timebase};
/// use halo_core::timing::Delivery;
///
/// let mut scheduler = FrameScheduler::new(Timebase::MICROS);
/// let handle = scheduler.start(30);
///
/// let mut painted = 0;
/// for now in [0, 16_667, 33_334, 50_001] {
///     let d = scheduler.deliver(handle, HostTime(now), |_tick| painted += 1);
///     assert!(d.should_continue());
/// }
/// assert_eq!(painted, 2);
///
/// scheduler.cancel(handle);
/// let d = scheduler.deliver(handle, HostTime(100_000), |_tick| painted += 1);
/// assert_eq!(d, Delivery::Cancelled);
/// assert_eq!(painted, 2);
/// ```
#[derive(Debug)]
pub struct FrameScheduler {
    timebase: Timebase,
    clock: RenderClock,
    interval: Duration,
    target_fps: u32,
    live: Option<AnimationHandle>,
    next_handle: u64,
    accepted_frames: u64,
}

impl FrameScheduler {
    /// Creates an idle scheduler.
    #[must_use]
    pub const fn new(timebase: Timebase) -> Self {
        Self {
            timebase,
            clock: RenderClock::new(),
            interval: Duration::ZERO,
            target_fps: 0,
            live: None,
            next_handle: 1,
            accepted_frames: 0,
        }
    }

    /// Starts (or restarts) the loop at `target_fps` and returns the new live
    /// handle. Any previously live handle is cancelled.
    pub fn start(&mut self, target_fps: u32) -> AnimationHandle {
        let handle = AnimationHandle(self.next_handle);
        self.next_handle += 1;
        self.target_fps = target_fps;
        self.interval = Duration::per_frame(target_fps, self.timebase);
        self.live = Some(handle);
        handle
    }

    /// Cancels `handle`. Returns `true` if it was the live handle.
    pub fn cancel(&mut self, handle: AnimationHandle) -> bool {
        if self.live == Some(handle) {
            self.live = None;
            true
        } else {
            false
        }
    }

    /// Cancels whatever handle is live.
    pub fn cancel_all(&mut self) -> Option<AnimationHandle> {
        self.live.take()
    }

    /// Delivers a platform timestamp for `handle`.
    ///
    /// Runs `on_tick` only if `handle` is live and the timestamp passes the
    /// gate.
    pub fn deliver(
        &mut self,
        handle: AnimationHandle,
        now: HostTime,
        on_tick: impl FnOnce(&FrameTick),
    ) -> Delivery {
        if self.live != Some(handle) {
            return Delivery::Cancelled;
        }
        let Some(accepted_at) = self.clock.try_accept(now, self.interval) else {
            return Delivery::Skipped;
        };
        let tick = FrameTick {
            now,
            accepted_at,
            elapsed: self.clock.elapsed(now),
            interval: self.interval,
            frame_index: self.accepted_frames,
        };
        self.accepted_frames += 1;
        on_tick(&tick);
        Delivery::Accepted
    }

    /// The live handle, if the loop is running.
    #[must_use]
    pub const fn live_handle(&self) -> Option<AnimationHandle> {
        self.live
    }

    /// Returns `true` if a handle is live.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.live.is_some()
    }

    /// The target rate passed to the most recent [`start`](Self::start).
    #[must_use]
    pub const fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// The minimum interval between accepted frames.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// The scheduler's render clock.
    #[must_use]
    pub const fn clock(&self) -> &RenderClock {
        &self.clock
    }

    /// Number of frames accepted so far.
    #[must_use]
    pub const fn accepted_frames(&self) -> u64 {
        self.accepted_frames
    }

    /// The timebase used to derive intervals.
    #[must_use]
    pub const fn timebase(&self) -> Timebase {
        self.timebase
    }
}
