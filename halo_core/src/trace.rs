// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the animation engine.
//!
//! This module provides a [`TraceSink`] trait with one method per engine event.
//! All method bodies default to no-ops, so implementing only the events you
//! care about is fine.
//!
//! [`Tracer`] owns an optional boxed sink. When the `trace` feature is **off**,
//! every `Tracer` method compiles to nothing (zero overhead) and the sink is
//! dropped at construction. When **on**, each method performs a single
//! `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use alloc::boxed::Box;

use crate::scheduler::AnimationHandle;
use crate::surface::{LengthError, SurfaceDimensions};
use crate::tier::CapabilityTier;
use crate::time::{Duration, HostTime};
use crate::timing::Delivery;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// What happened when an accepted frame tried to paint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaintOutcome {
    /// The painter ran.
    Painted,
    /// No surface, or the surface reported itself unavailable.
    SurfaceUnavailable,
    /// Zero width or height.
    Degenerate,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once when an instance is mounted.
#[derive(Clone, Copy, Debug)]
pub struct MountEvent {
    /// Painter name.
    pub painter: &'static str,
    /// Tier from the synchronous first classification.
    pub tier: CapabilityTier,
    /// Surface size.
    pub dims: SurfaceDimensions,
    /// Target rate for `tier`.
    pub target_fps: u32,
    /// Handle of the started loop.
    pub handle: AnimationHandle,
}

/// Emitted when a settled viewport change flips the tier.
#[derive(Clone, Copy, Debug)]
pub struct TierChangeEvent {
    /// Previous tier.
    pub from: CapabilityTier,
    /// New tier.
    pub to: CapabilityTier,
    /// Viewport width that caused the change.
    pub viewport_width: f64,
    /// Host time at which the change was applied.
    pub at: HostTime,
    /// New target rate.
    pub target_fps: u32,
    /// Handle of the restarted loop.
    pub handle: AnimationHandle,
}

/// Emitted for every platform tick delivered to the scheduler.
#[derive(Clone, Copy, Debug)]
pub struct FrameDecisionEvent {
    /// Handle the tick was delivered for.
    pub handle: AnimationHandle,
    /// Platform timestamp.
    pub now: HostTime,
    /// Gate decision.
    pub delivery: Delivery,
}

/// Emitted for every accepted frame.
#[derive(Clone, Copy, Debug)]
pub struct PaintEvent {
    /// Accepted-frame counter.
    pub frame_index: u64,
    /// Platform timestamp.
    pub now: HostTime,
    /// Time since the loop started.
    pub elapsed: Duration,
    /// Tier used for this frame.
    pub tier: CapabilityTier,
    /// Whether anything was drawn.
    pub outcome: PaintOutcome,
}

/// Emitted when the surface is re-sized.
#[derive(Clone, Copy, Debug)]
pub struct ResizeEvent {
    /// Previous size.
    pub from: SurfaceDimensions,
    /// New size.
    pub to: SurfaceDimensions,
}

/// Emitted on unmount.
#[derive(Clone, Copy, Debug)]
pub struct UnmountEvent {
    /// Frames accepted over the instance's lifetime.
    pub accepted_frames: u64,
    /// Whether a live handle was cancelled.
    pub cancelled: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the engine.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when an instance is mounted.
    fn on_mount(&mut self, e: &MountEvent) {
        _ = e;
    }

    /// Called when the tier changes.
    fn on_tier_change(&mut self, e: &TierChangeEvent) {
        _ = e;
    }

    /// Called for every delivered platform tick.
    fn on_frame_decision(&mut self, e: &FrameDecisionEvent) {
        _ = e;
    }

    /// Called for every accepted frame.
    fn on_paint(&mut self, e: &PaintEvent) {
        _ = e;
    }

    /// Called when pointer tracking is switched on or off.
    fn on_pointer_tracking(&mut self, attached: bool) {
        _ = attached;
    }

    /// Called when the surface is re-sized.
    fn on_resize(&mut self, e: &ResizeEvent) {
        _ = e;
    }

    /// Called when the configured size cannot be parsed.
    fn on_config_error(&mut self, e: &LengthError) {
        _ = e;
    }

    /// Called on unmount.
    fn on_unmount(&mut self, e: &UnmountEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin owner of an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
#[derive(Default)]
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Box<dyn TraceSink>>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

macro_rules! dispatch {
    ($self:ident, $method:ident, $arg:expr) => {{
        #[cfg(feature = "trace")]
        if let Some(s) = &mut $self.sink {
            s.$method($arg);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = $arg;
        }
    }};
}

impl Tracer {
    /// Creates a tracer that dispatches to `sink`.
    #[inline]
    #[must_use]
    pub fn new(sink: Box<dyn TraceSink>) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            drop(sink);
            Self {}
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Removes and returns the sink, if any.
    pub fn take_sink(&mut self) -> Option<Box<dyn TraceSink>> {
        #[cfg(feature = "trace")]
        {
            self.sink.take()
        }
        #[cfg(not(feature = "trace"))]
        {
            None
        }
    }

    /// Emits a [`MountEvent`].
    #[inline]
    pub fn mount(&mut self, e: &MountEvent) {
        dispatch!(self, on_mount, e);
    }

    /// Emits a [`TierChangeEvent`].
    #[inline]
    pub fn tier_change(&mut self, e: &TierChangeEvent) {
        dispatch!(self, on_tier_change, e);
    }

    /// Emits a [`FrameDecisionEvent`].
    #[inline]
    pub fn frame_decision(&mut self, e: &FrameDecisionEvent) {
        dispatch!(self, on_frame_decision, e);
    }

    /// Emits a [`PaintEvent`].
    #[inline]
    pub fn paint(&mut self, e: &PaintEvent) {
        dispatch!(self, on_paint, e);
    }

    /// Emits a pointer tracking change.
    #[inline]
    pub fn pointer_tracking(&mut self, attached: bool) {
        dispatch!(self, on_pointer_tracking, attached);
    }

    /// Emits a [`ResizeEvent`].
    #[inline]
    pub fn resize(&mut self, e: &ResizeEvent) {
        dispatch!(self, on_resize, e);
    }

    /// Emits a configuration error.
    #[inline]
    pub fn config_error(&mut self, e: &LengthError) {
        dispatch!(self, on_config_error, e);
    }

    /// Emits an [`UnmountEvent`].
    #[inline]
    pub fn unmount(&mut self, e: &UnmountEvent) {
        dispatch!(self, on_unmount, e);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::FrameScheduler;
    use crate::time::Timebase;

    fn sample_handle() -> AnimationHandle {
        FrameScheduler::new(Timebase::MICROS).start(30)
    }

    #[test]
    fn noop_sink_accepts_everything() {
        let mut sink = NoopSink;
        sink.on_mount(&MountEvent {
            painter: "orb",
            tier: CapabilityTier::Full,
            dims: SurfaceDimensions::DEFAULT,
            target_fps: 30,
            handle: sample_handle(),
        });
        sink.on_pointer_tracking(true);
        sink.on_config_error(&LengthError::NotANumber("x".into()));
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.pointer_tracking(false);
        tracer.frame_decision(&FrameDecisionEvent {
            handle: sample_handle(),
            now: HostTime(0),
            delivery: Delivery::Skipped,
        });
        assert!(tracer.take_sink().is_none());
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::rc::Rc;
        use alloc::vec::Vec;
        use core::cell::RefCell;

        struct RecordingSink {
            frames: Rc<RefCell<Vec<u64>>>,
        }
        impl TraceSink for RecordingSink {
            fn on_paint(&mut self, e: &PaintEvent) {
                self.frames.borrow_mut().push(e.frame_index);
            }
        }

        let frames = Rc::new(RefCell::new(Vec::new()));
        let mut tracer = Tracer::new(Box::new(RecordingSink {
            frames: Rc::clone(&frames),
        }));
        tracer.paint(&PaintEvent {
            frame_index: 42,
            now: HostTime(0),
            elapsed: Duration::ZERO,
            tier: CapabilityTier::Full,
            outcome: PaintOutcome::Painted,
        });
        assert_eq!(*frames.borrow(), [42]);
        assert!(tracer.take_sink().is_some());
    }
}
