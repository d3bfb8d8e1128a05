// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame timing types.
//!
//! - [`PacingConfig`]: target frame rate per [`CapabilityTier`]
//! - [`FrameTick`]: an accepted frame, handed to the tick callback
//! - [`Delivery`]: what happened to a platform tick, and whether the
//!   platform should request another one
//!
//! # Data flow
//!
//! 1. The backend receives a timestamp from its per-frame callback (e.g.
//!    `requestAnimationFrame`).
//! 2. It passes the timestamp and its [`AnimationHandle`] to
//!    [`FrameScheduler::deliver()`](crate::scheduler::FrameScheduler::deliver).
//! 3. The scheduler gates the timestamp against the tier's interval. If the
//!    tick is accepted, the tick callback receives a [`FrameTick`].
//! 4. The returned [`Delivery`] tells the backend whether to request the next
//!    frame.
//!
//! [`AnimationHandle`]: crate::scheduler::AnimationHandle

use crate::tier::CapabilityTier;
use crate::time::{Duration, HostTime};

/// Target frame rates for each tier.
///
/// Presets match the two logo effects: the orb is cheap to look at and runs
/// slower, the ray fan is busier and runs faster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PacingConfig {
    /// Frames per second under [`CapabilityTier::Constrained`].
    pub constrained_fps: u32,
    /// Frames per second under [`CapabilityTier::Full`].
    pub full_fps: u32,
}

impl PacingConfig {
    /// Pacing for the gradient orb: 15 / 30 fps.
    #[must_use]
    pub const fn orb() -> Self {
        Self {
            constrained_fps: 15,
            full_fps: 30,
        }
    }

    /// Pacing for the ray fan: 30 / 60 fps.
    #[must_use]
    pub const fn ray_fan() -> Self {
        Self {
            constrained_fps: 30,
            full_fps: 60,
        }
    }

    /// Returns the target rate for `tier`.
    #[must_use]
    pub const fn target_fps(&self, tier: CapabilityTier) -> u32 {
        match tier {
            CapabilityTier::Constrained => self.constrained_fps,
            CapabilityTier::Full => self.full_fps,
        }
    }
}

/// An accepted frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameTick {
    /// Raw timestamp delivered by the platform.
    pub now: HostTime,
    /// Drift-corrected accepted-frame timestamp recorded in the
    /// [`RenderClock`](crate::clock::RenderClock).
    pub accepted_at: HostTime,
    /// Time since the loop started. Survives scheduler restarts.
    pub elapsed: Duration,
    /// Minimum interval in force when this frame was accepted.
    pub interval: Duration,
    /// Count of accepted frames before this one.
    pub frame_index: u64,
}

/// Outcome of delivering a platform tick to the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Delivery {
    /// The tick passed the gate and the tick callback ran.
    Accepted,
    /// The tick arrived too early; the callback did not run. Request the next
    /// frame.
    Skipped,
    /// The handle is not live. Do not request further frames for it.
    Cancelled,
}

impl Delivery {
    /// Returns `true` if the platform should request another frame.
    #[must_use]
    pub const fn should_continue(self) -> bool {
        matches!(self, Self::Accepted | Self::Skipped)
    }
}
