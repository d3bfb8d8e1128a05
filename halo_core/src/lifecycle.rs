// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-instance lifecycle: mount, frame, resize, unmount.
//!
//! [`SurfaceLifecycle`] owns every piece of state belonging to one mounted
//! logo: the surface, its dimensions, the current tier, the frame scheduler,
//! the pointer tracker, and the resize debouncer. A backend drives it with
//! three kinds of signals:
//!
//! - platform ticks, through [`frame`](SurfaceLifecycle::frame),
//! - viewport samples, through
//!   [`viewport_changed`](SurfaceLifecycle::viewport_changed),
//! - pointer moves, through [`pointer_moved`](SurfaceLifecycle::pointer_moved).
//!
//! Viewport changes are debounced and applied at the start of the next
//! platform tick, so a tier flip never takes effect retroactively and never
//! later than the first tick after the debounce delay.

use alloc::boxed::Box;

use kurbo::{Point, Rect};

use crate::backend::{PaintInput, Painter, Surface};
use crate::debounce::Debouncer;
use crate::pointer::{PointerSample, PointerTracker};
use crate::scheduler::{AnimationHandle, FrameScheduler};
use crate::surface::{LogoConfig, SurfaceDimensions};
use crate::tier::{CapabilityTier, TierClassifier, Viewport};
use crate::time::{Duration, HostTime, Timebase};
use crate::timing::Delivery;
use crate::trace::{
    FrameDecisionEvent, MountEvent, PaintEvent, PaintOutcome, ResizeEvent, TierChangeEvent,
    TraceSink, Tracer, UnmountEvent,
};

/// Quiet period before a viewport change is re-classified.
pub const RESIZE_DEBOUNCE_MILLIS: u64 = 100;

/// Result of handing one platform tick to [`SurfaceLifecycle::frame`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameOutcome {
    /// The frame passed the gate and the painter ran (if it could).
    Accepted,
    /// Too early; request the next platform frame.
    Skipped,
    /// The handle is stale or the instance is unmounted. Stop requesting
    /// frames for it.
    Cancelled,
    /// A settled tier change restarted the scheduler. The tick was delivered
    /// to the new handle; deliver subsequent ticks with it.
    Restarted(AnimationHandle),
}

impl FrameOutcome {
    /// Returns `true` if the platform should request another frame.
    #[must_use]
    pub const fn should_continue(self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl From<Delivery> for FrameOutcome {
    fn from(delivery: Delivery) -> Self {
        match delivery {
            Delivery::Accepted => Self::Accepted,
            Delivery::Skipped => Self::Skipped,
            Delivery::Cancelled => Self::Cancelled,
        }
    }
}

/// One mounted logo instance.
///
/// Dropping the lifecycle unmounts it.
pub struct SurfaceLifecycle<S: Surface, P: Painter> {
    surface: Option<S>,
    painter: P,
    config: LogoConfig,
    dims: SurfaceDimensions,
    classifier: TierClassifier,
    tier: CapabilityTier,
    scheduler: FrameScheduler,
    pointer: PointerTracker,
    resize: Debouncer<Viewport>,
    tracer: Tracer,
    mounted: bool,
}

impl<S: Surface, P: Painter> core::fmt::Debug for SurfaceLifecycle<S, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SurfaceLifecycle")
            .field("painter", &self.painter.name())
            .field("dims", &self.dims)
            .field("tier", &self.tier)
            .field("scheduler", &self.scheduler)
            .field("pointer", &self.pointer)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl<S: Surface, P: Painter> SurfaceLifecycle<S, P> {
    /// Mounts an instance with the default classifier and no tracing.
    ///
    /// See [`mount_with`](Self::mount_with).
    pub fn mount(
        config: LogoConfig,
        surface: Option<S>,
        painter: P,
        viewport: &Viewport,
        timebase: Timebase,
    ) -> Self {
        Self::mount_with(
            config,
            surface,
            painter,
            viewport,
            timebase,
            TierClassifier::DEFAULT,
            Tracer::none(),
        )
    }

    /// Mounts an instance.
    ///
    /// Sizes the surface from `config`, classifies `viewport` synchronously,
    /// starts the scheduler at the tier's rate, and attaches the pointer
    /// tracker under [`CapabilityTier::Full`]. An unparsable length sizes that
    /// side to zero and is reported through `tracer`.
    pub fn mount_with(
        config: LogoConfig,
        mut surface: Option<S>,
        painter: P,
        viewport: &Viewport,
        timebase: Timebase,
        classifier: TierClassifier,
        mut tracer: Tracer,
    ) -> Self {
        let (dims, error) = config.dimensions_lossy();
        if let Some(e) = &error {
            tracer.config_error(e);
        }
        if let Some(s) = &mut surface {
            s.set_dimensions(dims);
        }

        let tier = classifier.classify_viewport(viewport);
        let mut scheduler = FrameScheduler::new(timebase);
        let target_fps = painter.pacing().target_fps(tier);
        let handle = scheduler.start(target_fps);

        tracer.mount(&MountEvent {
            painter: painter.name(),
            tier,
            dims,
            target_fps,
            handle,
        });

        let mut this = Self {
            surface,
            painter,
            config,
            dims,
            classifier,
            tier,
            scheduler,
            pointer: PointerTracker::new(),
            resize: Debouncer::new(Duration::from_millis(RESIZE_DEBOUNCE_MILLIS, timebase)),
            tracer,
            mounted: true,
        };
        this.sync_pointer();
        this
    }

    /// Records a viewport sample. It is classified once no further sample has
    /// arrived for [`RESIZE_DEBOUNCE_MILLIS`].
    pub fn viewport_changed(&mut self, viewport: Viewport, now: HostTime) {
        if self.mounted {
            self.resize.push(viewport, now);
        }
    }

    /// Handles one platform tick for `handle`.
    ///
    /// Applies a settled viewport change first. If it flips the tier, the
    /// scheduler restarts at the new rate (elapsed time carries over) and the
    /// tick is delivered to the new handle. The painter runs on acceptance.
    pub fn frame(&mut self, handle: AnimationHandle, now: HostTime) -> FrameOutcome {
        if !self.mounted || self.scheduler.live_handle() != Some(handle) {
            return FrameOutcome::Cancelled;
        }

        let mut handle = handle;
        let mut restarted = false;
        if let Some(viewport) = self.resize.poll(now)
            && let Some(new_handle) = self.apply_viewport(&viewport, now)
        {
            handle = new_handle;
            restarted = true;
        }

        let Self {
            surface,
            painter,
            dims,
            tier,
            scheduler,
            pointer,
            tracer,
            ..
        } = self;
        let (tier, dims, pointer) = (*tier, *dims, pointer.sample());
        let timebase = scheduler.timebase();
        let delivery = scheduler.deliver(handle, now, |tick| {
            let outcome = match surface.as_mut() {
                Some(s) if s.is_available() => {
                    if dims.is_degenerate() {
                        PaintOutcome::Degenerate
                    } else {
                        let input = PaintInput {
                            t: tick.elapsed.as_secs_f64(timebase),
                            tier,
                            dims,
                            pointer,
                        };
                        painter.paint(s, &input);
                        PaintOutcome::Painted
                    }
                }
                _ => PaintOutcome::SurfaceUnavailable,
            };
            tracer.paint(&PaintEvent {
                frame_index: tick.frame_index,
                now,
                elapsed: tick.elapsed,
                tier,
                outcome,
            });
        });
        tracer.frame_decision(&FrameDecisionEvent {
            handle,
            now,
            delivery,
        });

        if restarted {
            FrameOutcome::Restarted(handle)
        } else {
            delivery.into()
        }
    }

    /// Re-sizes the surface after the host container's configured size
    /// changed. The tier is not affected.
    pub fn resize_surface(&mut self, config: LogoConfig) {
        let (dims, error) = config.dimensions_lossy();
        if let Some(e) = &error {
            self.tracer.config_error(e);
        }
        if let Some(s) = &mut self.surface {
            s.set_dimensions(dims);
        }
        if dims != self.dims {
            self.tracer.resize(&ResizeEvent {
                from: self.dims,
                to: dims,
            });
        }
        self.dims = dims;
        self.config = config;
    }

    /// Forwards a raw pointer position. Ignored unless tracking.
    pub fn pointer_moved(&mut self, raw: Point, bounds: Rect) -> Option<PointerSample> {
        if !self.mounted {
            return None;
        }
        self.pointer.on_move(raw, bounds)
    }

    /// Returns `true` if the platform should have a pointer listener attached
    /// right now.
    #[must_use]
    pub const fn pointer_tracking(&self) -> bool {
        self.pointer.is_attached()
    }

    /// Tears the instance down: cancels the live handle, stops pointer
    /// tracking, and drops any pending viewport sample. Idempotent.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        let cancelled = self.scheduler.cancel_all().is_some();
        self.resize.clear();
        self.sync_pointer();
        self.tracer.unmount(&UnmountEvent {
            accepted_frames: self.scheduler.accepted_frames(),
            cancelled,
        });
    }

    /// The live handle, or `None` once unmounted.
    #[must_use]
    pub const fn live_handle(&self) -> Option<AnimationHandle> {
        self.scheduler.live_handle()
    }

    /// The tier in force.
    #[must_use]
    pub const fn tier(&self) -> CapabilityTier {
        self.tier
    }

    /// Current surface dimensions.
    #[must_use]
    pub const fn dimensions(&self) -> SurfaceDimensions {
        self.dims
    }

    /// The configuration the surface was last sized from.
    #[must_use]
    pub const fn config(&self) -> &LogoConfig {
        &self.config
    }

    /// The frame scheduler.
    #[must_use]
    pub const fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    /// The painter.
    #[must_use]
    pub const fn painter(&self) -> &P {
        &self.painter
    }

    /// The surface, if one was provided.
    #[must_use]
    pub const fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Mutable access to the surface.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Returns `true` until [`unmount`](Self::unmount).
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Removes and returns the trace sink, if any.
    pub fn take_trace_sink(&mut self) -> Option<Box<dyn TraceSink>> {
        self.tracer.take_sink()
    }

    /// Classifies `viewport` and restarts the scheduler if the tier changed.
    fn apply_viewport(&mut self, viewport: &Viewport, now: HostTime) -> Option<AnimationHandle> {
        let tier = self.classifier.classify_viewport(viewport);
        if tier == self.tier {
            return None;
        }
        let from = self.tier;
        self.tier = tier;
        let target_fps = self.painter.pacing().target_fps(tier);
        let handle = self.scheduler.start(target_fps);
        self.sync_pointer();
        self.tracer.tier_change(&TierChangeEvent {
            from,
            to: tier,
            viewport_width: viewport.width,
            at: now,
            target_fps,
            handle,
        });
        Some(handle)
    }

    /// Attaches the pointer tracker iff mounted under Full tier.
    fn sync_pointer(&mut self) {
        let want = self.mounted && self.tier.is_full();
        if want == self.pointer.is_attached() {
            return;
        }
        if want {
            self.pointer.attach();
        } else {
            self.pointer.detach();
        }
        self.tracer.pointer_tracking(want);
    }
}

impl<S: Surface, P: Painter> Drop for SurfaceLifecycle<S, P> {
    fn drop(&mut self) {
        self.unmount();
    }
}
