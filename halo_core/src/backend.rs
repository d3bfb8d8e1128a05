// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contract between the engine, drawing backends, and painters.
//!
//! Platform-specific work lives in *backend* crates. Each backend provides:
//!
//! - **Tick source**: turns the platform's per-frame callback (e.g.
//!   `requestAnimationFrame`) into [`HostTime`] timestamps and hands them to
//!   [`SurfaceLifecycle::frame`]. This is not abstracted by a trait because
//!   setup and teardown differ fundamentally across platforms.
//!
//! - **Time**: `now() -> HostTime` and `timebase() -> Timebase` free
//!   functions reading the platform's monotonic clock.
//!
//! - **Surface**: implements [`Surface`] over an immediate-mode 2D context
//!   (e.g. `CanvasRenderingContext2D`).
//!
//! - **Viewport and pointer signals**: samples [`Viewport`]s and raw pointer
//!   positions and forwards them to the lifecycle.
//!
//! Painters implement [`Painter`]: a pure mapping from [`PaintInput`] to
//! surface calls.
//!
//! # Crate boundaries
//!
//! `halo_core` owns tiers, pacing, the lifecycle, and this contract module.
//! `halo_render` provides the painters and a recording surface. Backend crates
//! depend on both and wire them into a frame loop.
//!
//! [`HostTime`]: crate::time::HostTime
//! [`SurfaceLifecycle::frame`]: crate::lifecycle::SurfaceLifecycle::frame
//! [`Viewport`]: crate::tier::Viewport

use kurbo::{Circle, Line, Rect};

use crate::paint::{CompositeOp, RadialGradient, Rgba};
use crate::pointer::PointerSample;
use crate::surface::SurfaceDimensions;
use crate::tier::CapabilityTier;
use crate::timing::PacingConfig;

/// An immediate-mode 2D drawing target.
///
/// Painters only see this trait, so the same painter draws into a browser
/// canvas or into a command recorder in tests.
pub trait Surface {
    /// Returns `false` if the surface can no longer be drawn to (for example,
    /// its host element was removed or no 2D context was available). The
    /// lifecycle skips painting while this is `false`.
    fn is_available(&self) -> bool {
        true
    }

    /// Sets the backing pixel size.
    fn set_dimensions(&mut self, dims: SurfaceDimensions);

    /// Clears `rect` to transparent.
    fn clear(&mut self, rect: Rect);

    /// Sets the compositing mode for subsequent draws.
    fn set_composite(&mut self, op: CompositeOp);

    /// Fills `circle` with `gradient`.
    fn fill_circle(&mut self, circle: Circle, gradient: &RadialGradient);

    /// Strokes `line` with a flat color.
    fn stroke_line(&mut self, line: Line, color: Rgba, width: f64);
}

/// Everything a painter may depend on for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintInput {
    /// Seconds since the animation loop started.
    pub t: f64,
    /// The tier in force for this frame.
    pub tier: CapabilityTier,
    /// Surface size.
    pub dims: SurfaceDimensions,
    /// Latest pointer sample. Always `None` under
    /// [`CapabilityTier::Constrained`] and before the pointer first moves.
    pub pointer: Option<PointerSample>,
}

/// A procedural effect.
///
/// Implementations must be pure functions of the [`PaintInput`]: identical
/// input yields an identical sequence of surface calls. A painter makes no
/// calls at all on a [degenerate](SurfaceDimensions::is_degenerate) surface.
/// Otherwise it clears the surface first and leaves the compositing mode at
/// [`CompositeOp::SourceOver`].
pub trait Painter {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    /// Target frame rates for this effect.
    fn pacing(&self) -> PacingConfig;

    /// Draws one frame.
    fn paint<S: Surface + ?Sized>(&self, surface: &mut S, input: &PaintInput);
}
