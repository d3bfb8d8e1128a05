// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The orb: a glowing disc with a wandering gradient core.

use halo_core::backend::{PaintInput, Painter, Surface};
use halo_core::paint::{CompositeOp, RadialGradient, Rgba};
use halo_core::surface::SurfaceDimensions;
use halo_core::tier::CapabilityTier;
use halo_core::timing::PacingConfig;
#[cfg(not(feature = "std"))]
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Circle;

use crate::glow::draw_pointer_glow;
use crate::motion::{Motion, TierMotion, overlay_due};

/// Tunable parameters of the orb.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbStyle {
    /// Frame rates per tier.
    pub pacing: PacingConfig,
    /// Gradient wander per tier.
    pub motion: Motion,
    /// Outer radius of the base gradient, as a fraction of the width.
    pub gradient_radius: f64,
    /// Outer radius of the glow gradient, as a fraction of the width.
    pub glow_radius: f64,
    /// Under Constrained tier the glow is drawn only during whole seconds
    /// divisible by this.
    pub overlay_modulus: u32,
}

impl OrbStyle {
    /// The stock orb.
    pub const DEFAULT: Self = Self {
        pacing: PacingConfig::orb(),
        motion: Motion {
            constrained: TierMotion {
                time_scale: 0.3,
                amplitude: 0.05,
            },
            full: TierMotion {
                time_scale: 1.0,
                amplitude: 0.1,
            },
        },
        gradient_radius: 0.8,
        glow_radius: 0.5,
        overlay_modulus: 3,
    };
}

impl Default for OrbStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Paints the orb.
///
/// ```
/// use halo_core::backend::{PaintInput, Painter};
/// use halo_core::surface::SurfaceDimensions;
/// use halo_core::tier::CapabilityTier;
/// use halo_render::{DrawList, OrbPainter};
///
/// let mut list = DrawList::new();
/// OrbPainter::default().paint(
///     &mut list,
///     &PaintInput {
///         t: 0.0,
///         tier: CapabilityTier::Full,
///         dims: SurfaceDimensions::DEFAULT,
///         pointer: None,
///     },
/// );
/// assert_eq!(list.fills().count(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbPainter {
    style: OrbStyle,
}

impl OrbPainter {
    /// Creates an orb painter with a custom style.
    #[must_use]
    pub const fn new(style: OrbStyle) -> Self {
        Self { style }
    }

    /// The style in use.
    #[must_use]
    pub const fn style(&self) -> &OrbStyle {
        &self.style
    }

    /// The base gradient at phase `theta`.
    #[must_use]
    pub fn base_gradient(
        &self,
        dims: SurfaceDimensions,
        tier: CapabilityTier,
        theta: f64,
    ) -> RadialGradient {
        let motion = self.style.motion.for_tier(tier);
        let start = Circle::new(motion.center(dims, theta), 0.0);
        let end = Circle::new(
            dims.center(),
            dims.to_size().width * self.style.gradient_radius,
        );
        let gradient = RadialGradient::new(start, end);
        match tier {
            CapabilityTier::Constrained => gradient
                .with_stop(0.0, Rgba::new(110, 50, 255, 0.9))
                .with_stop(0.5, Rgba::new(40, 90, 255, 0.7))
                .with_stop(1.0, Rgba::new(30, 30, 120, 0.8)),
            CapabilityTier::Full => gradient
                .with_stop(0.0, Rgba::new(110, 50, 255, 0.8 + theta.sin() * 0.1))
                .with_stop(0.3, Rgba::new(60, 80, 255, 0.7 + theta.cos() * 0.05))
                .with_stop(0.6, Rgba::new(20, 120, 255, 0.8 + (theta * 0.5).sin() * 0.05))
                .with_stop(1.0, Rgba::new(30, 30, 120, 0.8)),
        }
    }

    /// The centered glow overlay.
    #[must_use]
    pub fn glow_gradient(&self, dims: SurfaceDimensions, tier: CapabilityTier) -> RadialGradient {
        let c = dims.center();
        let gradient = RadialGradient::new(
            Circle::new(c, 0.0),
            Circle::new(c, dims.to_size().width * self.style.glow_radius),
        );
        match tier {
            CapabilityTier::Constrained => gradient
                .with_stop(0.0, Rgba::new(255, 255, 255, 0.5))
                .with_stop(1.0, Rgba::new(50, 50, 200, 0.0)),
            CapabilityTier::Full => gradient
                .with_stop(0.0, Rgba::new(255, 255, 255, 0.8))
                .with_stop(0.2, Rgba::new(200, 200, 255, 0.3))
                .with_stop(0.5, Rgba::new(100, 100, 255, 0.1))
                .with_stop(1.0, Rgba::new(50, 50, 200, 0.0)),
        }
    }
}

impl Painter for OrbPainter {
    fn name(&self) -> &'static str {
        "orb"
    }

    fn pacing(&self) -> PacingConfig {
        self.style.pacing
    }

    fn paint<S: Surface + ?Sized>(&self, surface: &mut S, input: &PaintInput) {
        let PaintInput {
            t,
            tier,
            dims,
            pointer,
        } = *input;
        if dims.is_degenerate() {
            return;
        }
        let theta = self.style.motion.for_tier(tier).phase(t);
        let disc = Circle::new(dims.center(), dims.radius());

        surface.clear(dims.to_rect());
        surface.fill_circle(disc, &self.base_gradient(dims, tier, theta));

        if overlay_due(t, tier, self.style.overlay_modulus) {
            surface.set_composite(CompositeOp::Lighter);
            surface.fill_circle(disc, &self.glow_gradient(dims, tier));
        }

        if tier.is_full()
            && let Some(sample) = pointer
        {
            draw_pointer_glow(surface, dims, sample);
        }

        surface.set_composite(CompositeOp::SourceOver);
    }
}
