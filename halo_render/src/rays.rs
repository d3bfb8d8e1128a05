// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ray fan: a gradient disc with rotating light rays.

use core::f64::consts::TAU;

use halo_core::backend::{PaintInput, Painter, Surface};
use halo_core::paint::{CompositeOp, RadialGradient, Rgba};
use halo_core::surface::SurfaceDimensions;
use halo_core::tier::CapabilityTier;
use halo_core::timing::PacingConfig;
#[cfg(not(feature = "std"))]
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Circle, Line, Vec2};

use crate::glow::draw_pointer_glow;
use crate::motion::{Motion, TierMotion, overlay_due};

/// Tunable parameters of the ray fan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayFanStyle {
    /// Frame rates per tier.
    pub pacing: PacingConfig,
    /// Gradient wander and fan rotation per tier.
    pub motion: Motion,
    /// Outer radius of the base gradient, as a fraction of the width.
    pub gradient_radius: f64,
    /// Ray length, as a fraction of the width.
    pub ray_length: f64,
    /// Number of rays under Constrained tier.
    pub constrained_rays: u32,
    /// Number of rays under Full tier.
    pub full_rays: u32,
    /// Under Constrained tier the rays are drawn only during whole seconds
    /// divisible by this.
    pub overlay_modulus: u32,
}

impl RayFanStyle {
    /// The stock ray fan.
    pub const DEFAULT: Self = Self {
        pacing: PacingConfig::ray_fan(),
        motion: Motion {
            constrained: TierMotion {
                time_scale: 0.1,
                amplitude: 0.25,
            },
            full: TierMotion {
                time_scale: 0.2,
                amplitude: 0.5,
            },
        },
        gradient_radius: 0.7,
        ray_length: 0.5,
        constrained_rays: 6,
        full_rays: 12,
        overlay_modulus: 2,
    };

    /// Number of rays for `tier`.
    #[must_use]
    pub const fn rays(&self, tier: CapabilityTier) -> u32 {
        match tier {
            CapabilityTier::Constrained => self.constrained_rays,
            CapabilityTier::Full => self.full_rays,
        }
    }
}

impl Default for RayFanStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Paints the ray fan.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RayFanPainter {
    style: RayFanStyle,
}

impl RayFanPainter {
    /// Creates a ray fan painter with a custom style.
    #[must_use]
    pub const fn new(style: RayFanStyle) -> Self {
        Self { style }
    }

    /// The style in use.
    #[must_use]
    pub const fn style(&self) -> &RayFanStyle {
        &self.style
    }

    /// The base gradient at phase `theta`, centered on the wandering point.
    #[must_use]
    pub fn base_gradient(
        &self,
        dims: SurfaceDimensions,
        tier: CapabilityTier,
        theta: f64,
    ) -> RadialGradient {
        let center = self.style.motion.for_tier(tier).center(dims, theta);
        let gradient = RadialGradient::new(
            Circle::new(center, 0.0),
            Circle::new(center, dims.to_size().width * self.style.gradient_radius),
        );
        let (sin, cos) = match tier {
            CapabilityTier::Constrained => (0.0, 0.0),
            CapabilityTier::Full => (theta.sin(), theta.cos()),
        };
        gradient
            .with_stop(0.0, Rgba::new(130, 60, 255, 0.9 + sin * 0.05))
            .with_stop(0.4, Rgba::new(80, 100, 255, 0.8 + cos * 0.05))
            .with_stop(0.8, Rgba::new(20, 70, 255, 0.6 + sin * 0.05))
            .with_stop(1.0, Rgba::new(10, 10, 80, 0.0))
    }

    fn draw_rays<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        dims: SurfaceDimensions,
        tier: CapabilityTier,
        t: f64,
        theta: f64,
    ) {
        let count = self.style.rays(tier);
        let origin = dims.center();
        let length = dims.to_size().width * self.style.ray_length;
        surface.set_composite(CompositeOp::Lighter);
        for i in 0..count {
            let i = f64::from(i);
            let angle = i / f64::from(count) * TAU + theta;
            let tip = origin + Vec2::from_angle(angle) * length;
            let (color, width) = match tier {
                CapabilityTier::Constrained => (Rgba::new(100, 100, 255, 0.3), 1.0),
                CapabilityTier::Full => {
                    let pulse = (t + i).sin();
                    (Rgba::new(255, 255, 255, 0.4 + pulse * 0.2), 1.0 + pulse * 0.5)
                }
            };
            surface.stroke_line(Line::new(origin, tip), color, width);
        }
    }
}

impl Painter for RayFanPainter {
    fn name(&self) -> &'static str {
        "ray-fan"
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

        surface.clear(dims.to_rect());
        surface.fill_circle(
            Circle::new(dims.center(), dims.radius()),
            &self.base_gradient(dims, tier, theta),
        );

        if overlay_due(t, tier, self.style.overlay_modulus) {
            self.draw_rays(surface, dims, tier, t, theta);
        }

        if tier.is_full()
            && let Some(sample) = pointer
        {
            draw_pointer_glow(surface, dims, sample);
        }

        surface.set_composite(CompositeOp::SourceOver);
    }
}

#[cfg(test)]
mod tests {
    use halo_core::pointer::PointerSample;
    use kurbo::Point;

    use super::*;
    use crate::draw_list::{DrawCommand, DrawList};

    fn paint(t: f64, tier: CapabilityTier, pointer: Option<PointerSample>) -> DrawList {
        let mut list = DrawList::new();
        RayFanPainter::default().paint(
            &mut list,
            &PaintInput {
                t,
                tier,
                dims: SurfaceDimensions::new(40, 40),
                pointer,
            },
        );
        list
    }

    #[test]
    fn ray_counts_per_tier() {
        assert_eq!(paint(0.0, CapabilityTier::Full, None).strokes().count(), 12);
        assert_eq!(paint(0.0, CapabilityTier::Constrained, None).strokes().count(), 6);
    }

    #[test]
    fn rays_start_at_center_and_span_half_width() {
        let list = paint(0.0, CapabilityTier::Constrained, None);
        for (line, color, width) in list.strokes() {
            assert_eq!(line.p0, Point::new(20.0, 20.0));
            assert!((line.length() - 20.0).abs() < 1e-9);
            assert_eq!(color, Rgba::new(100, 100, 255, 0.3));
            assert!((width - 1.0).abs() < f64::EPSILON);
        }
        let (first, _, _) = list.strokes().next().unwrap();
        assert!((first.p1.x - 40.0).abs() < 1e-9, "first ray points along +x at θ=0");
    }

    #[test]
    fn full_rays_pulse() {
        let list = paint(0.0, CapabilityTier::Full, None);
        let strokes: alloc::vec::Vec<_> = list.strokes().collect();
        // i = 0: sin(0) = 0.
        assert!((strokes[0].1.a - 0.4).abs() < 1e-12);
        assert!((strokes[0].2 - 1.0).abs() < 1e-12);
        // i = 1: sin(1) ≈ 0.841.
        assert!((strokes[1].1.a - (0.4 + 1.0_f64.sin() * 0.2)).abs() < 1e-12);
        assert!((strokes[1].2 - (1.0 + 1.0_f64.sin() * 0.5)).abs() < 1e-12);
    }

    #[test]
    fn constrained_rays_every_other_second() {
        assert_eq!(paint(1.5, CapabilityTier::Constrained, None).strokes().count(), 0);
        assert_eq!(paint(2.5, CapabilityTier::Constrained, None).strokes().count(), 6);
        assert_eq!(paint(1.5, CapabilityTier::Full, None).strokes().count(), 12);
    }

    #[test]
    fn gradient_wanders_with_relative_amplitude() {
        let g = RayFanPainter::default().base_gradient(
            SurfaceDimensions::new(40, 40),
            CapabilityTier::Full,
            0.0,
        );
        // 40 px surface: 0.5 of the 20 px center is 10 px.
        assert_eq!(g.start.center, Point::new(20.0, 30.0));
        assert_eq!(g.end.center, g.start.center);
        assert!((g.end.radius - 28.0).abs() < 1e-12);
        assert_eq!(g.stops[3].color.a, 0.0);
    }

    #[test]
    fn sequence_ends_in_source_over() {
        let list = paint(0.3, CapabilityTier::Full, Some(PointerSample::CENTER));
        assert_eq!(list.commands[0], DrawCommand::Clear(SurfaceDimensions::new(40, 40).to_rect()));
        assert_eq!(
            list.commands.last(),
            Some(&DrawCommand::SetComposite(CompositeOp::SourceOver))
        );
        assert_eq!(list.fills().count(), 2, "disc and pointer glow");
    }

    #[test]
    fn identical_input_identical_output() {
        let a = paint(7.25, CapabilityTier::Full, None);
        let b = paint(7.25, CapabilityTier::Full, None);
        assert_eq!(a, b);
    }
}
