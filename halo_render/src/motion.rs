// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-tier motion parameters shared by the painters.

use halo_core::surface::SurfaceDimensions;
use halo_core::tier::CapabilityTier;
#[cfg(not(feature = "std"))]
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

/// How fast and how far the gradient center wanders under one tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierMotion {
    /// Multiplier from seconds to phase `θ`.
    pub time_scale: f64,
    /// Oscillation amplitude as a fraction of the center coordinates.
    pub amplitude: f64,
}

/// [`TierMotion`] for both tiers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    /// Used under [`CapabilityTier::Constrained`].
    pub constrained: TierMotion,
    /// Used under [`CapabilityTier::Full`].
    pub full: TierMotion,
}

impl Motion {
    /// Picks the parameters for `tier`.
    #[must_use]
    pub const fn for_tier(&self, tier: CapabilityTier) -> TierMotion {
        match tier {
            CapabilityTier::Constrained => self.constrained,
            CapabilityTier::Full => self.full,
        }
    }
}

impl TierMotion {
    /// Phase `θ` at `t` seconds.
    #[must_use]
    pub fn phase(&self, t: f64) -> f64 {
        t * self.time_scale
    }

    /// Gradient center at phase `theta`: the surface center displaced by
    /// `sin θ` horizontally and `cos θ` vertically.
    #[must_use]
    pub fn center(&self, dims: SurfaceDimensions, theta: f64) -> Point {
        let c = dims.center();
        Point::new(
            c.x + theta.sin() * c.x * self.amplitude,
            c.y + theta.cos() * c.y * self.amplitude,
        )
    }
}

/// Returns `true` if the overlay is drawn at `t` seconds.
///
/// Always under Full tier. Under Constrained tier only during whole seconds
/// divisible by `modulus`; a zero modulus disables the overlay there.
#[must_use]
pub fn overlay_due(t: f64, tier: CapabilityTier, modulus: u32) -> bool {
    if tier.is_full() {
        return true;
    }
    if modulus == 0 || !t.is_finite() || t < 0.0 {
        return false;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "t is finite and non-negative; saturation past u64::MAX is harmless"
    )]
    let whole = t.floor() as u64;
    whole % u64::from(modulus) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    const M: TierMotion = TierMotion {
        time_scale: 0.5,
        amplitude: 0.1,
    };

    #[test]
    fn center_oscillates_around_surface_center() {
        let dims = SurfaceDimensions::new(40, 40);
        assert_eq!(M.center(dims, 0.0), Point::new(20.0, 22.0));
        let quarter = M.center(dims, core::f64::consts::FRAC_PI_2);
        assert!((quarter.x - 22.0).abs() < 1e-12);
        assert!((quarter.y - 20.0).abs() < 1e-12);
    }

    #[test]
    fn phase_scales_time() {
        assert!((M.phase(3.0) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn overlay_throttle() {
        use CapabilityTier::{Constrained, Full};
        assert!(overlay_due(2.999, Full, 3));
        assert!(!overlay_due(2.999, Constrained, 3));
        assert!(overlay_due(3.001, Constrained, 3));
        assert!(overlay_due(0.5, Constrained, 2));
        assert!(!overlay_due(1.5, Constrained, 2));
        assert!(overlay_due(4.0, Constrained, 2));
        assert!(!overlay_due(0.0, Constrained, 0));
        assert!(!overlay_due(f64::NAN, Constrained, 3));
    }
}
