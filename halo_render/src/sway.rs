// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The container sway: an endless eased back-and-forth rotation.
//!
//! The logo's container rocks between a few keyframe angles. Keyframes are
//! spaced evenly over the period and every segment is eased with CSS
//! `ease-in-out`. [`Sway::rotation_degrees`] is a pure function of elapsed
//! seconds, so the backend can apply it from the same frame loop that paints.

use halo_core::tier::CapabilityTier;
#[cfg(not(feature = "std"))]
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{CubicBez, ParamCurve, Point};

/// Keyframes and period of one sway.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwayConfig {
    /// Angles in degrees, visited in order. The last should equal the first
    /// for a seamless loop.
    pub keyframes: &'static [f64],
    /// Seconds for one pass through all keyframes.
    pub period: f64,
}

impl SwayConfig {
    /// Wider, faster rocking: `[0, 5, 0, -5, 0]` over 5 s.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            keyframes: &[0.0, 5.0, 0.0, -5.0, 0.0],
            period: 5.0,
        }
    }

    /// Gentle one-sided tilt: `[0, 3, 0]` over 7 s.
    #[must_use]
    pub const fn constrained() -> Self {
        Self {
            keyframes: &[0.0, 3.0, 0.0],
            period: 7.0,
        }
    }
}

/// The sway for each tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sway {
    /// Used under [`CapabilityTier::Constrained`].
    pub constrained: SwayConfig,
    /// Used under [`CapabilityTier::Full`].
    pub full: SwayConfig,
}

impl Default for Sway {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Sway {
    /// Stock sway for both tiers.
    pub const DEFAULT: Self = Self {
        constrained: SwayConfig::constrained(),
        full: SwayConfig::full(),
    };

    /// Container rotation in degrees at `t` seconds under `tier`.
    #[must_use]
    pub fn rotation_degrees(&self, t: f64, tier: CapabilityTier) -> f64 {
        let config = match tier {
            CapabilityTier::Constrained => &self.constrained,
            CapabilityTier::Full => &self.full,
        };
        config.rotation_degrees(t)
    }
}

impl SwayConfig {
    /// Rotation in degrees at `t` seconds.
    #[must_use]
    pub fn rotation_degrees(&self, t: f64) -> f64 {
        let frames = self.keyframes;
        match frames {
            [] => return 0.0,
            [only] => return *only,
            _ => {}
        }
        if !(self.period > 0.0) || !t.is_finite() {
            return frames[0];
        }
        let segments = (frames.len() - 1) as f64;
        let cycles = (t / self.period).floor();
        let progress = ((t - cycles * self.period) / self.period * segments).max(0.0);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "progress is in [0, segments)"
        )]
        let index = (progress.floor() as usize).min(frames.len() - 2);
        let local = progress - index as f64;
        let (from, to) = (frames[index], frames[index + 1]);
        from + (to - from) * ease_in_out(local)
    }
}

/// CSS `ease-in-out`: `cubic-bezier(0.42, 0, 0.58, 1)`.
const EASE_IN_OUT: CubicBez = CubicBez {
    p0: Point::new(0.0, 0.0),
    p1: Point::new(0.42, 0.0),
    p2: Point::new(0.58, 1.0),
    p3: Point::new(1.0, 1.0),
};

/// Evaluates [`EASE_IN_OUT`] at horizontal progress `x` in `[0, 1]`.
///
/// The curve's x is monotonic, so bisection on the curve parameter finds the
/// point with the requested x.
fn ease_in_out(x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    for _ in 0..32 {
        let mid = 0.5 * (lo + hi);
        if EASE_IN_OUT.eval(mid).x < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    EASE_IN_OUT.eval(0.5 * (lo + hi)).y
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn easing_endpoints_and_symmetry() {
        assert!(ease_in_out(0.0).abs() < EPS);
        assert!((ease_in_out(1.0) - 1.0).abs() < EPS);
        assert!((ease_in_out(0.5) - 0.5).abs() < EPS);
        assert!((ease_in_out(0.25) + ease_in_out(0.75) - 1.0).abs() < EPS);
        assert!(ease_in_out(0.1) < 0.1, "slow start");
    }

    #[test]
    fn full_sway_hits_keyframes() {
        let sway = Sway::DEFAULT;
        let at = |t| sway.rotation_degrees(t, CapabilityTier::Full);
        assert!(at(0.0).abs() < EPS);
        assert!((at(1.25) - 5.0).abs() < EPS);
        assert!(at(2.5).abs() < EPS);
        assert!((at(3.75) + 5.0).abs() < EPS);
        assert!(at(5.0).abs() < EPS, "loops");
        assert!((at(6.25) - 5.0).abs() < EPS);
    }

    #[test]
    fn constrained_sway_is_one_sided() {
        let sway = Sway::DEFAULT;
        let peak = sway.rotation_degrees(3.5, CapabilityTier::Constrained);
        assert!((peak - 3.0).abs() < EPS);
        for step in 0..70 {
            let r = sway.rotation_degrees(f64::from(step) * 0.1, CapabilityTier::Constrained);
            assert!((-EPS..=3.0 + EPS).contains(&r), "{r} out of range");
        }
    }

    #[test]
    fn degenerate_configs() {
        let empty = SwayConfig {
            keyframes: &[],
            period: 1.0,
        };
        assert_eq!(empty.rotation_degrees(0.4), 0.0);
        let still = SwayConfig {
            keyframes: &[2.0, 4.0],
            period: 0.0,
        };
        assert_eq!(still.rotation_degrees(10.0), 2.0);
    }
}
