// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pointer-following glow shared by both painters.

use halo_core::backend::Surface;
use halo_core::paint::{CompositeOp, RadialGradient, Rgba};
use halo_core::pointer::PointerSample;
use halo_core::surface::SurfaceDimensions;
use kurbo::Circle;

/// Radius of the pointer glow as a fraction of the surface width.
pub const POINTER_GLOW_RADIUS: f64 = 0.5;

/// Builds the pointer glow gradient for `sample` and the disc it fills.
#[must_use]
pub fn pointer_glow(dims: SurfaceDimensions, sample: PointerSample) -> (Circle, RadialGradient) {
    let size = dims.to_size();
    let at = sample.to_surface(size.width, size.height);
    let radius = size.width * POINTER_GLOW_RADIUS;
    let gradient = RadialGradient::new(Circle::new(at, 0.0), Circle::new(at, radius))
        .with_stop(0.0, Rgba::new(255, 255, 255, 0.5))
        .with_stop(0.3, Rgba::new(200, 200, 255, 0.3))
        .with_stop(0.6, Rgba::new(150, 150, 255, 0.1))
        .with_stop(1.0, Rgba::new(100, 100, 255, 0.0));
    (Circle::new(at, radius), gradient)
}

/// Draws the pointer glow additively. Leaves the surface in
/// [`CompositeOp::Lighter`].
pub(crate) fn draw_pointer_glow<S: Surface + ?Sized>(
    surface: &mut S,
    dims: SurfaceDimensions,
    sample: PointerSample,
) {
    let (circle, gradient) = pointer_glow(dims, sample);
    surface.set_composite(CompositeOp::Lighter);
    surface.fill_circle(circle, &gradient);
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;

    #[test]
    fn glow_follows_pointer() {
        let (circle, gradient) =
            pointer_glow(SurfaceDimensions::new(40, 20), PointerSample { x: 0.25, y: 0.5 });
        assert_eq!(circle.center, Point::new(10.0, 10.0));
        assert!((circle.radius - 20.0).abs() < f64::EPSILON);
        assert_eq!(gradient.start.center, gradient.end.center);
        assert_eq!(gradient.stops.len(), 4);
        assert_eq!(gradient.stops[3].color.a, 0.0);
    }
}
