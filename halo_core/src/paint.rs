// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors, gradients, and compositing modes.
//!
//! These mirror the subset of the 2D canvas paint model the painters use: flat
//! `rgba()` colors, two-circle radial gradients with color stops, and two
//! compositing operators.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Circle;

/// An sRGB color with 8-bit channels and a floating point alpha, matching CSS
/// `rgba(r, g, b, a)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

impl Rgba {
    /// Creates a color. Alpha is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Returns the same color with a different alpha (clamped).
    #[must_use]
    pub fn with_alpha(self, a: f64) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Formats as a CSS `rgba()` string.
    #[must_use]
    pub fn to_css(&self) -> String {
        alloc::format!("{self}")
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// A color at a position along a gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position in `[0, 1]`.
    pub offset: f64,
    /// Color at that position.
    pub color: Rgba,
}

impl ColorStop {
    /// Creates a stop.
    #[must_use]
    pub const fn new(offset: f64, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// A radial gradient between two circles, as in
/// `CanvasRenderingContext2D.createRadialGradient`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    /// Start circle (offset 0).
    pub start: Circle,
    /// End circle (offset 1).
    pub end: Circle,
    /// Color stops in ascending offset order.
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    /// Creates a gradient with no stops.
    #[must_use]
    pub fn new(start: Circle, end: Circle) -> Self {
        Self {
            start,
            end,
            stops: Vec::new(),
        }
    }

    /// Appends a stop (builder style).
    #[must_use]
    pub fn with_stop(mut self, offset: f64, color: Rgba) -> Self {
        self.stops.push(ColorStop::new(offset, color));
        self
    }

    /// Returns `true` if the gradient cannot be drawn: the end circle has no
    /// radius or a radius is not finite.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.end.radius > 0.0)
            || !self.end.radius.is_finite()
            || !self.start.radius.is_finite()
            || self.start.radius < 0.0
    }
}

/// How drawn pixels combine with what is already on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CompositeOp {
    /// Standard source-over alpha compositing.
    #[default]
    SourceOver,
    /// Additive compositing: channel values are summed.
    Lighter,
}

impl CompositeOp {
    /// The canvas `globalCompositeOperation` keyword.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::SourceOver => "source-over",
            Self::Lighter => "lighter",
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;

    #[test]
    fn css_formatting() {
        assert_eq!(Rgba::new(110, 50, 255, 0.9).to_css(), "rgba(110, 50, 255, 0.9)");
        assert_eq!(Rgba::new(10, 10, 80, 0.0).to_css(), "rgba(10, 10, 80, 0)");
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Rgba::new(1, 2, 3, 1.4).a, 1.0);
        assert_eq!(Rgba::new(1, 2, 3, 0.5).with_alpha(-0.1).a, 0.0);
    }

    #[test]
    fn degenerate_gradients() {
        let c = |r| Circle::new(Point::new(20.0, 20.0), r);
        assert!(!RadialGradient::new(c(0.0), c(32.0)).is_degenerate());
        assert!(RadialGradient::new(c(0.0), c(0.0)).is_degenerate());
        assert!(RadialGradient::new(c(0.0), c(f64::NAN)).is_degenerate());
        assert!(RadialGradient::new(c(-1.0), c(10.0)).is_degenerate());
    }

    #[test]
    fn builder_keeps_stop_order() {
        let g = RadialGradient::new(Circle::new(Point::ZERO, 0.0), Circle::new(Point::ZERO, 1.0))
            .with_stop(0.0, Rgba::new(255, 255, 255, 0.8))
            .with_stop(1.0, Rgba::new(50, 50, 200, 0.0));
        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.stops[1].offset, 1.0);
    }

    #[test]
    fn composite_keywords() {
        assert_eq!(CompositeOp::default().as_css(), "source-over");
        assert_eq!(CompositeOp::Lighter.as_css(), "lighter");
    }
}
