// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracking for the pointer-reactive glow.

use kurbo::{Point, Rect};

/// A pointer position normalized to the surface: `(0, 0)` is the top-left
/// corner and `(1, 1)` the bottom-right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Horizontal position in `[0, 1]`.
    pub x: f64,
    /// Vertical position in `[0, 1]`.
    pub y: f64,
}

impl PointerSample {
    /// The surface center.
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    /// Maps the sample back into a `width` × `height` surface.
    #[must_use]
    pub fn to_surface(self, width: f64, height: f64) -> Point {
        Point::new(width * self.x, height * self.y)
    }
}

impl Default for PointerSample {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Converts raw pointer coordinates into [`PointerSample`]s.
///
/// The tracker is only meaningful while attached (Full tier). Detaching makes
/// [`on_move`](Self::on_move) a no-op and forgets the last sample, so a late
/// event from a listener that has not been removed yet cannot leak into the
/// next frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTracker {
    attached: bool,
    sample: Option<PointerSample>,
}

impl PointerTracker {
    /// Creates a detached tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attached: false,
            sample: None,
        }
    }

    /// Starts accepting pointer moves.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Stops accepting pointer moves and forgets the last sample.
    pub fn detach(&mut self) {
        self.attached = false;
        self.sample = None;
    }

    /// Returns `true` while attached.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// The latest sample, or `None` if detached or the pointer has not moved
    /// since attaching.
    #[must_use]
    pub const fn sample(&self) -> Option<PointerSample> {
        self.sample
    }

    /// Records a pointer move at `raw` (same coordinate space as `bounds`,
    /// e.g. client coordinates and the surface's bounding box).
    ///
    /// Returns the new sample, or `None` when detached or when `bounds` has no
    /// area. The sample is clamped to the unit square.
    pub fn on_move(&mut self, raw: Point, bounds: Rect) -> Option<PointerSample> {
        if !self.attached {
            return None;
        }
        let (w, h) = (bounds.width(), bounds.height());
        if !(w > 0.0 && h > 0.0) {
            return None;
        }
        let sample = PointerSample {
            x: ((raw.x - bounds.x0) / w).clamp(0.0, 1.0),
            y: ((raw.y - bounds.y0) / h).clamp(0.0, 1.0),
        };
        self.sample = Some(sample);
        Some(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect::new(100.0, 50.0, 140.0, 90.0)
    }

    #[test]
    fn detached_tracker_ignores_moves() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.on_move(Point::new(120.0, 70.0), bounds()), None);
        assert_eq!(tracker.sample(), None);
    }

    #[test]
    fn moves_are_normalized_to_bounds() {
        let mut tracker = PointerTracker::new();
        tracker.attach();
        assert_eq!(tracker.sample(), None, "no sample before the first move");

        let s = tracker.on_move(Point::new(110.0, 80.0), bounds()).unwrap();
        assert!((s.x - 0.25).abs() < 1e-12);
        assert!((s.y - 0.75).abs() < 1e-12);
        assert_eq!(tracker.sample(), Some(s));
    }

    #[test]
    fn samples_are_clamped() {
        let mut tracker = PointerTracker::new();
        tracker.attach();
        let s = tracker.on_move(Point::new(0.0, 500.0), bounds()).unwrap();
        assert_eq!(s, PointerSample { x: 0.0, y: 1.0 });
    }

    #[test]
    fn degenerate_bounds_keep_previous_sample() {
        let mut tracker = PointerTracker::new();
        tracker.attach();
        let first = tracker.on_move(Point::new(120.0, 70.0), bounds());
        assert_eq!(first, Some(PointerSample::CENTER));
        let empty = Rect::new(10.0, 10.0, 10.0, 30.0);
        assert_eq!(tracker.on_move(Point::new(10.0, 20.0), empty), None);
        assert_eq!(tracker.sample(), first);
    }

    #[test]
    fn detach_forgets_sample() {
        let mut tracker = PointerTracker::new();
        tracker.attach();
        tracker.on_move(Point::new(120.0, 70.0), bounds());
        tracker.detach();
        assert!(!tracker.is_attached());
        assert_eq!(tracker.sample(), None);
    }

    #[test]
    fn sample_maps_back_to_surface() {
        let p = PointerSample { x: 0.25, y: 1.0 }.to_surface(40.0, 20.0);
        assert_eq!(p, Point::new(10.0, 20.0));
    }
}
