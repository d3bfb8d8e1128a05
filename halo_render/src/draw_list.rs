// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw list: a [`Surface`] that records commands instead of drawing them.

use alloc::vec::Vec;

use halo_core::backend::Surface;
use halo_core::paint::{CompositeOp, RadialGradient, Rgba};
use halo_core::surface::SurfaceDimensions;
use kurbo::{Circle, Line, Rect};

/// A single recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// The backing size changed.
    SetDimensions(SurfaceDimensions),
    /// A rectangle was cleared.
    Clear(Rect),
    /// The compositing mode changed.
    SetComposite(CompositeOp),
    /// A disc was filled with a gradient.
    FillCircle {
        /// The disc.
        circle: Circle,
        /// Its fill.
        gradient: RadialGradient,
    },
    /// A line was stroked.
    StrokeLine {
        /// The segment.
        line: Line,
        /// Stroke color.
        color: Rgba,
        /// Stroke width in pixels.
        width: f64,
    },
}

/// An ordered list of recorded surface calls.
///
/// Painters are pure functions of their input, so comparing draw lists is how
/// their output is tested. Hosts without a real canvas can also replay a draw
/// list later.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawList {
    /// Recorded commands, oldest first.
    pub commands: Vec<DrawCommand>,
    available: bool,
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawList {
    /// Creates an empty, available draw list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
            available: true,
        }
    }

    /// Marks the list as available or not. An unavailable list behaves like a
    /// canvas that has been detached from its document.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Drops all recorded commands for reuse.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Takes the recorded commands, leaving the list empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        core::mem::take(&mut self.commands)
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterates over the filled circles.
    pub fn fills(&self) -> impl Iterator<Item = (&Circle, &RadialGradient)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillCircle { circle, gradient } => Some((circle, gradient)),
            _ => None,
        })
    }

    /// Iterates over the stroked lines.
    pub fn strokes(&self) -> impl Iterator<Item = (&Line, Rgba, f64)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::StrokeLine { line, color, width } => Some((line, *color, *width)),
            _ => None,
        })
    }

    /// Replays the recorded commands onto another surface.
    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) {
        for command in &self.commands {
            match command {
                DrawCommand::SetDimensions(dims) => target.set_dimensions(*dims),
                DrawCommand::Clear(rect) => target.clear(*rect),
                DrawCommand::SetComposite(op) => target.set_composite(*op),
                DrawCommand::FillCircle { circle, gradient } => {
                    target.fill_circle(*circle, gradient);
                }
                DrawCommand::StrokeLine { line, color, width } => {
                    target.stroke_line(*line, *color, *width);
                }
            }
        }
    }
}

impl Surface for DrawList {
    fn is_available(&self) -> bool {
        self.available
    }

    fn set_dimensions(&mut self, dims: SurfaceDimensions) {
        self.commands.push(DrawCommand::SetDimensions(dims));
    }

    fn clear(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn set_composite(&mut self, op: CompositeOp) {
        self.commands.push(DrawCommand::SetComposite(op));
    }

    fn fill_circle(&mut self, circle: Circle, gradient: &RadialGradient) {
        self.commands.push(DrawCommand::FillCircle {
            circle,
            gradient: gradient.clone(),
        });
    }

    fn stroke_line(&mut self, line: Line, color: Rgba, width: f64) {
        self.commands
            .push(DrawCommand::StrokeLine { line, color, width });
    }
}
