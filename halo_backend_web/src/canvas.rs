// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `<canvas>` 2D drawing surface.

use core::f64::consts::TAU;

use halo_core::backend::Surface;
use halo_core::paint::{CompositeOp, RadialGradient, Rgba};
use halo_core::surface::SurfaceDimensions;
use kurbo::{Circle, Line, Rect};
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// A [`Surface`] over a canvas element's `CanvasRenderingContext2D`.
///
/// Canvas calls that can throw have their results discarded: a failed call
/// simply draws nothing for that frame.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl core::fmt::Debug for CanvasSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CanvasSurface")
            .field("width", &self.canvas.width())
            .field("height", &self.canvas.height())
            .finish_non_exhaustive()
    }
}

impl CanvasSurface {
    /// Wraps `canvas`, acquiring its 2D context.
    ///
    /// Fails if the browser refuses a 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// The canvas element.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn is_available(&self) -> bool {
        self.canvas.is_connected()
    }

    fn set_dimensions(&mut self, dims: SurfaceDimensions) {
        self.canvas.set_width(dims.width);
        self.canvas.set_height(dims.height);
    }

    fn clear(&mut self, rect: Rect) {
        self.ctx
            .clear_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn set_composite(&mut self, op: CompositeOp) {
        let _ = self.ctx.set_global_composite_operation(op.as_css());
    }

    fn fill_circle(&mut self, circle: Circle, gradient: &RadialGradient) {
        if gradient.is_degenerate() {
            return;
        }
        let (s, e) = (gradient.start, gradient.end);
        let Ok(fill) = self.ctx.create_radial_gradient(
            s.center.x, s.center.y, s.radius, e.center.x, e.center.y, e.radius,
        ) else {
            return;
        };
        for stop in &gradient.stops {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "stop offsets are in [0, 1]"
            )]
            let offset = stop.offset as f32;
            let _ = fill.add_color_stop(offset, &stop.color.to_css());
        }
        self.ctx.set_fill_style_canvas_gradient(&fill);
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(circle.center.x, circle.center.y, circle.radius, 0.0, TAU);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, line: Line, color: Rgba, width: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(line.p0.x, line.p0.y);
        self.ctx.line_to(line.p1.x, line.p1.y);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }
}
