//! [`Surface`] over an HTML canvas 2D context.

use glam::Vec2;
use synapse_engine::{Rgba, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    // Last styles handed to the context, to skip redundant string formatting.
    fill: Option<Rgba>,
    stroke: Option<(Rgba, f32)>,
}

impl CanvasSurface {
    /// Wrap a canvas. `None` when it has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas,
            ctx,
            fill: None,
            stroke: None,
        })
    }

    #[allow(deprecated)]
    fn use_fill(&mut self, color: Rgba) {
        if self.fill != Some(color) {
            self.ctx.set_fill_style(&JsValue::from_str(&color.to_string()));
            self.fill = Some(color);
        }
    }

    #[allow(deprecated)]
    fn use_stroke(&mut self, color: Rgba, width: f32) {
        if self.stroke != Some((color, width)) {
            self.ctx.set_stroke_style(&JsValue::from_str(&color.to_string()));
            self.ctx.set_line_width(width as f64);
            self.stroke = Some((color, width));
        }
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.canvas.width() as f32
    }

    fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    fn set_size(&mut self, width: f32, height: f32) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
        // Resizing a canvas resets its context state
        self.fill = None;
        self.stroke = None;
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.use_fill(color);
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("canvas: arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.use_stroke(color, width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
