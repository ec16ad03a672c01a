//! Canvas 2D drawing surface

use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::renderer::{Rgba, Stroke, Surface};

const EMOJI_FONTS: &str = "\"Segoe UI Emoji\", \"Noto Color Emoji\", sans-serif";

/// A canvas element and its 2D context
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Look up a canvas by element id. `None` means the scene's page is not
    /// mounted, which callers treat as "scene not active".
    pub fn by_id(document: &Document, id: &str) -> Option<Self> {
        let canvas = document
            .get_element_by_id(id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        match Self::from_canvas(canvas) {
            Ok(surface) => Some(surface),
            Err(e) => {
                log::warn!("#{} has no usable 2d context: {:?}", id, e);
                None
            }
        }
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Set the backing store size in pixels
    pub fn set_size(&self, size: Vec2) {
        self.canvas.set_width(size.x.max(0.0) as u32);
        self.canvas.set_height(size.y.max(0.0) as u32);
    }

    fn outline(&self, outline: Option<Stroke>) {
        if let Some(stroke) = outline {
            self.apply_stroke(stroke);
            self.ctx.stroke();
        }
    }

    fn apply_stroke(&self, stroke: Stroke) {
        self.ctx.set_stroke_style_str(&stroke.color.to_css());
        self.ctx.set_line_width(stroke.width as f64);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_vertical_gradient(&mut self, top: f32, bottom: f32, from: Rgba, to: Rgba) {
        let width = self.size().x as f64;
        let gradient = self
            .ctx
            .create_linear_gradient(0.0, top as f64, 0.0, bottom as f64);
        let _ = gradient.add_color_stop(0.0, &from.to_css());
        let _ = gradient.add_color_stop(1.0, &to.to_css());
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx
            .fill_rect(0.0, top as f64, width, (bottom - top) as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Rgba, outline: Option<Stroke>) {
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&fill.to_css());
        self.ctx.fill();
        self.outline(outline);
    }

    fn fill_ellipse(
        &mut self,
        center: Vec2,
        radii: Vec2,
        rotation: f32,
        fill: Rgba,
        outline: Option<Stroke>,
    ) {
        self.ctx.begin_path();
        let _ = self.ctx.ellipse(
            center.x as f64,
            center.y as f64,
            radii.x.max(0.0) as f64,
            radii.y.max(0.0) as f64,
            rotation as f64,
            0.0,
            TAU,
        );
        self.ctx.set_fill_style_str(&fill.to_css());
        self.ctx.fill();
        self.outline(outline);
    }

    fn fill_triangle(&mut self, points: [Vec2; 3], fill: Rgba) {
        let [a, b, c] = points;
        self.ctx.begin_path();
        self.ctx.move_to(a.x as f64, a.y as f64);
        self.ctx.line_to(b.x as f64, b.y as f64);
        self.ctx.line_to(c.x as f64, c.y as f64);
        self.ctx.close_path();
        self.ctx.set_fill_style_str(&fill.to_css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.apply_stroke(stroke);
        self.ctx.stroke();
    }

    fn stroke_curve(&mut self, from: Vec2, control: Vec2, to: Vec2, stroke: Stroke) {
        self.ctx.save();
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.quadratic_curve_to(
            control.x as f64,
            control.y as f64,
            to.x as f64,
            to.y as f64,
        );
        self.apply_stroke(stroke);
        self.ctx.set_line_cap("round");
        self.ctx.stroke();
        self.ctx.restore();
    }

    fn fill_text(&mut self, text: &str, at: Vec2, size_px: f32, alpha: f32) {
        self.ctx.save();
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
        self.ctx.set_font(&format!("{}px {}", size_px, EMOJI_FONTS));
        let _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
        self.ctx.restore();
    }
}
