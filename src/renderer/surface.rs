//! Drawing surface abstraction
//!
//! Scenes draw through this trait so the same draw pass can target a
//! browser canvas or a recording used by tests and the native preview.

use glam::Vec2;

use super::color::Rgba;

/// Outline style for strokes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: Rgba, width: f32) -> Self {
        Self { color, width }
    }
}

/// A 2D immediate-mode drawing target
pub trait Surface {
    /// Current drawable size in pixels
    fn size(&self) -> Vec2;

    /// Erase the whole surface to transparent
    fn clear(&mut self);

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);

    /// Fill a full-width band from `top` to `bottom` with a vertical gradient
    fn fill_vertical_gradient(&mut self, top: f32, bottom: f32, from: Rgba, to: Rgba);

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Rgba, outline: Option<Stroke>);

    /// Fill an ellipse rotated by `rotation` radians around its center
    fn fill_ellipse(
        &mut self,
        center: Vec2,
        radii: Vec2,
        rotation: f32,
        fill: Rgba,
        outline: Option<Stroke>,
    );

    fn fill_triangle(&mut self, points: [Vec2; 3], fill: Rgba);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke);

    /// Stroke a quadratic curve with round caps
    fn stroke_curve(&mut self, from: Vec2, control: Vec2, to: Vec2, stroke: Stroke);

    /// Draw a text glyph run with its baseline-left at `at`
    fn fill_text(&mut self, text: &str, at: Vec2, size_px: f32, alpha: f32);

    /// Paint a translucent overlay over everything drawn so far
    fn fade(&mut self, overlay: Rgba) {
        let size = self.size();
        self.fill_rect(Vec2::ZERO, size, overlay);
    }
}
