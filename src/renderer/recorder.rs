//! Recording surface
//!
//! Captures every draw call as a `DrawCommand` so draw passes can be
//! inspected without a browser.

use glam::Vec2;

use super::color::Rgba;
use super::surface::{Stroke, Surface};

/// One captured draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Rect {
        origin: Vec2,
        size: Vec2,
        color: Rgba,
    },
    Gradient {
        top: f32,
        bottom: f32,
        from: Rgba,
        to: Rgba,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Rgba,
        outline: Option<Stroke>,
    },
    Ellipse {
        center: Vec2,
        radii: Vec2,
        rotation: f32,
        fill: Rgba,
        outline: Option<Stroke>,
    },
    Triangle {
        points: [Vec2; 3],
        fill: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
    },
    Curve {
        from: Vec2,
        control: Vec2,
        to: Vec2,
        stroke: Stroke,
    },
    Text {
        text: String,
        at: Vec2,
        size_px: f32,
        alpha: f32,
    },
}

/// In-memory surface that records draw calls
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub size: Vec2,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
        }
    }

    /// Forget everything recorded so far
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of recorded commands matching `pred`
    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Vec2, f32)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, at, alpha, .. } => Some((text.as_str(), *at, *alpha)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.commands.push(DrawCommand::Rect {
            origin,
            size,
            color,
        });
    }

    fn fill_vertical_gradient(&mut self, top: f32, bottom: f32, from: Rgba, to: Rgba) {
        self.commands.push(DrawCommand::Gradient {
            top,
            bottom,
            from,
            to,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Rgba, outline: Option<Stroke>) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill,
            outline,
        });
    }

    fn fill_ellipse(
        &mut self,
        center: Vec2,
        radii: Vec2,
        rotation: f32,
        fill: Rgba,
        outline: Option<Stroke>,
    ) {
        self.commands.push(DrawCommand::Ellipse {
            center,
            radii,
            rotation,
            fill,
            outline,
        });
    }

    fn fill_triangle(&mut self, points: [Vec2; 3], fill: Rgba) {
        self.commands.push(DrawCommand::Triangle { points, fill });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn stroke_curve(&mut self, from: Vec2, control: Vec2, to: Vec2, stroke: Stroke) {
        self.commands.push(DrawCommand::Curve {
            from,
            control,
            to,
            stroke,
        });
    }

    fn fill_text(&mut self, text: &str, at: Vec2, size_px: f32, alpha: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            size_px,
            alpha,
        });
    }
}
