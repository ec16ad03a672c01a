//! Panorama scene: a ring of flora turned by dragging, over a scrolling
//! foreground strip
//!
//! Nothing here is random or time-driven: every frame is a pure function of
//! the accumulated rotation angle and the surface size.

use glam::Vec2;
use std::f32::consts::TAU;

use super::drag::DragRotate;
use super::scene::Scene;
use crate::consts::*;
use crate::renderer::shapes::{draw_ring_flower, draw_ring_tree, draw_small_flower};
use crate::renderer::{Surface, palette};
use crate::wrap_offset;

/// Fraction of the height covered by sky
const HORIZON: f32 = 0.6;
/// Ring elements facing away further than this are hidden
const RING_CULL_COS: f32 = -0.5;
const SMALL_FLOWER_SIZE: f32 = 15.0;

/// Kind of flora on the ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingKind {
    Flower,
    Tree,
}

/// Projected placement of one ring element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingPlacement {
    pub index: usize,
    pub kind: RingKind,
    pub pos: Vec2,
    pub size: f32,
    /// Depth in [0,1]; 1 is nearest
    pub scale: f32,
    pub visible: bool,
}

/// Drag-rotated panorama
#[derive(Debug, Clone)]
pub struct Panorama {
    angle: f32,
    bounds: Vec2,
    drag: DragRotate,
}

impl Panorama {
    pub fn new(width: f32) -> Self {
        Self::with_sensitivity(width, DRAG_SENSITIVITY)
    }

    pub fn with_sensitivity(width: f32, sensitivity: f32) -> Self {
        Self {
            angle: 0.0,
            bounds: Vec2::new(width, PANORAMA_HEIGHT),
            drag: DragRotate::new(sensitivity),
        }
    }

    /// Accumulated rotation (radians, unbounded)
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn press(&mut self, x: f32) {
        self.drag.press(x);
    }

    /// Apply a drag move; returns true when the angle changed and the
    /// caller should redraw immediately
    pub fn drag_to(&mut self, x: f32) -> bool {
        match self.drag.drag_to(x) {
            Some(delta) => {
                self.angle += delta;
                true
            }
            None => false,
        }
    }

    pub fn release(&mut self) {
        self.drag.release();
    }

    /// Ring elements placed for the current angle
    pub fn ring(&self) -> impl Iterator<Item = RingPlacement> + '_ {
        let (w, h) = (self.bounds.x, self.bounds.y);
        (0..RING_ELEMENTS).map(move |index| {
            let a = TAU * index as f32 / RING_ELEMENTS as f32 + self.angle;
            let scale = a.sin() * 0.5 + 0.5;
            let size = 40.0 + scale * 40.0;
            let (kind, size) = if index % 2 == 0 {
                (RingKind::Flower, size)
            } else {
                (RingKind::Tree, size * 1.5)
            };
            RingPlacement {
                index,
                kind,
                pos: Vec2::new(a.cos() * w * 0.8 + w / 2.0, h * 0.55 - scale * 50.0),
                size,
                scale,
                visible: a.cos() > RING_CULL_COS,
            }
        })
    }

    /// Foreground strip positions for the current angle, x wrapped into [0, width)
    pub fn strip(&self) -> impl Iterator<Item = Vec2> + '_ {
        let (w, h) = (self.bounds.x, self.bounds.y);
        let scroll = self.angle * STRIP_SCROLL;
        (0..STRIP_ELEMENTS).map(move |i| {
            let x = i as f32 / STRIP_ELEMENTS as f32 * w + scroll;
            Vec2::new(
                wrap_offset(x, w),
                h * 0.75 + (i as f32 * 0.5).sin() * 20.0,
            )
        })
    }
}

impl Scene for Panorama {
    fn name(&self) -> &'static str {
        "panorama"
    }

    fn start(&mut self) {
        self.angle = 0.0;
        self.drag.release();
    }

    fn update(&mut self, _now_ms: f64) {}

    fn draw(&self, surface: &mut impl Surface) {
        let h = self.bounds.y;
        surface.clear();
        surface.fill_vertical_gradient(0.0, h * HORIZON, palette::SKY_TOP, palette::SKY_HORIZON);
        surface.fill_vertical_gradient(h * HORIZON, h, palette::GROUND_NEAR, palette::GROUND_FAR);

        for placement in self.ring().filter(|p| p.visible) {
            match placement.kind {
                RingKind::Flower => {
                    draw_ring_flower(surface, placement.pos, placement.size, placement.scale)
                }
                RingKind::Tree => {
                    draw_ring_tree(surface, placement.pos, placement.size, placement.scale)
                }
            }
        }

        for pos in self.strip() {
            draw_small_flower(surface, pos, SMALL_FLOWER_SIZE);
        }
    }

    fn resize(&mut self, size: Vec2) {
        self.bounds = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use proptest::prelude::*;

    #[test]
    fn test_drag_left_rotates_positive() {
        let mut pano = Panorama::new(800.0);
        pano.press(400.0);
        assert!(pano.drag_to(300.0));
        assert!((pano.angle() - 1.0).abs() < 1e-5);
        pano.release();
        assert!(!pano.drag_to(0.0));
        assert!((pano.angle() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_hover_never_rotates() {
        let mut pano = Panorama::new(800.0);
        assert!(!pano.drag_to(400.0));
        assert!(!pano.drag_to(300.0));
        assert!(!pano.is_dragging());
        assert_eq!(pano.angle(), 0.0);

        pano.press(300.0);
        assert!(pano.drag_to(200.0));
        let angle = pano.angle();
        pano.release();
        assert!(!pano.drag_to(100.0));
        assert!(!pano.drag_to(0.0));
        assert_eq!(pano.angle(), angle);
    }

    #[test]
    fn test_ring_alternates_kinds() {
        let pano = Panorama::new(800.0);
        let kinds: Vec<_> = pano.ring().map(|p| p.kind).collect();
        assert_eq!(kinds.len(), RING_ELEMENTS);
        assert_eq!(kinds[0], RingKind::Flower);
        assert_eq!(kinds[1], RingKind::Tree);
    }

    #[test]
    fn test_back_of_ring_is_hidden() {
        let pano = Panorama::new(800.0);
        // Element 6 sits at a = PI, directly behind
        let back = pano.ring().nth(6).map(|p| p.visible);
        assert_eq!(back, Some(false));
        let front = pano.ring().next().map(|p| p.visible);
        assert_eq!(front, Some(true));
    }

    #[test]
    fn test_strip_shifts_with_angle() {
        let mut pano = Panorama::new(1000.0);
        let before: Vec<_> = pano.strip().collect();
        pano.press(0.0);
        pano.drag_to(-10.0);
        let after: Vec<_> = pano.strip().collect();
        // 10px left => +0.1 rad => +5px strip scroll
        assert!((after[0].x - before[0].x - 5.0).abs() < 1e-3);
        assert_eq!(after[3].y, before[3].y);
    }

    #[test]
    fn test_draw_sky_ground_then_flora() {
        let pano = Panorama::new(800.0);
        let mut surface = RecordingSurface::new(800.0, 400.0);
        pano.draw(&mut surface);
        assert_eq!(surface.commands[0], DrawCommand::Clear);
        assert!(matches!(surface.commands[1], DrawCommand::Gradient { top, .. } if top == 0.0));
        assert!(matches!(surface.commands[2], DrawCommand::Gradient { bottom, .. } if bottom == 400.0));
        // 20 small flowers, 6 circles each
        let circles = surface.count(|c| matches!(c, DrawCommand::Circle { radius, .. } if (*radius - 4.5).abs() < 1e-4));
        assert_eq!(circles, STRIP_ELEMENTS * 6);
    }

    proptest! {
        #[test]
        fn prop_strip_wraps_within_width(moves in prop::collection::vec(-2000.0f32..2000.0, 1..20)) {
            let mut pano = Panorama::new(733.0);
            pano.press(0.0);
            let mut x = 0.0;
            for dx in moves {
                x += dx;
                pano.drag_to(x);
                for pos in pano.strip() {
                    prop_assert!(pos.x >= 0.0 && pos.x < 733.0);
                }
            }
        }
    }
}
