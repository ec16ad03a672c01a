//! Procedural geometry for flowers, trees and grass
//!
//! Everything here is a pure function of its inputs; the same state always
//! produces the same draw calls.

use glam::Vec2;
use std::f32::consts::TAU;

use super::color::{Rgba, palette};
use super::surface::{Stroke, Surface};
use crate::rotate;

/// Petals on a garden flower head
pub const GARDEN_PETALS: usize = 8;
/// Stem length of a garden flower (px)
pub const STEM_LENGTH: f32 = 60.0;
const STEM_WIDTH: f32 = 5.0;
const OUTLINE_WIDTH: f32 = 2.0;
const OUTLINE_DARKEN: u8 = 30;

/// Placement of one elliptical petal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Petal {
    pub center: Vec2,
    pub radii: Vec2,
    pub rotation: f32,
}

/// Lay out the petals of a flower head of full size `size` at `head`
///
/// Petals grow linearly with `bloom` and turn with `rotation`; each petal
/// is offset from the head along its own axis.
pub fn petal_layout(head: Vec2, size: f32, bloom: f32, rotation: f32) -> [Petal; GARDEN_PETALS] {
    let current = size * bloom;
    std::array::from_fn(|i| {
        let theta = rotation + TAU * i as f32 / GARDEN_PETALS as f32;
        Petal {
            center: head + rotate(Vec2::new(0.0, -current * 0.4), theta),
            radii: Vec2::new(current * 0.3, current * 0.6),
            rotation: theta,
        }
    })
}

/// Stem plus (once blooming has begun) petals and a gold center
pub fn draw_garden_flower(
    surface: &mut impl Surface,
    head: Vec2,
    size: f32,
    bloom: f32,
    rotation: f32,
    color: Rgba,
) {
    surface.stroke_line(
        head,
        head + Vec2::new(0.0, STEM_LENGTH),
        Stroke::new(palette::STEM, STEM_WIDTH),
    );

    if bloom <= 0.0 {
        return;
    }

    let outline = Some(Stroke::new(color.darken(OUTLINE_DARKEN), OUTLINE_WIDTH));
    for petal in petal_layout(head, size, bloom, rotation) {
        surface.fill_ellipse(petal.center, petal.radii, petal.rotation, color, outline);
    }

    surface.fill_circle(
        head,
        size * bloom * 0.25,
        palette::GOLD,
        Some(Stroke::new(palette::ORANGE, OUTLINE_WIDTH)),
    );
}

/// Control and tip points of a grass blade rooted at `root`
pub fn grass_curve(root: Vec2, height: f32, sway: f32) -> (Vec2, Vec2) {
    let control = root + Vec2::new(sway / 2.0, -height / 2.0);
    let tip = root + Vec2::new(sway, -height);
    (control, tip)
}

pub fn draw_grass_blade(surface: &mut impl Surface, root: Vec2, height: f32, sway: f32, stroke: Stroke) {
    let (control, tip) = grass_curve(root, height, sway);
    surface.stroke_curve(root, control, tip, stroke);
}

/// Six-petal flower on the panorama ring; `scale` in [0,1] is its depth
pub fn draw_ring_flower(surface: &mut impl Surface, pos: Vec2, size: f32, scale: f32) {
    surface.stroke_line(
        pos,
        pos + Vec2::new(0.0, size * 0.8),
        Stroke::new(palette::STEM, 3.0 * scale),
    );

    let petal = Rgba::rgba(255, (100.0 + scale * 100.0) as u8, 180, 0.7 + scale * 0.3);
    for i in 0..6 {
        let theta = TAU * i as f32 / 6.0;
        let center = pos + Vec2::from_angle(theta) * size * 0.3;
        surface.fill_circle(center, size * 0.2, petal, None);
    }

    surface.fill_circle(pos, size * 0.15, palette::GOLD, None);
}

/// Triangular tree on the panorama ring
pub fn draw_ring_tree(surface: &mut impl Surface, pos: Vec2, size: f32, scale: f32) {
    surface.fill_rect(
        pos + Vec2::new(-size * 0.1, 0.0),
        Vec2::new(size * 0.2, size * 0.6),
        palette::TRUNK,
    );

    let foliage = palette::STEM.with_alpha(0.6 + scale * 0.4);
    surface.fill_triangle(
        [
            pos + Vec2::new(0.0, -size * 0.3),
            pos + Vec2::new(-size * 0.4, size * 0.2),
            pos + Vec2::new(size * 0.4, size * 0.2),
        ],
        foliage,
    );
}

/// Five white petals around a gold disc
pub fn draw_small_flower(surface: &mut impl Surface, pos: Vec2, size: f32) {
    surface.fill_circle(pos, size * 0.3, palette::GOLD, None);
    for i in 0..5 {
        let theta = TAU * i as f32 / 5.0;
        surface.fill_circle(pos + Vec2::from_angle(theta) * size * 0.4, size * 0.3, palette::WHITE, None);
    }
}
