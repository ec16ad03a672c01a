//! Procedural shapes: garden flowers and grass blades

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use crate::consts::BLOOM_STEP;
use crate::renderer::shapes::{draw_garden_flower, draw_grass_blade};
use crate::renderer::{Rgba, Stroke, Surface};

/// Horizontal sway amplitude of a flower (px)
const FLOWER_SWAY: f32 = 5.0;
/// Tip sway amplitude of a grass blade (px)
const GRASS_SWAY: f32 = 10.0;

/// A garden flower that turns, sways, and blooms once told to
#[derive(Debug, Clone, PartialEq)]
pub struct Flower {
    /// Where the head sits when not swaying
    pub anchor: Vec2,
    /// Head size at full bloom
    pub size: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub sway_phase: f32,
    pub sway_speed: f32,
    pub color: Rgba,
    bloom: f32,
    blooming: bool,
}

impl Flower {
    pub fn spawn<R: Rng>(anchor: Vec2, rng: &mut R) -> Self {
        Self {
            anchor,
            size: rng.random_range(40.0..70.0),
            rotation: rng.random_range(0.0..TAU),
            rotation_speed: rng.random_range(-0.01..0.01),
            sway_phase: rng.random_range(0.0..TAU),
            sway_speed: rng.random_range(0.01..0.03),
            color: Rgba::rgb(
                rng.random_range(155..255),
                rng.random_range(50..200),
                rng.random_range(100..250),
            ),
            bloom: 0.0,
            blooming: false,
        }
    }

    /// Bloom progress in [0, 1]
    pub fn bloom(&self) -> f32 {
        self.bloom
    }

    pub fn is_blooming(&self) -> bool {
        self.blooming
    }

    /// Begin the bloom transition; progress only moves forward from here
    pub fn start_bloom(&mut self) {
        self.blooming = true;
    }

    pub fn update(&mut self) {
        self.rotation += self.rotation_speed;
        self.sway_phase += self.sway_speed;

        if self.blooming && self.bloom < 1.0 {
            self.bloom = (self.bloom + BLOOM_STEP).min(1.0);
        }
    }

    /// Head position including sway
    pub fn head(&self) -> Vec2 {
        self.anchor + Vec2::new(self.sway_phase.sin() * FLOWER_SWAY, 0.0)
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        draw_garden_flower(surface, self.head(), self.size, self.bloom, self.rotation, self.color);
    }
}

/// A grass blade rooted at `root`, swaying at the tip
#[derive(Debug, Clone, PartialEq)]
pub struct GrassBlade {
    pub root: Vec2,
    pub height: f32,
    pub width: f32,
    pub color: Rgba,
    pub sway_phase: f32,
    pub sway_speed: f32,
}

impl GrassBlade {
    pub fn spawn<R: Rng>(root: Vec2, rng: &mut R) -> Self {
        Self {
            root,
            height: rng.random_range(20.0..50.0),
            width: rng.random_range(2.0..5.0),
            color: Rgba::rgb(
                rng.random_range(34..84),
                rng.random_range(139..189),
                rng.random_range(34..84),
            ),
            sway_phase: rng.random_range(0.0..TAU),
            sway_speed: rng.random_range(0.01..0.04),
        }
    }

    pub fn update(&mut self) {
        self.sway_phase += self.sway_speed;
    }

    pub fn sway(&self) -> f32 {
        self.sway_phase.sin() * GRASS_SWAY
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        draw_grass_blade(
            surface,
            self.root,
            self.height,
            self.sway(),
            Stroke::new(self.color, self.width),
        );
    }
}
