//! Drifting and decaying point-like particles
//!
//! Particles are owned exclusively by their scene's collection. Decaying
//! particles are culled by the owner in the same pass that drives their
//! alpha to zero.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use crate::consts::*;
use crate::renderer::{Rgba, Surface, palette};

/// Glyphs a floating heart can show
pub const HEART_GLYPHS: [&str; 5] = ["💕", "💗", "💖", "💝", "❤️"];

/// A firework spark: flies out of a burst, falls, and fades
#[derive(Debug, Clone, PartialEq)]
pub struct Spark {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgba,
    /// 0-1, decreases by `decay` every frame
    pub alpha: f32,
    pub decay: f32,
}

impl Spark {
    /// Spark leaving `origin` in a random direction
    pub fn burst<R: Rng>(origin: Vec2, rng: &mut R) -> Self {
        Self {
            pos: origin,
            vel: Vec2::new(rng.random_range(-4.0..4.0), rng.random_range(-4.0..4.0)),
            radius: rng.random_range(1.0..4.0),
            color: palette::FIREWORKS[rng.random_range(0..palette::FIREWORKS.len())],
            alpha: 1.0,
            decay: rng.random_range(0.015..0.03),
        }
    }

    /// Apply gravity, move, and fade by one frame
    pub fn update(&mut self) {
        self.vel.y += SPARK_GRAVITY;
        self.pos += self.vel;
        self.alpha -= self.decay;
    }

    pub fn is_alive(&self) -> bool {
        self.alpha > 0.0
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_circle(self.pos, self.radius, self.color.with_alpha(self.alpha), None);
    }
}

/// A heart glyph rising through the background with a gentle sway
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingHeart {
    pub pos: Vec2,
    /// Font size (px)
    pub size: f32,
    /// Rise per frame (px)
    pub speed: f32,
    pub glyph: &'static str,
    pub opacity: f32,
    pub swing: f32,
    pub swing_speed: f32,
}

impl FloatingHeart {
    /// New heart just below the bottom edge of `bounds`
    pub fn spawn<R: Rng>(bounds: Vec2, rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..bounds.x.max(1.0)),
                bounds.y + HEART_EDGE_MARGIN,
            ),
            size: rng.random_range(15.0..35.0),
            speed: rng.random_range(0.5..1.5),
            glyph: HEART_GLYPHS[rng.random_range(0..HEART_GLYPHS.len())],
            opacity: rng.random_range(0.2..0.5),
            swing: rng.random_range(0.0..TAU),
            swing_speed: rng.random_range(0.01..0.03),
        }
    }

    /// Rise and sway by one frame. A heart that leaves the top edge is
    /// replaced by a fresh one at the bottom; returns true when that happens.
    pub fn update<R: Rng>(&mut self, bounds: Vec2, rng: &mut R) -> bool {
        self.pos.y -= self.speed;
        self.swing += self.swing_speed;
        self.pos.x += self.swing.sin() * HEART_SWAY;

        if self.pos.y < -HEART_EDGE_MARGIN {
            *self = Self::spawn(bounds, rng);
            return true;
        }
        false
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_text(self.glyph, self.pos, self.size, self.opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spark_falls_and_fades() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut spark = Spark::burst(Vec2::new(100.0, 100.0), &mut rng);
        let vy = spark.vel.y;
        let alpha = spark.alpha;
        spark.update();
        assert!((spark.vel.y - (vy + SPARK_GRAVITY)).abs() < 1e-6);
        assert!((spark.alpha - (alpha - spark.decay)).abs() < 1e-6);
    }

    #[test]
    fn test_heart_respawns_at_bottom() {
        let mut rng = Pcg32::seed_from_u64(3);
        let bounds = Vec2::new(800.0, 600.0);
        let mut heart = FloatingHeart::spawn(bounds, &mut rng);
        heart.pos.y = -HEART_EDGE_MARGIN + 0.1;
        assert!(heart.update(bounds, &mut rng));
        assert_eq!(heart.pos.y, bounds.y + HEART_EDGE_MARGIN);
    }

    proptest! {
        #[test]
        fn prop_spark_spawn_bounds(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let spark = Spark::burst(Vec2::ZERO, &mut rng);
            prop_assert!((1.0..4.0).contains(&spark.radius));
            prop_assert!((0.015..0.03).contains(&spark.decay));
            prop_assert!(spark.vel.x.abs() <= 4.0 && spark.vel.y.abs() <= 4.0);
            prop_assert_eq!(spark.alpha, 1.0);
        }

        #[test]
        fn prop_spark_alpha_strictly_decreases(seed in any::<u64>(), frames in 1usize..80) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut spark = Spark::burst(Vec2::ZERO, &mut rng);
            for _ in 0..frames {
                let before = spark.alpha;
                spark.update();
                prop_assert!(spark.alpha < before);
            }
        }

        #[test]
        fn prop_heart_spawn_bounds(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let heart = FloatingHeart::spawn(Vec2::new(1024.0, 768.0), &mut rng);
            prop_assert!((0.0..1024.0).contains(&heart.pos.x));
            prop_assert!((15.0..35.0).contains(&heart.size));
            prop_assert!((0.5..1.5).contains(&heart.speed));
            prop_assert!((0.2..0.5).contains(&heart.opacity));
            prop_assert!(HEART_GLYPHS.contains(&heart.glyph));
        }
    }
}
