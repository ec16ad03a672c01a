//! Background scene: a fixed population of hearts rising forever

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::particle::FloatingHeart;
use super::scene::Scene;
use crate::consts::BACKGROUND_HEARTS;
use crate::renderer::Surface;

/// Viewport-sized field of floating hearts
#[derive(Debug, Clone)]
pub struct HeartField<R = Pcg32> {
    hearts: Vec<FloatingHeart>,
    bounds: Vec2,
    population: usize,
    rng: R,
}

impl HeartField<Pcg32> {
    pub fn new(bounds: Vec2, seed: u64) -> Self {
        Self::with_rng(bounds, BACKGROUND_HEARTS, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> HeartField<R> {
    pub fn with_rng(bounds: Vec2, population: usize, rng: R) -> Self {
        Self {
            hearts: Vec::with_capacity(population),
            bounds,
            population,
            rng,
        }
    }

    pub fn hearts(&self) -> &[FloatingHeart] {
        &self.hearts
    }
}

impl<R: Rng> Scene for HeartField<R> {
    fn name(&self) -> &'static str {
        "background"
    }

    fn start(&mut self) {
        let bounds = self.bounds;
        let rng = &mut self.rng;
        self.hearts = (0..self.population)
            .map(|_| FloatingHeart::spawn(bounds, rng))
            .collect();
    }

    fn update(&mut self, _now_ms: f64) {
        for heart in self.hearts.iter_mut() {
            heart.update(self.bounds, &mut self.rng);
        }
    }

    fn draw(&self, surface: &mut impl Surface) {
        surface.clear();
        for heart in &self.hearts {
            heart.draw(surface);
        }
    }

    fn resize(&mut self, size: Vec2) {
        log::debug!("background resized to {}x{}", size.x, size.y);
        self.bounds = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;
    use proptest::prelude::*;

    #[test]
    fn test_start_fills_population() {
        let mut field = HeartField::new(Vec2::new(800.0, 600.0), 42);
        assert!(field.hearts().is_empty());
        field.start();
        assert_eq!(field.hearts().len(), BACKGROUND_HEARTS);
        assert!(field.hearts().iter().all(|h| h.pos.y == 650.0));
    }

    #[test]
    fn test_draw_clears_then_draws_each_heart() {
        let mut field = HeartField::new(Vec2::new(800.0, 600.0), 42);
        field.start();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        field.draw(&mut surface);
        assert_eq!(surface.commands.len(), BACKGROUND_HEARTS + 1);
        assert_eq!(surface.texts().count(), BACKGROUND_HEARTS);
    }

    #[test]
    fn test_resize_moves_respawn_band() {
        let mut field = HeartField::new(Vec2::new(800.0, 600.0), 9);
        field.start();
        field.resize(Vec2::new(400.0, 300.0));
        // Run long enough for every heart to wrap at least once
        for _ in 0..2000 {
            field.update(0.0);
        }
        assert!(field.hearts().iter().all(|h| h.pos.y <= 350.0));
    }

    proptest! {
        #[test]
        fn prop_population_and_rise(seed in any::<u64>(), frames in 1usize..400) {
            let mut field = HeartField::new(Vec2::new(640.0, 480.0), seed);
            field.start();
            for _ in 0..frames {
                let before: Vec<f32> = field.hearts().iter().map(|h| h.pos.y).collect();
                field.update(0.0);
                prop_assert_eq!(field.hearts().len(), BACKGROUND_HEARTS);
                for (heart, y0) in field.hearts().iter().zip(before) {
                    // Either rose this frame or wrapped back to the bottom band
                    prop_assert!(heart.pos.y < y0 || heart.pos.y == 530.0);
                    prop_assert!(heart.pos.y >= -50.0);
                }
            }
        }
    }
}
