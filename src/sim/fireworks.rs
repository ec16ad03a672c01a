//! Fireworks scene: random bursts of decaying sparks over a fading backdrop

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::particle::Spark;
use super::scene::Scene;
use crate::consts::{BURST_CHANCE, BURST_SIZE, TRAIL_FADE};
use crate::renderer::{Surface, palette};

/// Spawn policy for bursts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstPolicy {
    /// Independent per-frame probability of a burst
    pub chance: f64,
    /// Sparks per burst
    pub size: usize,
}

impl Default for BurstPolicy {
    fn default() -> Self {
        Self {
            chance: BURST_CHANCE,
            size: BURST_SIZE,
        }
    }
}

/// Viewport-sized fireworks display
#[derive(Debug, Clone)]
pub struct Fireworks<R = Pcg32> {
    sparks: Vec<Spark>,
    bounds: Vec2,
    policy: BurstPolicy,
    bursts: u64,
    rng: R,
}

impl Fireworks<Pcg32> {
    pub fn new(bounds: Vec2, seed: u64) -> Self {
        Self::with_rng(bounds, BurstPolicy::default(), Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Fireworks<R> {
    pub fn with_rng(bounds: Vec2, policy: BurstPolicy, rng: R) -> Self {
        Self {
            sparks: Vec::new(),
            bounds,
            policy,
            bursts: 0,
            rng,
        }
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    /// Bursts launched since the last start
    pub fn bursts(&self) -> u64 {
        self.bursts
    }

    /// Launch one burst at `origin`
    pub fn burst(&mut self, origin: Vec2) {
        let rng = &mut self.rng;
        self.sparks
            .extend((0..self.policy.size).map(|_| Spark::burst(origin, rng)));
        self.bursts += 1;
    }

    /// Random point in the upper half of the surface
    fn burst_origin(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.random_range(0.0..self.bounds.x.max(1.0)),
            self.rng.random_range(0.0..(self.bounds.y * 0.5).max(1.0)),
        )
    }
}

impl<R: Rng> Scene for Fireworks<R> {
    fn name(&self) -> &'static str {
        "fireworks"
    }

    fn start(&mut self) {
        self.sparks.clear();
        self.bursts = 0;
    }

    fn update(&mut self, _now_ms: f64) {
        for spark in self.sparks.iter_mut() {
            spark.update();
        }
        self.sparks.retain(Spark::is_alive);

        // One Bernoulli trial per frame keeps the cadence irregular
        if self.rng.random_bool(self.policy.chance.clamp(0.0, 1.0)) {
            let origin = self.burst_origin();
            self.burst(origin);
        }
    }

    fn draw(&self, surface: &mut impl Surface) {
        surface.fade(palette::NIGHT.with_alpha(TRAIL_FADE));
        for spark in &self.sparks {
            spark.draw(surface);
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

    fn quiet(seed: u64) -> Fireworks {
        Fireworks::with_rng(
            Vec2::new(800.0, 600.0),
            BurstPolicy {
                chance: 0.0,
                size: BURST_SIZE,
            },
            Pcg32::seed_from_u64(seed),
        )
    }

    #[test]
    fn test_burst_adds_sparks() {
        let mut fw = quiet(1);
        fw.start();
        fw.burst(Vec2::new(100.0, 100.0));
        assert_eq!(fw.sparks().len(), BURST_SIZE);
        assert_eq!(fw.bursts(), 1);
    }

    #[test]
    fn test_sparks_expire() {
        let mut fw = quiet(2);
        fw.start();
        fw.burst(Vec2::new(100.0, 100.0));
        // Slowest decay is 0.015/frame, so 67 frames exhaust every spark
        for _ in 0..67 {
            fw.update(0.0);
        }
        assert!(fw.sparks().is_empty());
    }

    #[test]
    fn test_draw_fades_instead_of_clearing() {
        let mut fw = quiet(3);
        fw.start();
        fw.burst(Vec2::new(50.0, 50.0));
        let mut surface = RecordingSurface::new(800.0, 600.0);
        fw.draw(&mut surface);
        assert!(!surface.commands.contains(&DrawCommand::Clear));
        match &surface.commands[0] {
            DrawCommand::Rect { size, color, .. } => {
                assert_eq!(*size, Vec2::new(800.0, 600.0));
                assert!((color.a - TRAIL_FADE).abs() < 1e-6);
            }
            other => panic!("expected fade overlay, got {:?}", other),
        }
        assert_eq!(surface.commands.len(), BURST_SIZE + 1);
    }

    #[test]
    fn test_bursts_are_irregular() {
        let mut fw = Fireworks::new(Vec2::new(800.0, 600.0), 99);
        fw.start();
        for _ in 0..2000 {
            fw.update(0.0);
        }
        // ~5% of 2000 frames
        assert!((50..=160).contains(&fw.bursts()), "bursts = {}", fw.bursts());
    }

    proptest! {
        #[test]
        fn prop_no_dead_spark_survives_update(seed in any::<u64>(), frames in 1usize..300) {
            let mut fw = Fireworks::new(Vec2::new(800.0, 600.0), seed);
            fw.start();
            for _ in 0..frames {
                fw.update(0.0);
                prop_assert!(fw.sparks().iter().all(|s| s.alpha > 0.0));
            }
            let mut surface = RecordingSurface::new(800.0, 600.0);
            fw.draw(&mut surface);
            let drawn = surface.count(|c| matches!(c, DrawCommand::Circle { fill, .. } if fill.a > 0.0));
            prop_assert_eq!(drawn, fw.sparks().len());
        }
    }
}
