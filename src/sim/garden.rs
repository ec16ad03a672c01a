//! Garden scene: swaying grass and flowers that bloom on request
//!
//! "Bloom all" staggers each flower's start by its index and then fires a
//! one-shot completion hook. The staggered starts are delayed cues; a clear
//! or restart invalidates any that are still pending.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::scene::Scene;
use super::shape::{Flower, GrassBlade};
use super::timeline::Timeline;
use crate::consts::*;
use crate::renderer::Surface;

/// Grass roots are scattered over this band at the bottom (px)
const GRASS_BAND: f32 = 100.0;
/// Flowers keep this far from the left/right edges (px)
const FLOWER_SIDE_MARGIN: f32 = 50.0;
/// Flowers keep this far from the top/bottom edges (px)
const FLOWER_END_MARGIN: f32 = 100.0;

/// Population sizes for a garden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GardenSizes {
    pub flower_batch: usize,
    pub grass_blades: usize,
}

impl Default for GardenSizes {
    fn default() -> Self {
        Self {
            flower_batch: FLOWER_BATCH,
            grass_blades: GRASS_BLADES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GardenCue {
    StartBloom(usize),
    BloomComplete,
}

/// Fixed-size garden with grass beneath flowers
pub struct Garden<R = Pcg32> {
    flowers: Vec<Flower>,
    grass: Vec<GrassBlade>,
    bounds: Vec2,
    sizes: GardenSizes,
    cues: Timeline<GardenCue>,
    now_ms: f64,
    poem_visible: bool,
    on_bloom_complete: Option<Box<dyn FnMut()>>,
    rng: R,
}

impl Garden<Pcg32> {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(
            Vec2::splat(GARDEN_SIZE),
            GardenSizes::default(),
            Pcg32::seed_from_u64(seed),
        )
    }
}

impl<R: Rng> Garden<R> {
    pub fn with_rng(bounds: Vec2, sizes: GardenSizes, rng: R) -> Self {
        Self {
            flowers: Vec::new(),
            grass: Vec::new(),
            bounds,
            sizes,
            cues: Timeline::new(),
            now_ms: 0.0,
            poem_visible: false,
            on_bloom_complete: None,
            rng,
        }
    }

    pub fn flowers(&self) -> &[Flower] {
        &self.flowers
    }

    pub fn grass(&self) -> &[GrassBlade] {
        &self.grass
    }

    /// Whether the poem should be showing
    pub fn poem_visible(&self) -> bool {
        self.poem_visible
    }

    /// Hook run each time a "bloom all" cascade completes
    pub fn set_on_bloom_complete(&mut self, hook: impl FnMut() + 'static) {
        self.on_bloom_complete = Some(Box::new(hook));
    }

    /// Append one batch of dormant flowers
    pub fn add_flowers(&mut self) {
        let (w, h) = (self.bounds.x, self.bounds.y);
        for _ in 0..self.sizes.flower_batch {
            let x = self.rng.random_range(0.0..(w - 2.0 * FLOWER_SIDE_MARGIN).max(1.0))
                + FLOWER_SIDE_MARGIN;
            let y = self.rng.random_range(0.0..(h - 2.0 * FLOWER_END_MARGIN).max(1.0))
                + FLOWER_END_MARGIN;
            let flower = Flower::spawn(Vec2::new(x, y), &mut self.rng);
            self.flowers.push(flower);
        }
        log::debug!("garden now has {} flowers", self.flowers.len());
    }

    /// Start every current flower blooming, each `BLOOM_STAGGER_MS` after the
    /// previous, then fire the completion hook once the last has had time
    /// to open.
    pub fn bloom_all(&mut self) {
        let count = self.flowers.len();
        for i in 0..count {
            self.cues
                .schedule(self.now_ms + i as f64 * BLOOM_STAGGER_MS, GardenCue::StartBloom(i));
        }
        self.cues.schedule(
            self.now_ms + count as f64 * BLOOM_STAGGER_MS + BLOOM_SETTLE_MS,
            GardenCue::BloomComplete,
        );
        log::info!("blooming {} flowers", count);
    }

    /// Drop every flower, regrow the grass, and hide the poem
    pub fn clear(&mut self) {
        self.cues.invalidate();
        self.flowers.clear();
        self.regrow_grass();
        self.poem_visible = false;
        log::info!("garden cleared");
    }

    fn regrow_grass(&mut self) {
        let (w, h) = (self.bounds.x, self.bounds.y);
        let rng = &mut self.rng;
        self.grass = (0..self.sizes.grass_blades)
            .map(|_| {
                let root = Vec2::new(
                    rng.random_range(0.0..w.max(1.0)),
                    h - rng.random_range(0.0..GRASS_BAND),
                );
                GrassBlade::spawn(root, rng)
            })
            .collect();
    }

    fn fire(&mut self, cue: GardenCue) {
        match cue {
            GardenCue::StartBloom(i) => {
                if let Some(flower) = self.flowers.get_mut(i) {
                    flower.start_bloom();
                }
            }
            GardenCue::BloomComplete => {
                self.poem_visible = true;
                log::info!("garden fully bloomed");
                if let Some(hook) = self.on_bloom_complete.as_mut() {
                    hook();
                }
            }
        }
    }
}

impl<R: Rng> Scene for Garden<R> {
    fn name(&self) -> &'static str {
        "garden"
    }

    fn start(&mut self) {
        self.cues.invalidate();
        self.flowers.clear();
        self.regrow_grass();
        self.add_flowers();
        self.poem_visible = false;
    }

    fn update(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
        for cue in self.cues.drain_due(now_ms) {
            self.fire(cue);
        }

        for blade in self.grass.iter_mut() {
            blade.update();
        }
        for flower in self.flowers.iter_mut() {
            flower.update();
        }
    }

    fn draw(&self, surface: &mut impl Surface) {
        surface.clear();
        for blade in &self.grass {
            blade.draw(surface);
        }
        for flower in &self.flowers {
            flower.draw(surface);
        }
    }
}
