//! Celebration cascade: glyphs released one by one that fall and fade
//!
//! Glyph `i` spawns `i * CASCADE_STAGGER_MS` after the cascade starts,
//! waits `CASCADE_FALL_DELAY_MS`, then eases down to the bottom edge over
//! `CASCADE_FALL_MS` while fading out. It is removed `CASCADE_LIFETIME_MS`
//! after spawning. The scene finishes when every glyph has come and gone.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::scene::Scene;
use super::timeline::Timeline;
use crate::consts::*;
use crate::content::CASCADE_GLYPH;
use crate::renderer::Surface;

/// Glyphs start this far above the top edge (px)
const START_ABOVE: f32 = 50.0;

/// One falling glyph
#[derive(Debug, Clone, PartialEq)]
pub struct FallingGlyph {
    /// Horizontal start as a fraction of the surface width
    pub x_frac: f32,
    /// Font size (px)
    pub size: f32,
    pub spawned_ms: f64,
    /// Eased fall progress in [0,1]
    pub progress: f32,
}

impl FallingGlyph {
    fn spawn<R: Rng>(now_ms: f64, rng: &mut R) -> Self {
        Self {
            x_frac: rng.random_range(0.0..1.0),
            size: rng.random_range(20.0..40.0),
            spawned_ms: now_ms,
            progress: 0.0,
        }
    }

    fn update(&mut self, now_ms: f64) {
        let t = ((now_ms - self.spawned_ms - CASCADE_FALL_DELAY_MS) / CASCADE_FALL_MS)
            .clamp(0.0, 1.0) as f32;
        // Ease-in: slow start, fast finish
        self.progress = self.progress.max(t * t);
    }

    fn is_expired(&self, now_ms: f64) -> bool {
        now_ms - self.spawned_ms >= CASCADE_LIFETIME_MS
    }

    pub fn opacity(&self) -> f32 {
        1.0 - self.progress
    }

    pub fn position(&self, bounds: Vec2) -> Vec2 {
        Vec2::new(
            self.x_frac * bounds.x,
            -START_ABOVE + self.progress * (bounds.y + START_ABOVE),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Release;

/// Full-viewport overlay of falling glyphs
#[derive(Debug, Clone)]
pub struct Cascade<R = Pcg32> {
    glyphs: Vec<FallingGlyph>,
    releases: Timeline<Release>,
    released: usize,
    count: usize,
    started: bool,
    bounds: Vec2,
    rng: R,
}

impl Cascade<Pcg32> {
    pub fn new(bounds: Vec2, seed: u64) -> Self {
        Self::with_rng(bounds, CASCADE_GLYPHS, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Cascade<R> {
    pub fn with_rng(bounds: Vec2, count: usize, rng: R) -> Self {
        Self {
            glyphs: Vec::new(),
            releases: Timeline::new(),
            released: 0,
            count,
            started: false,
            bounds,
            rng,
        }
    }

    pub fn glyphs(&self) -> &[FallingGlyph] {
        &self.glyphs
    }

    /// Glyphs spawned since the last start
    pub fn released(&self) -> usize {
        self.released
    }
}

impl<R: Rng> Scene for Cascade<R> {
    fn name(&self) -> &'static str {
        "cascade"
    }

    fn start(&mut self) {
        self.releases.invalidate();
        self.glyphs.clear();
        self.released = 0;
        self.started = false;
    }

    fn update(&mut self, now_ms: f64) {
        // Release times are anchored to the first frame after start
        if !self.started {
            self.started = true;
            for i in 0..self.count {
                self.releases
                    .schedule(now_ms + i as f64 * CASCADE_STAGGER_MS, Release);
            }
        }

        for _ in self.releases.drain_due(now_ms) {
            let glyph = FallingGlyph::spawn(now_ms, &mut self.rng);
            self.glyphs.push(glyph);
            self.released += 1;
        }

        for glyph in self.glyphs.iter_mut() {
            glyph.update(now_ms);
        }
        self.glyphs.retain(|g| !g.is_expired(now_ms));
    }

    fn draw(&self, surface: &mut impl Surface) {
        surface.clear();
        for glyph in &self.glyphs {
            surface.fill_text(
                CASCADE_GLYPH,
                glyph.position(self.bounds),
                glyph.size,
                glyph.opacity(),
            );
        }
    }

    fn resize(&mut self, size: Vec2) {
        self.bounds = size;
    }

    fn is_finished(&self) -> bool {
        self.started && self.released == self.count && self.glyphs.is_empty()
    }
}
