//! Heart Garden - animated greeting scenes on Canvas 2D
//!
//! Core modules:
//! - `sim`: Deterministic scene simulations (particles, procedural shapes, puzzle)
//! - `renderer`: Drawing surface abstraction and the frame loop
//! - `platform`: Browser bindings (canvas, requestAnimationFrame, DOM)
//! - `settings`: Tunables for the scenes

pub mod content;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Scene configuration constants
pub mod consts {
    /// Floating hearts in the background scene
    pub const BACKGROUND_HEARTS: usize = 60;
    /// Hearts spawn and despawn this far outside the surface (px)
    pub const HEART_EDGE_MARGIN: f32 = 50.0;
    /// Horizontal sway amplitude of a floating heart (px per frame)
    pub const HEART_SWAY: f32 = 0.8;

    /// Sparks per firework burst
    pub const BURST_SIZE: usize = 30;
    /// Per-frame probability of a new burst
    pub const BURST_CHANCE: f64 = 0.05;
    /// Downward acceleration applied to sparks (px/frame²)
    pub const SPARK_GRAVITY: f32 = 0.1;
    /// Opacity of the overlay painted between firework frames
    pub const TRAIL_FADE: f32 = 0.1;

    /// Flowers created by one "add more" operation
    pub const FLOWER_BATCH: usize = 5;
    /// Grass blades in a freshly reset garden
    pub const GRASS_BLADES: usize = 100;
    /// Bloom progress gained per frame
    pub const BLOOM_STEP: f32 = 0.02;
    /// Delay between consecutive flower bloom starts (ms)
    pub const BLOOM_STAGGER_MS: f64 = 100.0;
    /// Extra wait after the last bloom start before completion fires (ms)
    pub const BLOOM_SETTLE_MS: f64 = 1000.0;
    /// Garden surface size (px)
    pub const GARDEN_SIZE: f32 = 600.0;

    /// Panorama surface height (px)
    pub const PANORAMA_HEIGHT: f32 = 400.0;
    /// Flora elements on the panorama ring
    pub const RING_ELEMENTS: usize = 12;
    /// Small flowers in the scrolling foreground strip
    pub const STRIP_ELEMENTS: usize = 20;
    /// Strip offset per radian of rotation (px)
    pub const STRIP_SCROLL: f32 = 50.0;
    /// Rotation per dragged pixel (radians)
    pub const DRAG_SENSITIVITY: f32 = 0.01;

    /// Delay before the puzzle completion message replaces the words (ms)
    pub const PUZZLE_COMPLETE_DELAY_MS: f64 = 500.0;
    /// Shake feedback on a wrong puzzle press (ms)
    pub const SHAKE_MS: i32 = 500;
    /// Glyphs in the celebration cascade
    pub const CASCADE_GLYPHS: usize = 50;
    /// Delay between cascade glyph spawns (ms)
    pub const CASCADE_STAGGER_MS: f64 = 100.0;
    /// Wait before a glyph starts falling (ms)
    pub const CASCADE_FALL_DELAY_MS: f64 = 100.0;
    /// Fall duration of a cascade glyph (ms)
    pub const CASCADE_FALL_MS: f64 = 3000.0;
    /// Lifetime of a cascade glyph from spawn to removal (ms)
    pub const CASCADE_LIFETIME_MS: f64 = 3100.0;

    /// Typewriter cadence (ms per character)
    pub const TYPEWRITER_TICK_MS: i32 = 100;
    /// Pause after the welcome message before the main menu (ms)
    pub const WELCOME_HOLD_MS: i32 = 2000;
    /// Layout settle delay before measuring a freshly shown page (ms)
    pub const PAGE_SETTLE_MS: i32 = 100;

    /// Failed login attempts before the gate locks
    pub const MAX_LOGIN_ATTEMPTS: u32 = 3;
}

/// Wrap a horizontal offset into `[0, width)`
#[inline]
pub fn wrap_offset(x: f32, width: f32) -> f32 {
    if width <= 0.0 {
        return 0.0;
    }
    let wrapped = x.rem_euclid(width);
    // rem_euclid can round up to exactly `width` for tiny negative inputs
    if wrapped >= width { 0.0 } else { wrapped }
}

/// Rotate `offset` by `theta` (screen coordinates, y down, clockwise)
#[inline]
pub fn rotate(offset: Vec2, theta: f32) -> Vec2 {
    Vec2::from_angle(theta).rotate(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_wrap_offset() {
        assert!((wrap_offset(650.0, 600.0) - 50.0).abs() < 1e-4);
        assert!((wrap_offset(-50.0, 600.0) - 550.0).abs() < 1e-4);
        assert_eq!(wrap_offset(-1e-9, 600.0), 0.0);
        assert_eq!(wrap_offset(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        // (0, -1) points up on screen; a quarter turn clockwise points right
        let v = rotate(Vec2::new(0.0, -1.0), FRAC_PI_2);
        assert!((v.x - 1.0).abs() < 1e-5);
        assert!(v.y.abs() < 1e-5);
    }
}
