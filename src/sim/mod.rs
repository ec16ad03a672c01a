//! Deterministic simulation module
//!
//! All scene logic lives here. This module must stay platform-free:
//! - Seeded RNG only (every scene owns its random source)
//! - Implicit frame step; wall-clock time only drives delayed cues
//! - Stable collection order (spawn order is draw order)
//! - No DOM or canvas dependencies

pub mod background;
pub mod cascade;
pub mod drag;
pub mod fireworks;
pub mod garden;
pub mod gate;
pub mod panorama;
pub mod particle;
pub mod puzzle;
pub mod scene;
pub mod shape;
pub mod timeline;
pub mod typewriter;

pub use background::HeartField;
pub use cascade::{Cascade, FallingGlyph};
pub use drag::DragRotate;
pub use fireworks::{BurstPolicy, Fireworks};
pub use garden::{Garden, GardenSizes};
pub use gate::{GateOutcome, LoginGate};
pub use panorama::{Panorama, RingKind, RingPlacement};
pub use particle::{FloatingHeart, Spark};
pub use puzzle::{HeartPuzzle, PressOutcome, PuzzlePhase};
pub use scene::Scene;
pub use shape::{Flower, GrassBlade};
pub use timeline::Timeline;
pub use typewriter::Typewriter;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::frame_loop::step;
    use crate::renderer::{ManualScheduler, RecordingSurface, RenderLoop};
    use glam::Vec2;
    use std::cell::Cell;
    use std::rc::Rc;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn run_until<S: Scene>(
        render_loop: &mut RenderLoop<S>,
        scheduler: &mut ManualScheduler,
        surface: &mut RecordingSurface,
        from_ms: f64,
        until_ms: f64,
    ) -> f64 {
        let mut now = from_ms;
        while now < until_ms {
            now += FRAME_MS;
            step(render_loop, scheduler, surface, now);
            surface.take();
        }
        now
    }

    #[test]
    fn test_garden_blooms_through_render_loop() {
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let mut garden = Garden::new(11);
        garden.set_on_bloom_complete(move || counter.set(counter.get() + 1));

        let mut scheduler = ManualScheduler::new();
        let mut surface = RecordingSurface::new(600.0, 600.0);
        let mut render_loop = RenderLoop::new(garden);
        render_loop.start(&mut scheduler);

        let now = run_until(&mut render_loop, &mut scheduler, &mut surface, 0.0, 20.0);
        render_loop.scene_mut().bloom_all();
        let now = run_until(&mut render_loop, &mut scheduler, &mut surface, now, 1400.0);
        assert_eq!(fired.get(), 0, "completion waits for the settle delay");

        run_until(&mut render_loop, &mut scheduler, &mut surface, now, 2500.0);
        assert_eq!(fired.get(), 1);
        assert!(render_loop.scene().poem_visible());
        assert!(render_loop.scene().flowers().iter().all(|f| f.bloom() >= 1.0));
    }

    #[test]
    fn test_restart_drops_pending_bloom_cascade() {
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let mut garden = Garden::new(12);
        garden.set_on_bloom_complete(move || counter.set(counter.get() + 1));

        let mut scheduler = ManualScheduler::new();
        let mut surface = RecordingSurface::new(600.0, 600.0);
        let mut render_loop = RenderLoop::new(garden);
        render_loop.start(&mut scheduler);

        let now = run_until(&mut render_loop, &mut scheduler, &mut surface, 0.0, 20.0);
        render_loop.scene_mut().bloom_all();
        let now = run_until(&mut render_loop, &mut scheduler, &mut surface, now, 150.0);

        // Leaving and re-entering the page restarts the scene
        render_loop.stop(&mut scheduler);
        render_loop.start(&mut scheduler);
        assert_eq!(scheduler.live_count(), 1);

        run_until(&mut render_loop, &mut scheduler, &mut surface, now, 3000.0);
        assert_eq!(fired.get(), 0);
        assert!(!render_loop.scene().poem_visible());
        assert!(render_loop.scene().flowers().iter().all(|f| !f.is_blooming()));
    }

    #[test]
    fn test_independent_scenes_share_nothing() {
        let viewport = Vec2::new(800.0, 600.0);
        let mut hearts = RenderLoop::new(HeartField::new(viewport, 1));
        let mut fireworks = RenderLoop::new(Fireworks::new(viewport, 2));
        let mut heart_frames = ManualScheduler::new();
        let mut firework_frames = ManualScheduler::new();
        let mut surface = RecordingSurface::new(viewport.x, viewport.y);

        hearts.start(&mut heart_frames);
        fireworks.start(&mut firework_frames);
        run_until(&mut hearts, &mut heart_frames, &mut surface, 0.0, 1000.0);

        // Only the background advanced
        assert!(hearts.frames() >= 59);
        assert_eq!(fireworks.frames(), 0);
        assert_eq!(hearts.scene().hearts().len(), 60);

        fireworks.stop(&mut firework_frames);
        assert_eq!(firework_frames.live_count(), 0);
        assert!(hearts.is_running());
    }

    #[test]
    fn test_solved_puzzle_starts_cascade_that_ends() {
        let mut puzzle = HeartPuzzle::new();
        for id in puzzle::PUZZLE_SEQUENCE {
            puzzle.press(id, 1000.0);
        }
        let message = puzzle.poll(1500.0);
        assert!(message.is_some());

        let viewport = Vec2::new(800.0, 600.0);
        let mut scheduler = ManualScheduler::new();
        let mut surface = RecordingSurface::new(viewport.x, viewport.y);
        let mut cascade = RenderLoop::new(Cascade::new(viewport, 3));
        cascade.start(&mut scheduler);
        run_until(&mut cascade, &mut scheduler, &mut surface, 1500.0, 12_000.0);

        assert!(!cascade.is_running());
        assert_eq!(scheduler.live_count(), 0);
        assert_eq!(cascade.scene().released(), 50);
        assert!(cascade.scene().glyphs().is_empty());
    }
}
