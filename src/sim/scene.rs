//! The contract every animated scene implements

use glam::Vec2;

use crate::renderer::Surface;

/// One independently startable animated visual context
pub trait Scene {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Reset owned collections to their initial population
    fn start(&mut self);

    /// Advance every member by one frame step.
    ///
    /// The step is implicit (one display refresh); `now_ms` only drives
    /// delayed cues.
    fn update(&mut self, now_ms: f64);

    /// Render every live member in collection order
    fn draw(&self, surface: &mut impl Surface);

    /// Adopt new surface dimensions
    fn resize(&mut self, size: Vec2) {
        let _ = size;
    }

    /// A finished scene lets its render loop lapse
    fn is_finished(&self) -> bool {
        false
    }
}
