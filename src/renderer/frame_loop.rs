//! Render loop driver
//!
//! A `RenderLoop` owns one scene and keeps at most one frame request alive
//! at a time: advance, draw, request the next frame. The host supplies a
//! `FrameScheduler` (requestAnimationFrame in the browser, `ManualScheduler`
//! in tests) and delivers each fired frame back through `on_frame`.

use super::surface::Surface;
use crate::sim::Scene;

/// Identifies one outstanding frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Host-side source of display-synchronized frames
pub trait FrameScheduler {
    /// Ask for one callback on the next display refresh.
    /// Returns `None` if the host refused the request.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    /// Withdraw an outstanding request
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Cancellable "update all, draw all, schedule next frame" cycle for one scene
#[derive(Debug)]
pub struct RenderLoop<S> {
    scene: S,
    pending: Option<FrameHandle>,
    frames: u64,
}

impl<S: Scene> RenderLoop<S> {
    pub fn new(scene: S) -> Self {
        Self {
            scene,
            pending: None,
            frames: 0,
        }
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    /// True while a frame request is outstanding
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Frames advanced since construction
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Reset the scene and begin the loop, cancelling any previous chain first
    pub fn start(&mut self, scheduler: &mut impl FrameScheduler) {
        self.stop(scheduler);
        self.scene.start();
        self.pending = scheduler.request_frame();
        log::debug!("{} loop started", self.scene.name());
    }

    /// Cancel the outstanding frame; nothing advances until `start` again
    pub fn stop(&mut self, scheduler: &mut impl FrameScheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
            log::debug!("{} loop stopped", self.scene.name());
        }
    }

    /// Deliver a fired frame. Returns false for stale handles, which are ignored.
    pub fn on_frame(
        &mut self,
        handle: FrameHandle,
        now_ms: f64,
        surface: &mut impl Surface,
        scheduler: &mut impl FrameScheduler,
    ) -> bool {
        if self.pending != Some(handle) {
            return false;
        }
        self.pending = None;

        self.scene.update(now_ms);
        self.scene.draw(surface);
        self.frames += 1;

        if self.scene.is_finished() {
            log::debug!("{} finished after {} frames", self.scene.name(), self.frames);
        } else {
            self.pending = scheduler.request_frame();
        }
        true
    }

    /// Draw the current state immediately, outside the frame cadence
    pub fn redraw(&self, surface: &mut impl Surface) {
        self.scene.draw(surface);
    }
}

/// Scheduler that only fires when told to, for single-stepping frames
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    live: Vec<FrameHandle>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that are outstanding (requested, not cancelled, not fired)
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Fire every outstanding request, as one display refresh would
    pub fn take_due(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.live)
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.live.push(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.live.retain(|h| *h != handle);
    }
}

/// Advance `render_loop` by one display refresh of `scheduler`
pub fn step<S: Scene>(
    render_loop: &mut RenderLoop<S>,
    scheduler: &mut ManualScheduler,
    surface: &mut impl Surface,
    now_ms: f64,
) -> usize {
    let mut advanced = 0;
    for handle in scheduler.take_due() {
        if render_loop.on_frame(handle, now_ms, surface, scheduler) {
            advanced += 1;
        }
    }
    advanced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recorder::RecordingSurface;
    use glam::Vec2;

    #[derive(Debug, Default)]
    struct Counter {
        starts: u32,
        updates: u32,
        draws: std::cell::Cell<u32>,
        limit: Option<u32>,
    }

    impl Scene for Counter {
        fn name(&self) -> &'static str {
            "counter"
        }

        fn start(&mut self) {
            self.starts += 1;
            self.updates = 0;
        }

        fn update(&mut self, _now_ms: f64) {
            self.updates += 1;
        }

        fn draw(&self, _surface: &mut impl Surface) {
            self.draws.set(self.draws.get() + 1);
        }

        fn resize(&mut self, _size: Vec2) {}

        fn is_finished(&self) -> bool {
            self.limit.is_some_and(|l| self.updates >= l)
        }
    }

    #[test]
    fn test_single_step_advances_once() {
        let mut sched = ManualScheduler::new();
        let mut surface = RecordingSurface::new(10.0, 10.0);
        let mut lp = RenderLoop::new(Counter::default());

        lp.start(&mut sched);
        assert!(lp.is_running());
        assert_eq!(step(&mut lp, &mut sched, &mut surface, 16.0), 1);
        assert_eq!(step(&mut lp, &mut sched, &mut surface, 32.0), 1);
        assert_eq!(lp.scene().updates, 2);
        assert_eq!(lp.scene().draws.get(), 2);
        assert_eq!(sched.live_count(), 1);
    }

    #[test]
    fn test_stop_start_never_doubles_chain() {
        let mut sched = ManualScheduler::new();
        let mut surface = RecordingSurface::new(10.0, 10.0);
        let mut lp = RenderLoop::new(Counter::default());

        lp.start(&mut sched);
        lp.start(&mut sched);
        assert_eq!(sched.live_count(), 1);

        lp.stop(&mut sched);
        lp.start(&mut sched);
        lp.stop(&mut sched);
        lp.start(&mut sched);
        assert_eq!(sched.live_count(), 1);

        for t in 0..10 {
            step(&mut lp, &mut sched, &mut surface, t as f64 * 16.0);
            assert!(sched.live_count() <= 1);
        }
        assert_eq!(lp.scene().updates, 10);
        assert_eq!(lp.scene().starts, 4);
    }

    #[test]
    fn test_stopped_loop_ignores_stale_frame() {
        let mut sched = ManualScheduler::new();
        let mut surface = RecordingSurface::new(10.0, 10.0);
        let mut lp = RenderLoop::new(Counter::default());

        lp.start(&mut sched);
        let fired = sched.take_due();
        lp.stop(&mut sched);
        assert!(!lp.on_frame(fired[0], 16.0, &mut surface, &mut sched));
        assert_eq!(lp.scene().updates, 0);
        assert!(!lp.is_running());
    }

    #[test]
    fn test_finished_scene_stops_itself() {
        let mut sched = ManualScheduler::new();
        let mut surface = RecordingSurface::new(10.0, 10.0);
        let mut lp = RenderLoop::new(Counter {
            limit: Some(3),
            ..Default::default()
        });

        lp.start(&mut sched);
        for t in 0..5 {
            step(&mut lp, &mut sched, &mut surface, t as f64);
        }
        assert_eq!(lp.scene().updates, 3);
        assert!(!lp.is_running());
        assert_eq!(sched.live_count(), 0);
    }

    #[test]
    fn test_redraw_skips_update() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        let lp = RenderLoop::new(Counter::default());
        lp.redraw(&mut surface);
        assert_eq!(lp.scene().updates, 0);
        assert_eq!(lp.scene().draws.get(), 1);
    }
}
