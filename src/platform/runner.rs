//! A scene bound to its canvas and its own requestAnimationFrame chain

use glam::Vec2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys::Window;

use super::canvas::CanvasSurface;
use super::scheduler::{FrameCallback, RafScheduler};
use crate::renderer::{FrameHandle, RenderLoop};
use crate::sim::Scene;

pub type SharedRunner<S> = Rc<RefCell<SceneRunner<S>>>;

pub struct SceneRunner<S> {
    render_loop: RenderLoop<S>,
    surface: CanvasSurface,
    scheduler: RafScheduler,
}

impl<S: Scene + 'static> SceneRunner<S> {
    pub fn new(scene: S, surface: CanvasSurface, window: Window) -> SharedRunner<S> {
        Rc::new_cyclic(|weak: &Weak<RefCell<Self>>| {
            let weak = weak.clone();
            let on_frame: FrameCallback = Rc::new(move |handle: FrameHandle, time: f64| {
                if let Some(runner) = weak.upgrade() {
                    runner.borrow_mut().frame(handle, time);
                }
            });
            RefCell::new(Self {
                render_loop: RenderLoop::new(scene),
                surface,
                scheduler: RafScheduler::new(window, on_frame),
            })
        })
    }

    fn frame(&mut self, handle: FrameHandle, time: f64) {
        self.scheduler.fired(handle);
        let Self {
            render_loop,
            surface,
            scheduler,
        } = self;
        render_loop.on_frame(handle, time, surface, scheduler);
    }

    /// Reset the scene and (re)start its loop
    pub fn start(&mut self) {
        self.render_loop.start(&mut self.scheduler);
        log::info!("{} scene started", self.render_loop.scene().name());
    }

    pub fn stop(&mut self) {
        if self.render_loop.is_running() {
            self.render_loop.stop(&mut self.scheduler);
            log::info!("{} scene stopped", self.render_loop.scene().name());
        }
    }

    pub fn is_running(&self) -> bool {
        self.render_loop.is_running()
    }

    /// Draw now, without waiting for the next frame
    pub fn redraw(&mut self) {
        self.render_loop.redraw(&mut self.surface);
    }

    pub fn scene(&self) -> &S {
        self.render_loop.scene()
    }

    pub fn scene_mut(&mut self) -> &mut S {
        self.render_loop.scene_mut()
    }

    pub fn surface(&self) -> &CanvasSurface {
        &self.surface
    }

    /// Resize the canvas backing store and tell the scene
    pub fn resize(&mut self, size: Vec2) {
        self.surface.set_size(size);
        self.render_loop.scene_mut().resize(size);
    }
}
