//! requestAnimationFrame-backed frame scheduler

use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::renderer::{FrameHandle, FrameScheduler};

/// Callback invoked with the fired handle and the frame timestamp (ms)
pub type FrameCallback = Rc<dyn Fn(FrameHandle, f64)>;

pub struct RafScheduler {
    window: Window,
    on_frame: FrameCallback,
    next_id: u64,
    /// Outstanding requests and their browser ids
    outstanding: Vec<(FrameHandle, i32)>,
}

impl RafScheduler {
    pub fn new(window: Window, on_frame: FrameCallback) -> Self {
        Self {
            window,
            on_frame,
            next_id: 0,
            outstanding: Vec::new(),
        }
    }

    /// Drop bookkeeping for a request the browser has just fired
    pub fn fired(&mut self, handle: FrameHandle) {
        self.outstanding.retain(|(h, _)| *h != handle);
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        let on_frame = self.on_frame.clone();
        let callback = Closure::once_into_js(move |time: f64| on_frame(handle, time));

        match self
            .window
            .request_animation_frame(callback.unchecked_ref())
        {
            Ok(id) => {
                self.outstanding.push((handle, id));
                Some(handle)
            }
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(pos) = self.outstanding.iter().position(|(h, _)| *h == handle) {
            let (_, id) = self.outstanding.swap_remove(pos);
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}
