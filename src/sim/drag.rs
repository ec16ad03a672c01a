//! Drag-to-rotate input adapter
//!
//! Turns horizontal pointer/touch drags into changes of a continuous angle.
//! There is no inertia: the angle stops changing the moment the drag ends.

use crate::consts::DRAG_SENSITIVITY;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRotate {
    sensitivity: f32,
    /// Last recorded x while dragging
    last_x: Option<f32>,
}

impl Default for DragRotate {
    fn default() -> Self {
        Self::new(DRAG_SENSITIVITY)
    }
}

impl DragRotate {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            last_x: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.last_x.is_some()
    }

    /// Pointer/touch down at `x`
    pub fn press(&mut self, x: f32) {
        self.last_x = Some(x);
    }

    /// Pointer/touch moved to `x`. While dragging, returns the angle change
    /// to apply (`-delta * sensitivity`) and records `x`; otherwise `None`.
    pub fn drag_to(&mut self, x: f32) -> Option<f32> {
        let last = self.last_x?;
        self.last_x = Some(x);
        Some(-(x - last) * self.sensitivity)
    }

    /// Pointer/touch up or pointer left the surface
    pub fn release(&mut self) {
        self.last_x = None;
    }
}
