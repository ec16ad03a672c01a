//! Rendering module
//!
//! Scenes draw through the `Surface` trait; the `RenderLoop` drives them
//! once per display refresh.

pub mod color;
pub mod frame_loop;
pub mod recorder;
pub mod shapes;
pub mod surface;

pub use color::{Rgba, palette};
pub use frame_loop::{FrameHandle, FrameScheduler, ManualScheduler, RenderLoop};
pub use recorder::{DrawCommand, RecordingSurface};
pub use surface::{Stroke, Surface};
