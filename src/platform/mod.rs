//! Platform abstraction layer
//!
//! Browser implementations of the rendering seams:
//! - `canvas`: Canvas 2D `Surface`
//! - `scheduler`: requestAnimationFrame `FrameScheduler`
//! - `runner`: a scene, its canvas and its frame chain bundled for event handlers
//! - `dom`: element lookup, timers and small DOM helpers
//!
//! Everything here is wasm32-only; natively the library exposes just the
//! simulation and the recording surface.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod runner;
#[cfg(target_arch = "wasm32")]
pub mod scheduler;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
#[cfg(target_arch = "wasm32")]
pub use runner::{SceneRunner, SharedRunner};
#[cfg(target_arch = "wasm32")]
pub use scheduler::RafScheduler;
