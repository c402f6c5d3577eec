//! Canvas2D rendering module
//!
//! Draws the scene with the browser's 2D context. The palette is
//! platform-independent; the renderer itself is wasm-only.

pub mod palette;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
