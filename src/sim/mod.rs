//! Deterministic scene simulation
//!
//! All animation logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (construction-time placement)
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{FloatingShape, Ripple, SceneState, ShapeKind};
pub use tick::{pointer_down, pointer_move, tick};
