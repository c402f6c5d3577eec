//! Drift Canvas - a minimalist interactive canvas animation
//!
//! Core modules:
//! - `sim`: Deterministic scene simulation (drifting shapes, click ripples, title easing)
//! - `renderer`: Canvas2D rendering
//! - `settings`: User preferences persisted to LocalStorage

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Scene configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per nominal display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;
    /// Shapes bounce back when their center crosses this margin
    pub const EDGE_MARGIN: f32 = 50.0;

    /// Floating shape defaults
    pub const SHAPE_COUNT: usize = 6;
    pub const SHAPE_MIN_SIZE: f32 = 30.0;
    pub const SHAPE_MAX_SIZE: f32 = 80.0;
    pub const SHAPE_MAX_DRIFT: f32 = 0.5;
    pub const SHAPE_MAX_SPIN: f32 = 0.01;
    pub const SHAPE_MIN_ALPHA: f32 = 10.0;
    pub const SHAPE_MAX_ALPHA: f32 = 30.0;
    /// Velocity scale applied on edge bounce (sign flip with energy loss)
    pub const BOUNCE_DAMPING: f32 = 0.8;
    /// Per-tick velocity scale
    pub const FRICTION: f32 = 0.995;
    /// Exponential rate at which alpha relaxes back to its base value
    pub const ALPHA_RELAX_RATE: f32 = 0.05;

    /// Pointer interaction
    pub const ATTRACT_RADIUS: f32 = 100.0;
    pub const ATTRACT_FORCE: f32 = 0.01;
    pub const ATTRACT_ALPHA_STEP: f32 = 5.0;
    pub const ATTRACT_ALPHA_CAP: f32 = 60.0;
    pub const REPEL_RADIUS: f32 = 150.0;
    pub const REPEL_FORCE: f32 = 2.0;
    pub const REPEL_ALPHA: f32 = 80.0;

    /// Ripple defaults
    pub const RIPPLES_PER_BURST: usize = 8;
    /// Ticks of extra start delay per ripple within a burst
    pub const RIPPLE_DELAY_STRIDE: u32 = 5;
    pub const RIPPLE_MAX_RADIUS: f32 = 100.0;
    pub const RIPPLE_GROWTH: f32 = 2.0;
    pub const RIPPLE_START_LIFE: f32 = 255.0;
    pub const RIPPLE_DECAY: f32 = 4.0;
    /// Stroke alpha is remaining life scaled by this factor (0-255 scale)
    pub const RIPPLE_STROKE_ALPHA: f32 = 0.3;

    /// Title animation
    pub const BASE_TEXT_SIZE: f32 = 64.0;
    pub const SUBTITLE_SIZE: f32 = 16.0;
    pub const SUBTITLE_OFFSET: f32 = 50.0;
    pub const FADE_TARGET: f32 = 255.0;
    pub const FADE_RATE: f32 = 0.03;
    pub const SCALE_RATE: f32 = 0.04;
    /// Seconds from scene start until the title easing arms (one-shot)
    pub const ARM_DELAY_SECS: f32 = 0.5;
    /// Breathing kicks in once the fade has substantially completed
    pub const BREATHE_THRESHOLD: f32 = 200.0;
    pub const BREATHE_AMPLITUDE: f32 = 0.02;
    pub const BREATHE_FREQUENCY: f32 = 2.0;
    /// Breathing-clock increment per tick
    pub const TIME_STEP: f32 = 0.01;
}

/// Linear interpolation: `a` moved toward `b` by fraction `t`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Euclidean distance between two points
#[inline]
pub fn dist(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(4.0, 8.0, 0.5), 6.0);
    }

    #[test]
    fn test_dist() {
        let d = dist(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-6);
    }
}
