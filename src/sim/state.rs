//! Scene state and entity types
//!
//! Everything needed to reproduce a scene deterministically lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::lerp;

/// Geometric variant of a floating shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Square,
}

/// A long-lived drifting shape, created once at scene start
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatingShape {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Current angle (radians)
    pub rotation: f32,
    /// Angular velocity (radians per tick)
    pub spin: f32,
    pub kind: ShapeKind,
    /// Alpha the shape relaxes back to (0-255 scale)
    pub base_alpha: f32,
    /// Current alpha, pushed around by pointer interaction
    pub alpha: f32,
}

impl FloatingShape {
    /// Spawn a shape at a random interior position with gentle drift
    pub fn new(rng: &mut Pcg32) -> Self {
        let base_alpha = rng.random_range(SHAPE_MIN_ALPHA..SHAPE_MAX_ALPHA);
        Self {
            pos: Vec2::new(
                rng.random_range(100.0..CANVAS_WIDTH - 100.0),
                rng.random_range(100.0..CANVAS_HEIGHT - 100.0),
            ),
            vel: Vec2::new(
                rng.random_range(-SHAPE_MAX_DRIFT..SHAPE_MAX_DRIFT),
                rng.random_range(-SHAPE_MAX_DRIFT..SHAPE_MAX_DRIFT),
            ),
            size: rng.random_range(SHAPE_MIN_SIZE..SHAPE_MAX_SIZE),
            rotation: 0.0,
            spin: rng.random_range(-SHAPE_MAX_SPIN..SHAPE_MAX_SPIN),
            kind: if rng.random_bool(0.5) {
                ShapeKind::Circle
            } else {
                ShapeKind::Square
            },
            base_alpha,
            alpha: base_alpha,
        }
    }

    /// Advance by one tick: integrate, bounce, damp, relax alpha
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.rotation += self.spin;

        // Soft bounce at the margins (sign flip with energy loss)
        if self.pos.x < EDGE_MARGIN || self.pos.x > CANVAS_WIDTH - EDGE_MARGIN {
            self.vel.x *= -BOUNCE_DAMPING;
        }
        if self.pos.y < EDGE_MARGIN || self.pos.y > CANVAS_HEIGHT - EDGE_MARGIN {
            self.vel.y *= -BOUNCE_DAMPING;
        }

        self.vel *= FRICTION;

        self.alpha = lerp(self.alpha, self.base_alpha, ALPHA_RELAX_RATE);
    }

    /// Gentle pull toward the pointer, brightening up to a cap.
    ///
    /// A zero-length direction (pointer exactly on the center) is a zero force.
    pub fn attract(&mut self, target: Vec2) {
        let force = (target - self.pos).normalize_or_zero() * ATTRACT_FORCE;
        self.vel += force;
        self.alpha = (self.alpha + ATTRACT_ALPHA_STEP).min(ATTRACT_ALPHA_CAP);
    }

    /// Impulse push away from the pointer; alpha snaps to the flash value
    pub fn repel(&mut self, source: Vec2) {
        let force = (self.pos - source).normalize_or_zero() * REPEL_FORCE;
        self.vel += force;
        self.alpha = REPEL_ALPHA;
    }
}

/// A short-lived expanding ring spawned on click
///
/// Lifecycle: `Pending (delay > 0)` -> `Active (started, life draining)` -> `Expired`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ripple {
    pub pos: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    /// Remaining life on a 0-255 scale; drives stroke opacity
    pub life: f32,
    /// Ticks until this ripple starts expanding
    pub delay: u32,
    pub started: bool,
}

impl Ripple {
    /// Create one ripple of a burst; `index` staggers the start delay
    pub fn new(pos: Vec2, index: u32) -> Self {
        Self {
            pos,
            radius: 0.0,
            max_radius: RIPPLE_MAX_RADIUS,
            life: RIPPLE_START_LIFE,
            delay: index * RIPPLE_DELAY_STRIDE,
            started: false,
        }
    }

    /// Advance by one tick: count down the delay, then expand and drain
    pub fn update(&mut self) {
        if self.delay > 0 {
            self.delay -= 1;
            return;
        }

        self.started = true;
        self.radius += RIPPLE_GROWTH;
        self.life -= RIPPLE_DECAY;

        // Hard cutoff once the ring outgrows its bound
        if self.radius > self.max_radius {
            self.life = 0.0;
        }
    }

    /// True once the ripple has run its course and can be reaped.
    ///
    /// A pending ripple is never expired, even though its radius is still zero.
    pub fn is_expired(&self) -> bool {
        self.life <= 0.0 && self.started
    }
}

/// Complete scene state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneState {
    /// Seed for reproducible shape placement
    pub seed: u64,
    /// Tick counter
    pub ticks: u64,
    /// Breathing clock, advanced by a fixed step per tick
    pub time: f32,
    /// Wall-clock seconds since scene start (drives the arming delay)
    pub elapsed_secs: f32,
    /// One-shot flag: the title easing has been armed
    pub armed: bool,
    /// Title fade progress (0-255)
    pub text_alpha: f32,
    /// Title scale progress (0-1)
    pub text_scale: f32,
    /// Drifting shapes (fixed count, never destroyed)
    pub shapes: Vec<FloatingShape>,
    /// Live ripples, insertion order (transient, not snapshotted)
    #[serde(skip)]
    pub ripples: Vec<Ripple>,
}

impl SceneState {
    /// Create a scene with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let shapes = (0..SHAPE_COUNT).map(|_| FloatingShape::new(&mut rng)).collect();

        Self {
            seed,
            ticks: 0,
            time: 0.0,
            elapsed_secs: 0.0,
            armed: false,
            text_alpha: 0.0,
            text_scale: 0.0,
            shapes,
            ripples: Vec::new(),
        }
    }

    /// Spawn a burst of ripples at `pos`, each delayed a stride longer than the last
    pub fn spawn_burst(&mut self, pos: Vec2) {
        for i in 0..RIPPLES_PER_BURST {
            self.ripples.push(Ripple::new(pos, i as u32));
        }
    }
}
