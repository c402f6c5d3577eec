//! Fixed timestep scene tick
//!
//! Advances the scene deterministically and translates pointer events into
//! entity forces and ripple bursts.

use glam::Vec2;

use super::state::SceneState;
use crate::consts::*;
use crate::{dist, lerp};

/// Advance the scene by one fixed timestep
pub fn tick(state: &mut SceneState, dt: f32) {
    state.ticks += 1;
    state.time += TIME_STEP;
    state.elapsed_secs += dt;

    // One-shot arming after the startup delay; an explicit elapsed-time check
    // rather than a host timer, so it stays unit-testable
    if !state.armed && state.elapsed_secs >= ARM_DELAY_SECS {
        state.armed = true;
        log::debug!("title easing armed at {:.3}s", state.elapsed_secs);
    }

    if state.armed {
        state.text_alpha = lerp(state.text_alpha, FADE_TARGET, FADE_RATE);
        state.text_scale = lerp(state.text_scale, 1.0, SCALE_RATE);
    }

    for shape in &mut state.shapes {
        shape.update();
    }

    for ripple in &mut state.ripples {
        ripple.update();
    }
    state.ripples.retain(|r| !r.is_expired());
}

/// Pointer hover: gently pull nearby shapes toward the pointer
pub fn pointer_move(state: &mut SceneState, pointer: Vec2) {
    for shape in &mut state.shapes {
        if dist(pointer, shape.pos) < ATTRACT_RADIUS {
            shape.attract(pointer);
        }
    }
}

/// Pointer press: spawn a ripple burst and shove nearby shapes away
pub fn pointer_down(state: &mut SceneState, pointer: Vec2) {
    state.spawn_burst(pointer);

    for shape in &mut state.shapes {
        if dist(pointer, shape.pos) < REPEL_RADIUS {
            shape.repel(pointer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Ripple;

    #[test]
    fn test_arming_is_a_one_shot_elapsed_check() {
        let mut state = SceneState::new(1);

        // Four ticks of 0.1s: still under the half-second delay
        for _ in 0..4 {
            tick(&mut state, 0.1);
        }
        assert!(!state.armed);
        assert_eq!(state.text_alpha, 0.0);
        assert_eq!(state.text_scale, 0.0);

        // Fifth tick crosses 0.5s
        tick(&mut state, 0.1);
        assert!(state.armed);

        // Stays armed forever
        for _ in 0..100 {
            tick(&mut state, 0.1);
        }
        assert!(state.armed);
    }

    #[test]
    fn test_title_easing_is_monotone() {
        let mut state = SceneState::new(1);
        state.armed = true;

        let mut prev_alpha = state.text_alpha;
        let mut prev_scale = state.text_scale;
        for _ in 0..200 {
            tick(&mut state, SIM_DT);
            assert!(state.text_alpha > prev_alpha);
            assert!(state.text_scale > prev_scale);
            assert!(state.text_alpha <= FADE_TARGET);
            assert!(state.text_scale <= 1.0);
            prev_alpha = state.text_alpha;
            prev_scale = state.text_scale;
        }
    }

    #[test]
    fn test_title_easing_converges() {
        let mut state = SceneState::new(1);
        state.armed = true;

        for _ in 0..1000 {
            tick(&mut state, SIM_DT);
        }
        assert!((state.text_alpha - FADE_TARGET).abs() < 0.01);
        assert!((state.text_scale - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_burst_radii_hold_their_stagger() {
        let mut state = SceneState::new(1);
        pointer_down(&mut state, Vec2::new(400.0, 300.0));
        assert_eq!(state.ripples.len(), RIPPLES_PER_BURST);

        // Run long enough that every ripple in the burst has started
        let warmup = RIPPLES_PER_BURST as u32 * RIPPLE_DELAY_STRIDE + 1;
        for _ in 0..warmup {
            tick(&mut state, SIM_DT);
        }

        for pair in state.ripples.windows(2) {
            let gap = pair[0].radius - pair[1].radius;
            assert_eq!(gap, RIPPLE_GROWTH * RIPPLE_DELAY_STRIDE as f32);
        }
    }

    #[test]
    fn test_expired_ripples_are_reaped_in_order() {
        let mut state = SceneState::new(1);
        pointer_down(&mut state, Vec2::new(200.0, 200.0));

        // By 51 ticks the delay-0 ripple has crossed its bound and is gone;
        // later ripples survive in their original relative order
        for _ in 0..51 {
            tick(&mut state, SIM_DT);
        }
        assert_eq!(state.ripples.len(), RIPPLES_PER_BURST - 1);
        for pair in state.ripples.windows(2) {
            assert!(pair[0].radius > pair[1].radius);
        }

        // Long enough for the whole burst to expire
        for _ in 0..100 {
            tick(&mut state, SIM_DT);
        }
        assert!(state.ripples.is_empty());
    }

    #[test]
    fn test_pointer_down_on_shape_center() {
        let mut state = SceneState::new(9);
        let center = state.shapes[0].pos;
        let vel_before = state.shapes[0].vel;

        pointer_down(&mut state, center);

        // Zero-distance repel: alpha flashes, but the force is zero
        let shape = &state.shapes[0];
        assert_eq!(shape.alpha, REPEL_ALPHA);
        assert_eq!(shape.vel, vel_before);
        assert!(shape.vel.is_finite());
    }

    #[test]
    fn test_pointer_move_only_reaches_nearby_shapes() {
        let mut state = SceneState::new(5);
        state.shapes[0].pos = Vec2::new(100.0, 100.0);
        state.shapes[0].vel = Vec2::ZERO;
        state.shapes[1].pos = Vec2::new(700.0, 500.0);
        state.shapes[1].vel = Vec2::ZERO;

        pointer_move(&mut state, Vec2::new(120.0, 100.0));

        assert!(state.shapes[0].vel.length() > 0.0);
        assert_eq!(state.shapes[1].vel, Vec2::ZERO);
    }

    #[test]
    fn test_determinism_across_identical_runs() {
        let mut a = SceneState::new(1234);
        let mut b = SceneState::new(1234);

        for i in 0..300u32 {
            if i == 10 {
                pointer_down(&mut a, Vec2::new(300.0, 200.0));
                pointer_down(&mut b, Vec2::new(300.0, 200.0));
            }
            if i % 7 == 0 {
                pointer_move(&mut a, Vec2::new(400.0, 300.0));
                pointer_move(&mut b, Vec2::new(400.0, 300.0));
            }
            tick(&mut a, SIM_DT);
            tick(&mut b, SIM_DT);
        }

        assert_eq!(a.ticks, b.ticks);
        assert_eq!(a.ripples.len(), b.ripples.len());
        for (sa, sb) in a.shapes.iter().zip(&b.shapes) {
            assert_eq!(sa.pos, sb.pos);
            assert_eq!(sa.vel, sb.vel);
        }
    }

    #[test]
    fn test_delayed_ripple_matches_shifted_immediate_one() {
        let mut immediate = Ripple::new(Vec2::ZERO, 0);
        let mut delayed = Ripple::new(Vec2::ZERO, 1);

        for _ in 0..RIPPLE_DELAY_STRIDE {
            delayed.update();
        }
        for _ in 0..30 {
            immediate.update();
            delayed.update();
            assert_eq!(immediate.radius, delayed.radius);
            assert_eq!(immediate.life, delayed.life);
            assert_eq!(immediate.is_expired(), delayed.is_expired());
        }
    }
}
