//! Blink state machine.
//!
//! # States
//!
//! - **Open** – openness eases back towards 1 at the slow `open_decay`
//!   rate. When `since_last_event` reaches `next_blink_delay` the lid starts
//!   closing, the timer resets and a new delay is drawn.
//! - **Closing** – openness heads towards `floor` at the fast `close_decay`
//!   rate. Once it drops under `reopen_threshold` the lid is open again and
//!   reopens on the following ticks.
//!
//! Both rates use the pose blender's frame-rate independent factor, and the
//! result is clamped to `[0, 1]`.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::eyelid::Eyelid;
use crate::components::resttransform::RestTransform;
use crate::components::scale::Scale;
use crate::resources::animatorconfig::AnimatorConfig;
use crate::resources::blink::BlinkState;
use crate::resources::worldtime::WorldTime;
use crate::systems::blend::{blend_factor, lerp_f32};

/// Advance the blink state machine by `dt` seconds.
pub fn advance_blink(state: &mut BlinkState, dt: f32, config: &AnimatorConfig) {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    state.since_last_event += dt;

    if state.is_closing {
        let factor = blend_factor(dt, config.blink_close_decay);
        state.openness = lerp_f32(state.openness, config.blink_floor, factor);
        if state.openness < config.blink_reopen_threshold {
            state.is_closing = false;
        }
    } else {
        let factor = blend_factor(dt, config.blink_open_decay);
        state.openness = lerp_f32(state.openness, 1.0, factor);
        if state.since_last_event >= state.next_blink_delay {
            state.is_closing = true;
            state.since_last_event = 0.0;
            state.next_blink_delay =
                state.roll_delay(config.blink_min_delay, config.blink_max_delay);
            state.blink_count += 1;
            debug!(
                "Blink #{} started, next in {:.2}s",
                state.blink_count, state.next_blink_delay
            );
        }
    }

    state.openness = if state.openness.is_finite() {
        state.openness.clamp(0.0, 1.0)
    } else {
        1.0
    };
}

/// Advance the blink cycle and apply the openness to every eye's height.
pub fn blink_system(
    time: Res<WorldTime>,
    config: Res<AnimatorConfig>,
    mut blink: ResMut<BlinkState>,
    mut eyes: Query<(&RestTransform, &mut Scale), With<Eyelid>>,
) {
    advance_blink(&mut blink, time.delta, &config);
    let openness = blink.openness;
    for (rest, mut scale) in eyes.iter_mut() {
        scale.scale.x = rest.scale.x;
        scale.scale.y = rest.scale.y * openness;
        scale.scale.z = rest.scale.z;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::blink::SequenceSource;

    fn state_with(values: Vec<f32>, first_delay: f32) -> BlinkState {
        BlinkState::new(Box::new(SequenceSource::new(values)), first_delay)
    }

    #[test]
    fn test_stays_open_before_delay() {
        let config = AnimatorConfig::new();
        let mut state = state_with(vec![0.5], 3.0);
        for _ in 0..100 {
            advance_blink(&mut state, 0.016, &config);
        }
        assert!(!state.is_closing);
        assert_eq!(state.openness, 1.0);
        assert_eq!(state.blink_count, 0);
    }

    #[test]
    fn test_full_cycle() {
        let config = AnimatorConfig::new();
        let mut state = state_with(vec![0.5], 0.1);
        let mut ticks = 0;
        while !state.is_closing {
            advance_blink(&mut state, 0.016, &config);
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(state.blink_count, 1);
        assert_eq!(state.since_last_event, 0.0);
        // 0.5 drawn from [2, 6]
        assert!((state.next_blink_delay - 4.0).abs() < 1e-6);

        let mut min_openness: f32 = 1.0;
        while state.is_closing {
            advance_blink(&mut state, 0.016, &config);
            min_openness = min_openness.min(state.openness);
            ticks += 1;
            assert!(ticks < 200, "eyelid never reopened");
        }
        assert!(min_openness < config.blink_reopen_threshold);
        assert!(min_openness >= config.blink_floor);

        for _ in 0..120 {
            advance_blink(&mut state, 0.016, &config);
        }
        assert!(state.openness > 0.99);
        assert!(!state.is_closing);
    }

    #[test]
    fn test_zero_dt_changes_nothing() {
        let config = AnimatorConfig::new();
        let mut state = state_with(vec![0.5], 3.0);
        state.openness = 0.6;
        advance_blink(&mut state, 0.0, &config);
        advance_blink(&mut state, -0.5, &config);
        advance_blink(&mut state, f32::NAN, &config);
        assert_eq!(state.openness, 0.6);
        assert_eq!(state.since_last_event, 0.0);
    }

    #[test]
    fn test_replayable_with_seed() {
        let config = AnimatorConfig::new();
        let mut a = BlinkState::new(Box::new(fastrand::Rng::with_seed(11)), 2.0);
        let mut b = BlinkState::new(Box::new(fastrand::Rng::with_seed(11)), 2.0);
        for _ in 0..3000 {
            advance_blink(&mut a, 0.016, &config);
            advance_blink(&mut b, 0.016, &config);
            assert_eq!(a.openness, b.openness);
            assert_eq!(a.next_blink_delay, b.next_blink_delay);
        }
        assert!(a.blink_count > 0);
    }

    #[test]
    fn test_openness_bounded_over_long_random_run() {
        let config = AnimatorConfig::new();
        let mut state = BlinkState::new(Box::new(fastrand::Rng::with_seed(3)), 2.0);
        let mut rng = fastrand::Rng::with_seed(1234);
        for _ in 0..10_000 {
            let dt = 0.01 + rng.f32() * 0.04;
            advance_blink(&mut state, dt, &config);
            assert!((0.0..=1.0).contains(&state.openness));
            assert!(
                (config.blink_min_delay..=config.blink_max_delay).contains(&state.next_blink_delay)
                    || state.blink_count == 0
            );
        }
        assert!(state.blink_count > 10);
    }
}
