//! Secondary motion synthesizer.
//!
//! Breathing and ear flutter run in every action. Both sit on top of the
//! blended result: breathing lifts the root, flutter rolls the ears. The right ear runs half a cycle behind the left, so the
//! ears alternate instead of mirroring each other.

use std::f32::consts::PI;

use bevy_ecs::prelude::*;

use crate::components::motion::{Axis, Channel, MotionDescriptor};
use crate::components::rignode::NodeId;
use crate::resources::secondary::SecondaryMotion;
use crate::resources::worldtime::WorldTime;

/// Angular frequency of the breathing cycle, in radians per second.
pub const BREATHING_FREQUENCY: f32 = 1.4;
pub const BREATHING_AMPLITUDE: f32 = 0.02;

pub const BREATHING: MotionDescriptor = MotionDescriptor::new(
    NodeId::Root,
    Channel::Position,
    Axis::Y,
    BREATHING_FREQUENCY,
    BREATHING_AMPLITUDE,
    0.0,
);

pub const EAR_FLUTTER: [MotionDescriptor; 2] = [
    MotionDescriptor::new(NodeId::EarLeft, Channel::Rotation, Axis::Z, 3.2, 0.06, 0.0),
    MotionDescriptor::new(NodeId::EarRight, Channel::Rotation, Axis::Z, 3.2, 0.06, PI),
];

/// Vertical breathing offset at time `t`.
pub fn compute_breathing(t: f32) -> f32 {
    BREATHING.sample(t)
}

/// Left and right ear roll offsets at time `t`.
pub fn compute_ear_flutter(t: f32) -> (f32, f32) {
    (EAR_FLUTTER[0].sample(t), EAR_FLUTTER[1].sample(t))
}

pub fn secondary_motion_system(time: Res<WorldTime>, mut secondary: ResMut<SecondaryMotion>) {
    let t = time.elapsed;
    let (ear_left, ear_right) = compute_ear_flutter(t);
    *secondary = SecondaryMotion {
        breathing: compute_breathing(t),
        ear_left,
        ear_right,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_breathing_peaks_at_quarter_period() {
        let quarter = PI / (2.0 * BREATHING_FREQUENCY);
        assert!((compute_breathing(quarter) - BREATHING_AMPLITUDE).abs() < EPSILON);
        assert!(compute_breathing(0.0).abs() < EPSILON);
    }

    #[test]
    fn test_breathing_bounded() {
        for i in 0..10_000 {
            assert!(compute_breathing(i as f32 * 0.007).abs() <= BREATHING_AMPLITUDE + EPSILON);
        }
    }

    #[test]
    fn test_ears_alternate() {
        for i in 0..200 {
            let (l, r) = compute_ear_flutter(i as f32 * 0.05);
            assert!((l + r).abs() < EPSILON);
        }
        let (l, _) = compute_ear_flutter(0.3);
        assert!(l.abs() > 0.0);
    }

    #[test]
    fn test_system_writes_offsets() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            elapsed: 1.0,
            ..Default::default()
        });
        world.insert_resource(SecondaryMotion::default());
        let mut schedule = Schedule::default();
        schedule.add_systems(secondary_motion_system);
        schedule.run(&mut world);

        let s = world.resource::<SecondaryMotion>();
        assert!((s.breathing - compute_breathing(1.0)).abs() < EPSILON);
        assert!((s.ear_left - compute_ear_flutter(1.0).0).abs() < EPSILON);
    }
}
