//! Root transform controller.
//!
//! Blends the whole-body offset and yaw towards the active action's
//! [`RootTarget`] with the slow root decay base, then writes the root node:
//! rest transform, plus the blended offset, plus the breathing lift.
//!
//! If the rig has no root node the blended state still advances, so the
//! body does not jump when a host re-adds it.

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::debug;

use crate::components::blendrate::BlendGroup;
use crate::components::position::Position;
use crate::components::resttransform::RestTransform;
use crate::components::rignode::NodeId;
use crate::components::rotation::Rotation;
use crate::pose::{PoseProfile, RootTarget};
use crate::resources::action::{Action, CurrentAction};
use crate::resources::animatorconfig::AnimatorConfig;
use crate::resources::rig::RigRegistry;
use crate::resources::rootmotion::RootMotionState;
use crate::resources::secondary::SecondaryMotion;
use crate::resources::worldtime::WorldTime;
use crate::systems::blend::{blend_scalar, blend_toward};

/// Whole-body target of `action` at time `t`.
pub fn compute_root_target(action: Action, t: f32) -> RootTarget {
    PoseProfile::from(action).root_target(t)
}

/// Blend `state` one tick towards `target`.
pub fn blend_root(state: &mut RootMotionState, target: RootTarget, dt: f32, decay: f32) {
    blend_toward(&mut state.offset, Some(target.offset), dt, decay);
    blend_scalar(&mut state.yaw, target.yaw, dt, decay);
}

pub fn root_motion_system(
    time: Res<WorldTime>,
    action: Res<CurrentAction>,
    config: Res<AnimatorConfig>,
    secondary: Res<SecondaryMotion>,
    registry: Res<RigRegistry>,
    mut state: ResMut<RootMotionState>,
    mut query: Query<(&RestTransform, &mut Position, &mut Rotation)>,
) {
    let target = compute_root_target(action.get(), time.elapsed);
    blend_root(
        &mut state,
        target,
        time.delta,
        config.decay_for(BlendGroup::Root),
    );

    let Some(entity) = registry.get_node(NodeId::Root) else {
        debug!("Rig has no root node, skipping root transform");
        return;
    };
    let Ok((rest, mut position, mut rotation)) = query.get_mut(entity) else {
        debug!("Root entity {:?} is gone, skipping root transform", entity);
        return;
    };
    position.pos = rest.position + state.offset + Vec3::Y * secondary.breathing;
    rotation.radians = rest.rotation + Vec3::Y * state.yaw;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::profile::{DANCE_YAW_AMPLITUDE, SIT_DOWN_ROOT_DROP};

    #[test]
    fn test_root_settles_for_sit_down() {
        let mut state = RootMotionState {
            offset: Vec3::new(0.2, 0.0, -0.1),
            yaw: 0.3,
        };
        for i in 0..600 {
            let t = i as f32 * 0.016;
            blend_root(&mut state, compute_root_target(Action::SitDown, t), 0.016, 0.95);
        }
        assert!((state.offset - Vec3::new(0.0, SIT_DOWN_ROOT_DROP, 0.0)).length() < 1e-3);
        assert!(state.yaw.abs() < 1e-3);
    }

    #[test]
    fn test_root_returns_home_for_idle() {
        let mut state = RootMotionState {
            offset: Vec3::new(0.0, -0.3, 0.0),
            yaw: -0.2,
        };
        for _ in 0..600 {
            blend_root(&mut state, compute_root_target(Action::Idle, 0.0), 0.016, 0.95);
        }
        assert!(state.offset.length() < 1e-3);
        assert!(state.yaw.abs() < 1e-3);
    }

    #[test]
    fn test_dance_yaw_bounded() {
        let mut state = RootMotionState::default();
        for i in 0..2000 {
            let t = i as f32 * 0.016;
            blend_root(&mut state, compute_root_target(Action::Dance, t), 0.016, 0.95);
            assert!(state.yaw.abs() <= DANCE_YAW_AMPLITUDE);
        }
    }

    #[test]
    fn test_root_is_slower_than_limbs() {
        let config = AnimatorConfig::new();
        let mut root = RootMotionState::default();
        let mut limb = Vec3::ZERO;
        let target = RootTarget {
            offset: Vec3::ONE,
            yaw: 1.0,
        };
        blend_root(&mut root, target, 0.1, config.decay_for(BlendGroup::Root));
        blend_toward(&mut limb, Some(Vec3::ONE), 0.1, config.decay_for(BlendGroup::Limb));
        assert!(root.offset.x < limb.x);
    }
}
