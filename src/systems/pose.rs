//! Pose evaluation and per-node blending.
//!
//! 1. [`evaluate_pose_system`] samples the active action's profile at the
//!    current time into [`ActivePose`].
//! 2. [`pose_blend_system`] merges the gaze layer into that pose (head and
//!    pupils) and moves every node towards its merged target with the
//!    node's own decay base. Ear flutter is added after blending, on top of
//!    the blended [`LayerBase`], so smoothing never damps it.
//!
//! The root and the prop are driven by their own systems and skipped here.

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::blendrate::BlendRate;
use crate::components::layerbase::LayerBase;
use crate::components::position::Position;
use crate::components::resttransform::RestTransform;
use crate::components::rignode::{NodeId, RigNode};
use crate::components::rotation::Rotation;
use crate::pose::{Pose, evaluate_pose};
use crate::resources::action::CurrentAction;
use crate::resources::activepose::ActivePose;
use crate::resources::gaze::GazeState;
use crate::resources::secondary::SecondaryMotion;
use crate::resources::worldtime::WorldTime;
use crate::systems::blend::blend_toward;

/// Targets of one node after layering.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeTargets {
    pub rotation: Option<Vec3>,
    pub position: Option<Vec3>,
    /// Rotation added after blending.
    pub overlay: Vec3,
}

/// Merge the pose's targets for `id` with the secondary layers.
///
/// Gaze adds onto the pose's value when it has one and onto the rest value
/// otherwise, so it keeps running in every action. Ear flutter goes to
/// `overlay` instead of the target.
pub fn layered_targets(
    id: NodeId,
    rest: &RestTransform,
    pose: &Pose,
    secondary: &SecondaryMotion,
    gaze: &GazeState,
) -> NodeTargets {
    let mut rotation = pose.rotation(id);
    let mut position = pose.position(id);
    let mut overlay = Vec3::ZERO;

    match id {
        NodeId::EarLeft => overlay = Vec3::Z * secondary.ear_left,
        NodeId::EarRight => overlay = Vec3::Z * secondary.ear_right,
        NodeId::Head => {
            rotation = Some(rotation.unwrap_or(rest.rotation) + gaze.head_offset);
        }
        NodeId::PupilLeft | NodeId::PupilRight => {
            position = Some(position.unwrap_or(rest.position) + gaze.pupil_offset);
        }
        _ => {}
    }

    NodeTargets {
        rotation,
        position,
        overlay,
    }
}

pub fn evaluate_pose_system(
    time: Res<WorldTime>,
    action: Res<CurrentAction>,
    mut active: ResMut<ActivePose>,
) {
    active.0 = evaluate_pose(action.get(), time.elapsed);
}

pub fn pose_blend_system(
    time: Res<WorldTime>,
    active: Res<ActivePose>,
    secondary: Res<SecondaryMotion>,
    gaze: Res<GazeState>,
    mut query: Query<(
        &RigNode,
        &RestTransform,
        &BlendRate,
        &mut Position,
        &mut Rotation,
        Option<&mut LayerBase>,
    )>,
) {
    let dt = time.delta;
    for (node, rest, rate, mut position, mut rotation, base) in query.iter_mut() {
        if matches!(node.id, NodeId::Root | NodeId::Snack) {
            continue;
        }
        let targets = layered_targets(node.id, rest, &active.0, &secondary, &gaze);
        match base {
            Some(mut base) => {
                blend_toward(&mut base.rotation, targets.rotation, dt, rate.decay);
                rotation.radians = base.rotation + targets.overlay;
            }
            None => blend_toward(&mut rotation.radians, targets.rotation, dt, rate.decay),
        }
        blend_toward(&mut position.pos, targets.position, dt, rate.decay);
    }
}
