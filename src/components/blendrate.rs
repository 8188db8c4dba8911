//! Per-node smoothing rate.
//!
//! Body parts are grouped by how heavy their motion should feel. Limbs react
//! quickly, the head a bit slower, and the whole-body root slowest of all.
//! The decay base of each group comes from
//! [`AnimatorConfig`](crate::resources::animatorconfig::AnimatorConfig).

use bevy_ecs::prelude::Component;

use crate::components::rignode::NodeId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendGroup {
    /// Arms, paws, legs, feet, tail, ears, pupils and the prop.
    Limb,
    /// Torso and head.
    Head,
    /// Whole-body root offset.
    Root,
}

impl BlendGroup {
    pub fn for_node(id: NodeId) -> Self {
        match id {
            NodeId::Root => BlendGroup::Root,
            NodeId::Torso | NodeId::Head => BlendGroup::Head,
            _ => BlendGroup::Limb,
        }
    }
}

/// Decay base used by the pose blender for this node.
///
/// The fraction of remaining distance kept after one 60 Hz frame; smaller
/// values converge faster.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct BlendRate {
    pub decay: f32,
}

impl BlendRate {
    pub fn new(decay: f32) -> Self {
        Self { decay }
    }
}
