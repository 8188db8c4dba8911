//! Target poses.
//!
//! A [`Pose`] is a sparse set of target transforms for some rig nodes,
//! produced fresh for an `(action, time)` pair. Nodes it does not mention are
//! left where they are by the blender. Poses are built once from a profile's
//! tables and are read-only afterwards.
//!
//! # Related
//!
//! - [`profile`] – per-action baselines and motion tables
//! - [`crate::systems::blend`] – moves nodes towards a pose

pub mod profile;

use glam::Vec3;
use smallvec::SmallVec;

use crate::components::motion::{Channel, MotionDescriptor};
use crate::components::rignode::NodeId;
use crate::resources::action::Action;

pub use profile::{PoseProfile, RootTarget};

/// Target channels for one node. A `None` channel is left untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseTarget {
    pub node: NodeId,
    pub rotation: Option<Vec3>,
    pub position: Option<Vec3>,
}

impl PoseTarget {
    fn empty(node: NodeId) -> Self {
        Self {
            node,
            rotation: None,
            position: None,
        }
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut Option<Vec3> {
        match channel {
            Channel::Rotation => &mut self.rotation,
            Channel::Position => &mut self.position,
        }
    }
}

/// Fixed value of one node channel, before periodic motion is added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineEntry {
    pub node: NodeId,
    pub channel: Channel,
    pub value: Vec3,
}

impl BaselineEntry {
    pub const fn rotation(node: NodeId, x: f32, y: f32, z: f32) -> Self {
        Self {
            node,
            channel: Channel::Rotation,
            value: Vec3::new(x, y, z),
        }
    }

    pub const fn position(node: NodeId, x: f32, y: f32, z: f32) -> Self {
        Self {
            node,
            channel: Channel::Position,
            value: Vec3::new(x, y, z),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pose {
    targets: SmallVec<[PoseTarget; 20]>,
}

impl Pose {
    /// Build a pose from a baseline table plus periodic motion sampled at `t`.
    ///
    /// Motion on a channel the baseline does not set starts from zero.
    pub fn from_tables(baseline: &[BaselineEntry], motion: &[MotionDescriptor], t: f32) -> Self {
        let mut pose = Pose::default();
        for entry in baseline {
            *pose.target_mut(entry.node).channel_mut(entry.channel) = Some(entry.value);
        }
        for d in motion {
            let slot = pose.target_mut(d.node).channel_mut(d.channel);
            *slot = Some(slot.unwrap_or(Vec3::ZERO) + d.offset(t));
        }
        pose
    }

    fn target_mut(&mut self, node: NodeId) -> &mut PoseTarget {
        let idx = match self.targets.iter().position(|t| t.node == node) {
            Some(idx) => idx,
            None => {
                self.targets.push(PoseTarget::empty(node));
                self.targets.len() - 1
            }
        };
        &mut self.targets[idx]
    }

    /// Targets for `node`, if this pose addresses it.
    pub fn get(&self, node: NodeId) -> Option<&PoseTarget> {
        self.targets.iter().find(|t| t.node == node)
    }

    pub fn rotation(&self, node: NodeId) -> Option<Vec3> {
        self.get(node).and_then(|t| t.rotation)
    }

    pub fn position(&self, node: NodeId) -> Option<Vec3> {
        self.get(node).and_then(|t| t.position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PoseTarget> {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Target pose of `action` at time `t`. Pure and deterministic.
pub fn evaluate_pose(action: Action, t: f32) -> Pose {
    PoseProfile::from(action).evaluate(t)
}
