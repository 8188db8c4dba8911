//! Authored bind transform of a rig node.
//!
//! Captured once when the rig is spawned. Layers that add offsets to a node
//! the active pose does not address (gaze on the head, flutter on the ears)
//! start from these values instead of the node's current, already-blended
//! transform, so offsets never accumulate frame over frame.

use bevy_ecs::prelude::Component;
use glam::Vec3;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct RestTransform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl RestTransform {
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale: Vec3::ONE,
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for RestTransform {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO)
    }
}
