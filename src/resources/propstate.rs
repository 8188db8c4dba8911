use bevy_ecs::prelude::Resource;
use glam::Vec3;

/// Prop flags published for the renderer after each tick.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct PropState {
    pub visible: bool,
    /// Rotation applied to the prop while visible, zero otherwise.
    pub sway: Vec3,
}
