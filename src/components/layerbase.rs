use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Blended rotation of a node whose drawn rotation carries an extra layer on
/// top, such as the fluttering ears.
///
/// The pose blender moves this value; the node's
/// [`Rotation`](crate::components::rotation::Rotation) is rebuilt from it
/// plus the layer every tick, so the layer is never smoothed.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct LayerBase {
    pub rotation: Vec3,
}
