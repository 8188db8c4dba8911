use bevy_ecs::prelude::Resource;
use glam::Vec3;

/// Blended whole-body offset.
///
/// Kept apart from the root node's transform so the breathing offset can be
/// layered on top without feeding back into the blend.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct RootMotionState {
    pub offset: Vec3,
    pub yaw: f32,
}
