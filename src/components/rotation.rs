use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Local rotation as XYZ Euler angles in radians.
#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Rotation {
    pub radians: Vec3,
}

impl Rotation {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            radians: Vec3::new(x, y, z),
        }
    }
}
