use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Local position of a rig node, relative to its parent.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub pos: Vec3,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vec3::new(x, y, z),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { pos: Vec3::ZERO }
    }
}
