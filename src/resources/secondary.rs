use bevy_ecs::prelude::Resource;

/// Always-on secondary motion offsets computed for the current tick.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct SecondaryMotion {
    /// Added to the root's vertical position after blending.
    pub breathing: f32,
    /// Added to the left ear's roll target.
    pub ear_left: f32,
    /// Added to the right ear's roll target.
    pub ear_right: f32,
}
