//! Pointer input and smoothed gaze.

use bevy_ecs::prelude::Resource;
use glam::{Vec2, Vec3};

/// Raw pointer position from the host, normalized to roughly `[-1, 1]`.
///
/// Values are not validated: anything finite is smoothed as-is.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerInput {
    pub raw: Vec2,
}

/// Exponentially smoothed pointer and the offsets derived from it.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct GazeState {
    pub smoothed: Vec2,
    /// Added to the head's rotation target (yaw and roll).
    pub head_offset: Vec3,
    /// Added to both pupils' position targets.
    pub pupil_offset: Vec3,
}
