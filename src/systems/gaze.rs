//! Gaze controller.
//!
//! One exponential smoothing step per tick with a fixed factor. Unlike the
//! pose blender this is not compensated for frame time; pointer motion is
//! slow enough that the difference is not visible.

use bevy_ecs::prelude::*;
use glam::{Vec2, Vec3};

use crate::resources::animatorconfig::AnimatorConfig;
use crate::resources::gaze::{GazeState, PointerInput};

/// One smoothing step from `previous` towards `raw`.
///
/// `smoothing` is clamped to `[0, 1]`, so the result never overshoots the
/// raw value. Non-finite raw input holds the previous value.
pub fn update_gaze(raw: Vec2, previous: Vec2, smoothing: f32) -> Vec2 {
    if !raw.is_finite() {
        return previous;
    }
    let k = if smoothing.is_finite() {
        smoothing.clamp(0.0, 1.0)
    } else {
        0.0
    };
    previous + (raw - previous) * k
}

/// Head rotation offset for a smoothed pointer: yaw and a little roll from X.
pub fn head_offset(smoothed: Vec2, config: &AnimatorConfig) -> Vec3 {
    Vec3::new(
        0.0,
        smoothed.x * config.head_yaw_gain,
        -smoothed.x * config.head_roll_gain,
    )
}

/// Pupil position offset shared by both eyes: horizontal from X, vertical
/// from Y, and a small backwards nudge as the gaze leaves the horizon.
pub fn pupil_offset(smoothed: Vec2, config: &AnimatorConfig) -> Vec3 {
    Vec3::new(
        smoothed.x * config.pupil_x_gain,
        smoothed.y * config.pupil_y_gain,
        -smoothed.y.abs() * config.pupil_depth_gain,
    )
}

/// Smooth the pointer and refresh the derived head and pupil offsets.
pub fn update_gaze_system(
    pointer: Res<PointerInput>,
    config: Res<AnimatorConfig>,
    mut gaze: ResMut<GazeState>,
) {
    let smoothed = update_gaze(pointer.raw, gaze.smoothed, config.gaze_smoothing);
    gaze.smoothed = smoothed;
    gaze.head_offset = head_offset(smoothed, &config);
    gaze.pupil_offset = pupil_offset(smoothed, &config);
}
