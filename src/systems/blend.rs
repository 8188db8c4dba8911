//! Pose blending.
//!
//! Nodes move towards their targets by exponential smoothing with a
//! frame-rate independent factor:
//!
//! ```text
//! factor = 1 - decay ^ (dt * 60)
//! ```
//!
//! `decay` is the fraction of the remaining distance kept after one 60 Hz
//! frame. Ticking at 30, 60 or 120 Hz covers the same fraction of the
//! distance per second of wall-clock time.

use glam::Vec3;

/// Reference frame rate the decay bases are tuned for.
pub const REFERENCE_FPS: f32 = 60.0;

/// Convergence factor for one tick of `dt` seconds.
///
/// Zero, negative or non-finite `dt` gives 0, as does a decay base outside
/// `[0, 1]`. The result is always in `[0, 1]`.
pub fn blend_factor(dt: f32, decay: f32) -> f32 {
    if !(dt.is_finite() && dt > 0.0) || !(0.0..=1.0).contains(&decay) {
        return 0.0;
    }
    (1.0 - decay.powf(dt * REFERENCE_FPS)).clamp(0.0, 1.0)
}

/// Linearly interpolate between two floats.
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two vectors, per axis.
pub fn lerp_v3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    Vec3::new(
        lerp_f32(a.x, b.x, t),
        lerp_f32(a.y, b.y, t),
        lerp_f32(a.z, b.z, t),
    )
}

/// Move `current` one tick towards `target`.
///
/// A `None` target leaves `current` untouched. Non-finite targets are
/// ignored as well.
pub fn blend_toward(current: &mut Vec3, target: Option<Vec3>, dt: f32, decay: f32) {
    let Some(target) = target else {
        return;
    };
    if !target.is_finite() {
        return;
    }
    let factor = blend_factor(dt, decay);
    if factor <= 0.0 {
        return;
    }
    *current = lerp_v3(*current, target, factor);
}

/// Scalar counterpart of [`blend_toward`], used for the root yaw.
pub fn blend_scalar(current: &mut f32, target: f32, dt: f32, decay: f32) {
    if !target.is_finite() {
        return;
    }
    let factor = blend_factor(dt, decay);
    if factor <= 0.0 {
        return;
    }
    *current = lerp_f32(*current, target, factor);
}
