//! Time update functions.
//!
//! Update the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per tick, before the animation schedule runs.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance elapsed time by `dt` scaled with `time_scale`.
///
/// `dt` is expected to be the unscaled frame delta in seconds. Negative or
/// non-finite deltas count as zero.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
}

/// Set the clock from host-supplied values.
///
/// A non-finite `elapsed` keeps the previous value. `delta` is stored as
/// given; consumers treat zero, negative and non-finite deltas as "no time
/// passed".
pub fn set_world_time(world: &mut World, elapsed: f32, delta: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    if elapsed.is_finite() {
        wt.elapsed = elapsed;
    }
    wt.delta = delta;
}
