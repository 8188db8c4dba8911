//! Blink state machine data.
//!
//! The eyelid is either open (waiting for the next blink) or closing. Once
//! openness drops under the reopen threshold the closing flag clears and
//! openness eases back to 1 at a slower rate. The delay until the next
//! blink is re-rolled from a [`RandomSource`] each cycle, so tests can
//! inject a fixed sequence and replay exact blink timings.
//!
//! See [`crate::systems::blink`] for the update rules.

use bevy_ecs::prelude::Resource;

/// Source of uniformly distributed values in `[0, 1)`.
pub trait RandomSource: Send + Sync {
    fn next_f32(&mut self) -> f32;
}

impl RandomSource for fastrand::Rng {
    fn next_f32(&mut self) -> f32 {
        self.f32()
    }
}

/// Replays a fixed list of values, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f32>,
    index: usize,
}

impl SequenceSource {
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        Self {
            values: values.into(),
            index: 0,
        }
    }
}

impl RandomSource for SequenceSource {
    fn next_f32(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.index % self.values.len()];
        self.index = self.index.wrapping_add(1);
        v.clamp(0.0, 1.0)
    }
}

/// Blink timing and eyelid openness.
#[derive(Resource)]
pub struct BlinkState {
    /// 1.0 fully open, never below the configured floor.
    pub openness: f32,
    pub is_closing: bool,
    /// Seconds since the last blink started.
    pub since_last_event: f32,
    /// Seconds to wait, from the last blink start, before the next one.
    pub next_blink_delay: f32,
    /// Number of blinks started so far.
    pub blink_count: u64,
    rng: Box<dyn RandomSource>,
}

impl BlinkState {
    pub fn new(rng: Box<dyn RandomSource>, first_delay: f32) -> Self {
        Self {
            openness: 1.0,
            is_closing: false,
            since_last_event: 0.0,
            next_blink_delay: first_delay,
            blink_count: 0,
            rng,
        }
    }

    /// Draw a new delay uniformly from `[min, max]`.
    pub fn roll_delay(&mut self, min: f32, max: f32) -> f32 {
        let range = max - min;
        if range < f32::EPSILON {
            return min;
        }
        min + self.rng.next_f32() * range
    }
}

impl std::fmt::Debug for BlinkState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlinkState")
            .field("openness", &self.openness)
            .field("is_closing", &self.is_closing)
            .field("since_last_event", &self.since_last_event)
            .field("next_blink_delay", &self.next_blink_delay)
            .field("blink_count", &self.blink_count)
            .finish_non_exhaustive()
    }
}
