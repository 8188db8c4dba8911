//! Declarative periodic motion.
//!
//! A [`MotionDescriptor`] describes one sinusoidal signal on one axis of one
//! channel of one rig node:
//!
//! ```text
//! value(t) = amplitude * sin(frequency * t + phase)
//! ```
//!
//! Pose profiles and the secondary motion layer are built from static tables
//! of descriptors, so tuning an action is editing a table row rather than
//! code. Frequencies are angular (radians per second).

use glam::Vec3;

use crate::components::rignode::NodeId;

/// Which transform channel a descriptor drives.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Channel {
    Rotation,
    Position,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along this axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// One sinusoidal signal bound to a node channel axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionDescriptor {
    pub node: NodeId,
    pub channel: Channel,
    pub axis: Axis,
    /// Angular frequency in radians per second.
    pub frequency: f32,
    pub amplitude: f32,
    /// Phase offset in radians.
    pub phase: f32,
}

impl MotionDescriptor {
    pub const fn new(
        node: NodeId,
        channel: Channel,
        axis: Axis,
        frequency: f32,
        amplitude: f32,
        phase: f32,
    ) -> Self {
        Self {
            node,
            channel,
            axis,
            frequency,
            amplitude,
            phase,
        }
    }

    /// Scalar value of the signal at time `t`.
    pub fn sample(&self, t: f32) -> f32 {
        self.amplitude * (self.frequency * t + self.phase).sin()
    }

    /// Value at time `t` as a vector along the descriptor's axis.
    pub fn offset(&self, t: f32) -> Vec3 {
        self.axis.unit() * self.sample(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_sample_peaks_at_quarter_period() {
        let d = MotionDescriptor::new(NodeId::Tail, Channel::Rotation, Axis::Y, 2.0, 0.5, 0.0);
        assert!(approx_eq(d.sample(FRAC_PI_2 / 2.0), 0.5));
    }

    #[test]
    fn test_sample_is_bounded_by_amplitude() {
        let d = MotionDescriptor::new(NodeId::Tail, Channel::Rotation, Axis::Y, 3.7, 0.25, 1.3);
        for i in 0..1000 {
            let t = i as f32 * 0.013;
            assert!(d.sample(t).abs() <= 0.25 + EPSILON);
        }
    }

    #[test]
    fn test_phase_pi_is_opposite() {
        let a = MotionDescriptor::new(NodeId::EarLeft, Channel::Rotation, Axis::Z, 3.0, 0.1, 0.0);
        let b = MotionDescriptor::new(NodeId::EarRight, Channel::Rotation, Axis::Z, 3.0, 0.1, PI);
        for i in 0..50 {
            let t = i as f32 * 0.1;
            assert!((a.sample(t) + b.sample(t)).abs() < 1e-5);
        }
    }

    #[test]
    fn test_offset_only_touches_axis() {
        let d = MotionDescriptor::new(NodeId::Root, Channel::Position, Axis::Y, 1.0, 1.0, FRAC_PI_2);
        let v = d.offset(0.0);
        assert!(approx_eq(v.x, 0.0));
        assert!(approx_eq(v.y, 1.0));
        assert!(approx_eq(v.z, 0.0));
    }
}
