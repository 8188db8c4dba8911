//! Per-action pose profiles.
//!
//! Each action is a [`PoseProfile`] variant backed by static tables:
//!
//! - a baseline of fixed rotations the body holds for that action,
//! - limb motion descriptors layered on top (Wave, Dance, Eat only),
//! - root motion descriptors and a fixed root offset,
//! - prop sway descriptors (Eat only).
//!
//! Limb frequencies and phases deliberately differ between limbs so the
//! avatar never moves in lockstep.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;

use crate::components::motion::{Axis, Channel, MotionDescriptor};
use crate::components::rignode::NodeId;
use crate::pose::{BaselineEntry, Pose};
use crate::resources::action::Action;

use NodeId::*;

const fn rot(node: NodeId, axis: Axis, frequency: f32, amplitude: f32, phase: f32) -> MotionDescriptor {
    MotionDescriptor::new(node, Channel::Rotation, axis, frequency, amplitude, phase)
}

const fn pos(node: NodeId, axis: Axis, frequency: f32, amplitude: f32, phase: f32) -> MotionDescriptor {
    MotionDescriptor::new(node, Channel::Position, axis, frequency, amplitude, phase)
}

// ---------------------------------------------------------------------------
// Baselines
// ---------------------------------------------------------------------------

const IDLE_BASELINE: &[BaselineEntry] = &[
    BaselineEntry::rotation(Torso, 0.0, 0.0, 0.0),
    BaselineEntry::rotation(Head, 0.0, 0.0, 0.0),
    BaselineEntry::rotation(ArmLeft, 0.12, 0.0, 0.08),
    BaselineEntry::rotation(ArmRight, 0.12, 0.0, -0.08),
    BaselineEntry::rotation(PawLeft, 0.0, 0.0, 0.0),
    BaselineEntry::rotation(PawRight, 0.0, 0.0, 0.0),
    BaselineEntry::rotation(LegLeft, 0.06, 0.0, 0.0),
    BaselineEntry::rotation(LegRight, 0.06, 0.0, 0.0),
    BaselineEntry::rotation(FootLeft, 0.0, 0.0, 0.0),
    BaselineEntry::rotation(FootRight, 0.0, 0.0, 0.0),
    BaselineEntry::rotation(Tail, -0.6, 0.25, 0.0),
];

const WAVE_BASELINE: &[BaselineEntry] = &[
    BaselineEntry::rotation(Torso, 0.0, 0.0, 0.03),
    BaselineEntry::rotation(Head, 0.0, 0.0, 0.12),
    BaselineEntry::rotation(ArmLeft, 0.12, 0.0, 0.08),
    BaselineEntry::rotation(ArmRight, 0.0, 0.0, -2.5),
    BaselineEntry::rotation(PawLeft, 0.0, 0.0, 0.0),
    BaselineEntry::rotation(PawRight, 0.0, 0.0, 0.0),
    BaselineEntry::rotation(LegLeft, 0.06, 0.0, 0.0),
    BaselineEntry::rotation(LegRight, 0.06, 0.0, 0.0),
    BaselineEntry::rotation(FootLeft, 0.0, 0.0, 0.0),
    BaselineEntry::rotation(FootRight, 0.0, 0.0, 0.0),
    BaselineEntry::rotation(Tail, -0.6, 0.0, 0.0),
];

const DANCE_BASELINE: &[BaselineEntry] = &[
    BaselineEntry::rotation(Torso, 0.0, 0.0, 0.0),
    BaselineEntry::rotation(Head, 0.0, 0.0, 0.0),
    BaselineEntry::rotation(ArmLeft, 0.0, 0.0, 1.3),
    BaselineEntry::rotation(ArmRight, 0.0, 0.0, -1.3),
    BaselineEntry::rotation(PawLeft, 0.0, 0.0, 0.0),
    BaselineEntry::rotation(PawRight, 0.0, 0.0, 0.0),
    BaselineEntry::rotation(LegLeft, 0.0, 0.0, 0.0),
    BaselineEntry::rotation(LegRight, 0.0, 0.0, 0.0),
    BaselineEntry::rotation(FootLeft, 0.0, 0.0, 0.0),
    BaselineEntry::rotation(FootRight, 0.0, 0.0, 0.0),
    BaselineEntry::rotation(Tail, -0.4, 0.0, 0.0),
];

const SIT_DOWN_BASELINE: &[BaselineEntry] = &[
    BaselineEntry::rotation(Torso, -0.08, 0.0, 0.0),
    BaselineEntry::rotation(Head, 0.06, 0.0, 0.0),
    BaselineEntry::rotation(ArmLeft, 0.35, 0.0, 0.12),
    BaselineEntry::rotation(ArmRight, 0.35, 0.0, -0.12),
    BaselineEntry::rotation(PawLeft, 0.2, 0.0, 0.0),
    BaselineEntry::rotation(PawRight, 0.2, 0.0, 0.0),
    BaselineEntry::rotation(LegLeft, -1.45, 0.12, 0.0),
    BaselineEntry::rotation(LegRight, -1.45, -0.12, 0.0),
    BaselineEntry::rotation(FootLeft, 1.3, 0.0, 0.0),
    BaselineEntry::rotation(FootRight, 1.3, 0.0, 0.0),
    BaselineEntry::rotation(Tail, -1.2, 0.45, 0.0),
];

const SLEEP_BASELINE: &[BaselineEntry] = &[
    BaselineEntry::rotation(Torso, 0.35, 0.0, 0.0),
    BaselineEntry::rotation(Head, 0.5, 0.0, 0.3),
    BaselineEntry::rotation(ArmLeft, 0.9, 0.0, 0.2),
    BaselineEntry::rotation(ArmRight, 0.9, 0.0, -0.2),
    BaselineEntry::rotation(PawLeft, 0.3, 0.0, 0.0),
    BaselineEntry::rotation(PawRight, 0.3, 0.0, 0.0),
    BaselineEntry::rotation(LegLeft, -1.5, 0.2, 0.0),
    BaselineEntry::rotation(LegRight, -1.5, -0.2, 0.0),
    BaselineEntry::rotation(FootLeft, 1.4, 0.0, 0.0),
    BaselineEntry::rotation(FootRight, 1.4, 0.0, 0.0),
    BaselineEntry::rotation(Tail, -1.3, 0.9, 0.0),
];

const EAT_BASELINE: &[BaselineEntry] = &[
    BaselineEntry::rotation(Torso, 0.05, 0.0, 0.0),
    BaselineEntry::rotation(Head, 0.15, 0.0, 0.0),
    BaselineEntry::rotation(ArmLeft, -1.1, 0.0, 0.35),
    BaselineEntry::rotation(ArmRight, -1.3, 0.0, -0.3),
    BaselineEntry::rotation(PawLeft, -0.3, 0.0, 0.0),
    BaselineEntry::rotation(PawRight, -0.3, 0.0, 0.0),
    BaselineEntry::rotation(LegLeft, 0.06, 0.0, 0.0),
    BaselineEntry::rotation(LegRight, 0.06, 0.0, 0.0),
    BaselineEntry::rotation(FootLeft, 0.0, 0.0, 0.0),
    BaselineEntry::rotation(FootRight, 0.0, 0.0, 0.0),
    BaselineEntry::rotation(Tail, -0.6, 0.0, 0.0),
];

// ---------------------------------------------------------------------------
// Limb motion
// ---------------------------------------------------------------------------

/// The paw flaps faster than the arm swings, and out of phase with it.
const WAVE_MOTION: &[MotionDescriptor] = &[
    rot(ArmRight, Axis::Z, 6.0, 0.35, 0.0),
    rot(PawRight, Axis::Z, 11.0, 0.5, 0.8),
    rot(Tail, Axis::Y, 5.0, 0.3, 0.4),
];

const DANCE_MOTION: &[MotionDescriptor] = &[
    rot(ArmLeft, Axis::Z, 4.0, 0.45, 0.0),
    rot(ArmRight, Axis::Z, 4.0, 0.45, FRAC_PI_2),
    rot(PawLeft, Axis::X, 7.0, 0.3, 0.5),
    rot(PawRight, Axis::X, 7.5, 0.3, 2.1),
    rot(LegLeft, Axis::X, 8.0, 0.25, 0.0),
    rot(LegRight, Axis::X, 8.0, 0.25, PI),
    rot(Torso, Axis::Z, 4.0, 0.12, 0.3),
    rot(Head, Axis::Z, 4.0, 0.15, 1.0),
    rot(Tail, Axis::Y, 6.0, 0.4, 0.0),
];

/// Nibbling: both arms bob at the same rate but different phases, the head
/// nods slightly behind them.
const EAT_MOTION: &[MotionDescriptor] = &[
    rot(ArmRight, Axis::X, 7.0, 0.15, 0.0),
    rot(ArmLeft, Axis::X, 7.0, 0.12, 1.3),
    rot(Head, Axis::X, 7.0, 0.08, 0.4),
    rot(Tail, Axis::Y, 2.5, 0.15, 0.0),
];

// ---------------------------------------------------------------------------
// Root motion
// ---------------------------------------------------------------------------

/// Weave path while dancing: two sinusoids per channel with unrelated
/// frequencies, giving a lissajous-like sway.
const DANCE_ROOT_MOTION: &[MotionDescriptor] = &[
    rot(Root, Axis::Y, 1.1, 0.3, 0.0),
    rot(Root, Axis::Y, 2.3, 0.12, 0.7),
    pos(Root, Axis::X, 0.9, 0.25, 0.0),
    pos(Root, Axis::X, 2.1, 0.08, 1.2),
    pos(Root, Axis::Z, 1.8, 0.15, 0.5),
    pos(Root, Axis::Z, 0.7, 0.05, 0.0),
];

/// Largest root yaw the dance weave can reach, in radians.
pub const DANCE_YAW_AMPLITUDE: f32 = 0.3 + 0.12;

pub const SIT_DOWN_ROOT_DROP: f32 = -0.18;
pub const SLEEP_ROOT_DROP: f32 = -0.3;

// ---------------------------------------------------------------------------
// Prop
// ---------------------------------------------------------------------------

const SNACK_SWAY: &[MotionDescriptor] = &[
    rot(Snack, Axis::Z, 3.0, 0.12, 0.0),
    rot(Snack, Axis::X, 4.7, 0.06, 0.9),
];

/// Whole-body target for one action at one time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RootTarget {
    pub offset: Vec3,
    pub yaw: f32,
}

/// One variant per action, each exposing the same evaluation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseProfile {
    Idle,
    Wave,
    Dance,
    SitDown,
    Sleep,
    Eat,
}

impl From<Action> for PoseProfile {
    fn from(action: Action) -> Self {
        match action {
            Action::Idle => PoseProfile::Idle,
            Action::Wave => PoseProfile::Wave,
            Action::Dance => PoseProfile::Dance,
            Action::SitDown => PoseProfile::SitDown,
            Action::Sleep => PoseProfile::Sleep,
            Action::Eat => PoseProfile::Eat,
        }
    }
}

impl PoseProfile {
    pub fn baseline(self) -> &'static [BaselineEntry] {
        match self {
            PoseProfile::Idle => IDLE_BASELINE,
            PoseProfile::Wave => WAVE_BASELINE,
            PoseProfile::Dance => DANCE_BASELINE,
            PoseProfile::SitDown => SIT_DOWN_BASELINE,
            PoseProfile::Sleep => SLEEP_BASELINE,
            PoseProfile::Eat => EAT_BASELINE,
        }
    }

    pub fn limb_motion(self) -> &'static [MotionDescriptor] {
        match self {
            PoseProfile::Wave => WAVE_MOTION,
            PoseProfile::Dance => DANCE_MOTION,
            PoseProfile::Eat => EAT_MOTION,
            PoseProfile::Idle | PoseProfile::SitDown | PoseProfile::Sleep => &[],
        }
    }

    pub fn root_motion(self) -> &'static [MotionDescriptor] {
        match self {
            PoseProfile::Dance => DANCE_ROOT_MOTION,
            _ => &[],
        }
    }

    /// Fixed vertical root offset held for the whole action.
    pub fn root_drop(self) -> f32 {
        match self {
            PoseProfile::SitDown => SIT_DOWN_ROOT_DROP,
            PoseProfile::Sleep => SLEEP_ROOT_DROP,
            _ => 0.0,
        }
    }

    pub fn prop_sway(self) -> &'static [MotionDescriptor] {
        match self {
            PoseProfile::Eat => SNACK_SWAY,
            _ => &[],
        }
    }

    pub fn shows_prop(self) -> bool {
        matches!(self, PoseProfile::Eat)
    }

    /// Target pose at time `t`.
    pub fn evaluate(self, t: f32) -> Pose {
        Pose::from_tables(self.baseline(), self.limb_motion(), t)
    }

    /// Whole-body target at time `t`.
    pub fn root_target(self, t: f32) -> RootTarget {
        let mut target = RootTarget {
            offset: Vec3::new(0.0, self.root_drop(), 0.0),
            yaw: 0.0,
        };
        for d in self.root_motion() {
            match d.channel {
                Channel::Position => target.offset += d.offset(t),
                Channel::Rotation => target.yaw += d.offset(t).y,
            }
        }
        target
    }

    /// Prop rotation at time `t`; zero when the profile shows no prop.
    pub fn prop_rotation(self, t: f32) -> Vec3 {
        self.prop_sway()
            .iter()
            .fold(Vec3::ZERO, |acc, d| acc + d.offset(t))
    }
}
