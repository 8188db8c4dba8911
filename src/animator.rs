//! Animation driver.
//!
//! [`Animator`] owns one avatar: an ECS [`World`] holding the rig and every
//! piece of animation state, and the [`Schedule`] that advances them. Hosts
//! call [`Animator::tick`] once per rendered frame and read the rig
//! afterwards; nothing runs between ticks.
//!
//! # Evaluation order
//!
//! Every tick runs, in order:
//!
//! 1. action change detection
//! 2. gaze smoothing and head/pupil offsets
//! 3. breathing and ear flutter
//! 4. blink cycle and eye height
//! 5. pose evaluation for the current action
//! 6. per-node blending towards the layered pose
//! 7. root offset and yaw, plus breathing
//! 8. prop visibility and sway
//!
//! No step can fail: missing nodes are skipped, degenerate time produces no
//! motion, unknown actions animate as idle.

use bevy_ecs::prelude::*;
use glam::{Vec2, Vec3};
use log::info;

use crate::components::rignode::NodeId;
use crate::events::actionchanged::action_changed_observer;
use crate::resources::action::{Action, CurrentAction};
use crate::resources::activepose::ActivePose;
use crate::resources::animatorconfig::AnimatorConfig;
use crate::resources::blink::{BlinkState, RandomSource};
use crate::resources::gaze::{GazeState, PointerInput};
use crate::resources::propstate::PropState;
use crate::resources::rig::RigRegistry;
use crate::resources::rootmotion::RootMotionState;
use crate::resources::secondary::SecondaryMotion;
use crate::resources::worldtime::WorldTime;
use crate::rig::{NodeTransform, create_rig, get_node};
use crate::systems::action::action_change_detector;
use crate::systems::blink::blink_system;
use crate::systems::gaze::update_gaze_system;
use crate::systems::pose::{evaluate_pose_system, pose_blend_system};
use crate::systems::prop::prop_system;
use crate::systems::rootmotion::root_motion_system;
use crate::systems::secondary::secondary_motion_system;
use crate::systems::time::{set_world_time, update_world_time};

/// Auxiliary outputs of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize)]
pub struct TickOutput {
    /// Whether the eating prop should be drawn.
    pub prop_visible: bool,
    /// Prop rotation offset, zero while hidden.
    pub prop_sway: Vec3,
}

/// One animated avatar.
pub struct Animator {
    world: World,
    schedule: Schedule,
}

impl Animator {
    /// Create an avatar whose blink delays come from a generator seeded with
    /// `config.blink_seed`, or from entropy when unset.
    pub fn new(config: AnimatorConfig) -> Self {
        let rng = match config.blink_seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self::with_random_source(config, Box::new(rng))
    }

    /// Create an avatar drawing blink delays from `source`.
    pub fn with_random_source(mut config: AnimatorConfig, source: Box<dyn RandomSource>) -> Self {
        config.sanitize();

        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
        world.insert_resource(CurrentAction::default());
        world.insert_resource(PointerInput::default());
        world.insert_resource(GazeState::default());
        world.insert_resource(SecondaryMotion::default());
        world.insert_resource(ActivePose::default());
        world.insert_resource(RootMotionState::default());
        world.insert_resource(PropState::default());

        let mut blink = BlinkState::new(source, 0.0);
        blink.next_blink_delay = blink.roll_delay(config.blink_min_delay, config.blink_max_delay);
        world.insert_resource(blink);

        create_rig(&mut world, &config);
        world.insert_resource(config);

        world.add_observer(action_changed_observer);
        world.flush();

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                action_change_detector,
                update_gaze_system,
                secondary_motion_system,
                blink_system,
                evaluate_pose_system,
                pose_blend_system,
                root_motion_system,
                prop_system,
            )
                .chain(),
        );

        info!("Animator ready with {} rig nodes", NodeId::ALL.len());

        Self { world, schedule }
    }

    /// Advance one frame.
    ///
    /// `t` is the host's elapsed time in seconds since the avatar was
    /// created, `dt` the time since the previous frame, and the pointer is
    /// in normalized device coordinates.
    pub fn tick(&mut self, action: Action, t: f32, dt: f32, pointer_x: f32, pointer_y: f32) -> TickOutput {
        set_world_time(&mut self.world, t, dt);
        self.run(action, pointer_x, pointer_y)
    }

    /// Advance one frame with an internally accumulated clock.
    ///
    /// `dt` is scaled by the configured time scale before use.
    pub fn step(&mut self, action: Action, dt: f32, pointer_x: f32, pointer_y: f32) -> TickOutput {
        update_world_time(&mut self.world, dt);
        self.run(action, pointer_x, pointer_y)
    }

    fn run(&mut self, action: Action, pointer_x: f32, pointer_y: f32) -> TickOutput {
        self.world.resource_mut::<CurrentAction>().set(action);
        self.world.resource_mut::<PointerInput>().raw = Vec2::new(pointer_x, pointer_y);

        self.schedule.run(&mut self.world);

        let prop = *self.world.resource::<PropState>();
        TickOutput {
            prop_visible: prop.visible,
            prop_sway: prop.sway,
        }
    }

    /// Snapshot of one node, `None` if the rig lacks it.
    pub fn node(&self, id: NodeId) -> Option<NodeTransform> {
        get_node(&self.world, id)
    }

    /// Snapshot of every present node, parents first.
    pub fn snapshot(&self) -> Vec<NodeTransform> {
        NodeId::ALL
            .iter()
            .filter_map(|id| self.node(*id))
            .collect()
    }

    pub fn action(&self) -> Action {
        self.world.resource::<CurrentAction>().get()
    }

    pub fn elapsed(&self) -> f32 {
        self.world.resource::<WorldTime>().elapsed
    }

    pub fn eyelid_openness(&self) -> f32 {
        self.world.resource::<BlinkState>().openness
    }

    pub fn gaze(&self) -> GazeState {
        *self.world.resource::<GazeState>()
    }

    pub fn root_motion(&self) -> RootMotionState {
        *self.world.resource::<RootMotionState>()
    }

    pub fn prop(&self) -> PropState {
        *self.world.resource::<PropState>()
    }

    pub fn config(&self) -> &AnimatorConfig {
        self.world.resource::<AnimatorConfig>()
    }

    pub fn registry(&self) -> &RigRegistry {
        self.world.resource::<RigRegistry>()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(AnimatorConfig::default())
    }
}
