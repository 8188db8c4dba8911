//! System-level tests: individual animation systems run against a
//! hand-assembled world, without the full [`Animator`] schedule.
//!
//! [`Animator`]: avatar_animator::Animator

use bevy_ecs::hierarchy::{ChildOf, Children};
use bevy_ecs::prelude::*;
use glam::{Vec2, Vec3};

use avatar_animator::components::position::Position;
use avatar_animator::components::propvisibility::PropVisibility;
use avatar_animator::components::rignode::NodeId;
use avatar_animator::components::rotation::Rotation;
use avatar_animator::components::scale::Scale;
use avatar_animator::pose::evaluate_pose;
use avatar_animator::resources::action::{Action, CurrentAction};
use avatar_animator::resources::activepose::ActivePose;
use avatar_animator::resources::animatorconfig::AnimatorConfig;
use avatar_animator::resources::blink::{BlinkState, SequenceSource};
use avatar_animator::resources::gaze::{GazeState, PointerInput};
use avatar_animator::resources::propstate::PropState;
use avatar_animator::resources::rig::RigRegistry;
use avatar_animator::resources::rootmotion::RootMotionState;
use avatar_animator::resources::secondary::SecondaryMotion;
use avatar_animator::resources::worldtime::WorldTime;
use avatar_animator::rig::{create_rig, get_node, rest_transform};
use avatar_animator::systems::blink::blink_system;
use avatar_animator::systems::gaze::update_gaze_system;
use avatar_animator::systems::pose::{evaluate_pose_system, pose_blend_system};
use avatar_animator::systems::prop::prop_system;
use avatar_animator::systems::rootmotion::root_motion_system;
use avatar_animator::systems::secondary::secondary_motion_system;
use avatar_animator::systems::time::update_world_time;

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(delta: f32, action: Action) -> World {
    let mut world = World::new();
    let config = AnimatorConfig::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
    });
    world.insert_resource(CurrentAction::new(action));
    world.init_resource::<PointerInput>();
    world.init_resource::<GazeState>();
    world.init_resource::<SecondaryMotion>();
    world.init_resource::<ActivePose>();
    world.init_resource::<RootMotionState>();
    world.init_resource::<PropState>();
    world.insert_resource(BlinkState::new(Box::new(SequenceSource::new(vec![0.5])), 4.0));
    create_rig(&mut world, &config);
    world.insert_resource(config);
    world
}

fn pose_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            update_gaze_system,
            secondary_motion_system,
            evaluate_pose_system,
            pose_blend_system,
            root_motion_system,
        )
            .chain(),
    );
    schedule
}

fn advance(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
}

#[test]
fn rig_hierarchy_reaches_root_from_every_node() {
    let world = make_world(0.0, Action::Idle);
    let registry = world.resource::<RigRegistry>();
    let root = registry.get_node(NodeId::Root).unwrap();

    for id in NodeId::ALL {
        let mut entity = registry.get_node(id).unwrap();
        let mut depth = 0;
        while let Some(child_of) = world.get::<ChildOf>(entity) {
            entity = child_of.parent();
            depth += 1;
            assert!(depth < NodeId::ALL.len(), "cycle above {:?}", id);
        }
        assert_eq!(entity, root, "{:?} does not hang off the root", id);
    }

    let torso = registry.get_node(NodeId::Torso).unwrap();
    let children = world.get::<Children>(torso).unwrap();
    for id in NodeId::ALL {
        let entity = registry.get_node(id).unwrap();
        assert_eq!(
            children.contains(&entity),
            id.parent() == Some(NodeId::Torso),
            "{:?}",
            id
        );
    }
}

#[test]
fn pose_blend_moves_limbs_towards_targets() {
    let mut world = make_world(0.0, Action::Sleep);
    let mut schedule = pose_schedule();
    let target = evaluate_pose(Action::Sleep, 0.0)
        .rotation(NodeId::ArmLeft)
        .unwrap();

    let mut distance = (get_node(&world, NodeId::ArmLeft).unwrap().rotation - target).length();
    for _ in 0..20 {
        advance(&mut world, &mut schedule, 1.0 / 60.0);
        let now = (get_node(&world, NodeId::ArmLeft).unwrap().rotation - target).length();
        assert!(now < distance);
        distance = now;
    }
}

#[test]
fn pose_blend_leaves_root_and_prop_alone() {
    let mut world = make_world(0.0, Action::Dance);
    let mut schedule = Schedule::default();
    schedule.add_systems((evaluate_pose_system, pose_blend_system).chain());

    for _ in 0..30 {
        advance(&mut world, &mut schedule, 1.0 / 60.0);
    }
    for id in [NodeId::Root, NodeId::Snack] {
        let node = get_node(&world, id).unwrap();
        let rest = rest_transform(id);
        assert_eq!(node.position, rest.position);
        assert_eq!(node.rotation, rest.rotation);
    }
    assert!(!world.resource::<ActivePose>().0.is_empty());
}

#[test]
fn ears_flutter_in_every_action() {
    for action in Action::ALL {
        let mut world = make_world(0.0, action);
        let mut schedule = pose_schedule();
        let mut seen = Vec::new();
        for _ in 0..120 {
            advance(&mut world, &mut schedule, 1.0 / 60.0);
            seen.push(get_node(&world, NodeId::EarLeft).unwrap().rotation.z);
        }
        let min = seen.iter().cloned().fold(f32::MAX, f32::min);
        let max = seen.iter().cloned().fold(f32::MIN, f32::max);
        assert!(max - min > 0.02, "{:?}: ears stayed still", action);
    }
}

#[test]
fn gaze_turns_head_and_pupils() {
    let mut world = make_world(0.0, Action::Idle);
    world.resource_mut::<PointerInput>().raw = Vec2::new(-1.0, 1.0);
    let mut schedule = pose_schedule();
    for _ in 0..300 {
        advance(&mut world, &mut schedule, 1.0 / 60.0);
    }

    let gaze = *world.resource::<GazeState>();
    assert!((gaze.smoothed - Vec2::new(-1.0, 1.0)).length() < 1e-3);

    let head = get_node(&world, NodeId::Head).unwrap();
    assert!(head.rotation.y < 0.0);
    assert!(head.rotation.z > 0.0);

    let rest = rest_transform(NodeId::PupilRight);
    for id in [NodeId::PupilLeft, NodeId::PupilRight] {
        let pupil = get_node(&world, id).unwrap();
        assert!(pupil.position.x < rest.position.x);
        assert!(pupil.position.y > rest.position.y);
        assert!(pupil.position.z < rest.position.z);
    }
}

#[test]
fn root_drops_when_sitting() {
    let mut world = make_world(0.0, Action::SitDown);
    let mut schedule = pose_schedule();
    for _ in 0..600 {
        advance(&mut world, &mut schedule, 1.0 / 60.0);
    }
    let root = get_node(&world, NodeId::Root).unwrap();
    let breathing = world.resource::<SecondaryMotion>().breathing;
    assert!(approx_eq(root.position.y - breathing, -0.18));
    assert!(approx_eq(root.rotation.y, 0.0));
}

#[test]
fn blink_squashes_both_eyes() {
    let mut world = make_world(0.0, Action::Idle);
    let mut schedule = Schedule::default();
    schedule.add_systems(blink_system);

    let rest = rest_transform(NodeId::EyeLeft);
    let mut min_height = f32::MAX;
    for _ in 0..400 {
        advance(&mut world, &mut schedule, 1.0 / 60.0);
        let registry = world.resource::<RigRegistry>().clone();
        let left = world
            .get::<Scale>(registry.get_node(NodeId::EyeLeft).unwrap())
            .unwrap()
            .scale;
        let right = world
            .get::<Scale>(registry.get_node(NodeId::EyeRight).unwrap())
            .unwrap()
            .scale;
        assert_eq!(left, right);
        assert_eq!(left.x, rest.scale.x);
        min_height = min_height.min(left.y);
    }
    // First blink is due after four seconds.
    assert!(world.resource::<BlinkState>().blink_count >= 1);
    assert!(min_height < rest.scale.y * 0.5);
}

#[test]
fn prop_tracks_action() {
    let mut world = make_world(1.0 / 60.0, Action::Eat);
    let mut schedule = Schedule::default();
    schedule.add_systems(prop_system);
    world.resource_mut::<WorldTime>().elapsed = 0.4;
    schedule.run(&mut world);

    let snack = world
        .resource::<RigRegistry>()
        .get_node(NodeId::Snack)
        .unwrap();
    assert!(world.get::<PropVisibility>(snack).unwrap().visible);
    let sway = world.resource::<PropState>().sway;
    assert_ne!(sway, Vec3::ZERO);
    assert_eq!(
        world.get::<Rotation>(snack).unwrap().radians,
        rest_transform(NodeId::Snack).rotation + sway
    );

    world.resource_mut::<CurrentAction>().set(Action::Dance);
    schedule.run(&mut world);
    assert!(!world.get::<PropVisibility>(snack).unwrap().visible);
    assert_eq!(
        world.get::<Rotation>(snack).unwrap().radians,
        rest_transform(NodeId::Snack).rotation
    );
}

#[test]
fn empty_world_systems_do_not_panic() {
    let mut world = make_world(1.0 / 60.0, Action::Wave);
    let registry = world.resource::<RigRegistry>().clone();
    let entities: Vec<Entity> = NodeId::ALL
        .iter()
        .filter_map(|id| registry.get_node(*id))
        .collect();
    for entity in entities {
        world.despawn(entity);
    }
    let mut schedule = pose_schedule();
    schedule.add_systems((blink_system, prop_system));
    advance(&mut world, &mut schedule, 1.0 / 60.0);

    let mut query = world.query::<&Position>();
    assert_eq!(query.iter(&world).count(), 0);
    assert!(get_node(&world, NodeId::Root).is_none());
}
