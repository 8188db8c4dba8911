//! Rig construction and read-only views.
//!
//! [`create_rig`] spawns one entity per [`NodeId`] with its rest transform,
//! parents it with [`ChildOf`], and records it in the [`RigRegistry`].
//! Positions are local to the parent; composing them into world space is
//! left to the renderer.
//!
//! Rough proportions (units are arbitrary, the avatar is about one unit
//! tall sitting on the origin):
//!
//! ```text
//!          ear   ear
//!           \_____/
//!           | o o |   head
//!           \_____/
//!       arm  |   |  arm
//!       paw  |___|  paw    torso, tail behind
//!            || ||   legs
//!           feet
//! ```

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use glam::Vec3;
use log::debug;
use serde::Serialize;

use crate::components::blendrate::{BlendGroup, BlendRate};
use crate::components::eyelid::Eyelid;
use crate::components::layerbase::LayerBase;
use crate::components::position::Position;
use crate::components::propvisibility::PropVisibility;
use crate::components::resttransform::RestTransform;
use crate::components::rignode::{NodeId, RigNode};
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::resources::animatorconfig::AnimatorConfig;
use crate::resources::rig::RigRegistry;

/// Authored rest transform of each node, local to its parent.
pub fn rest_transform(id: NodeId) -> RestTransform {
    use NodeId::*;
    let (position, rotation) = match id {
        Root => (Vec3::ZERO, Vec3::ZERO),
        Torso => (Vec3::new(0.0, 0.55, 0.0), Vec3::ZERO),
        Head => (Vec3::new(0.0, 0.45, 0.05), Vec3::ZERO),
        EarLeft => (Vec3::new(-0.15, 0.2, 0.0), Vec3::new(0.0, 0.0, 0.2)),
        EarRight => (Vec3::new(0.15, 0.2, 0.0), Vec3::new(0.0, 0.0, -0.2)),
        EyeLeft => (Vec3::new(-0.08, 0.04, 0.17), Vec3::ZERO),
        EyeRight => (Vec3::new(0.08, 0.04, 0.17), Vec3::ZERO),
        PupilLeft | PupilRight => (Vec3::new(0.0, 0.0, 0.03), Vec3::ZERO),
        ArmLeft => (Vec3::new(-0.22, 0.1, 0.02), Vec3::ZERO),
        ArmRight => (Vec3::new(0.22, 0.1, 0.02), Vec3::ZERO),
        PawLeft | PawRight => (Vec3::new(0.0, -0.22, 0.0), Vec3::ZERO),
        LegLeft => (Vec3::new(-0.12, -0.3, 0.0), Vec3::ZERO),
        LegRight => (Vec3::new(0.12, -0.3, 0.0), Vec3::ZERO),
        FootLeft | FootRight => (Vec3::new(0.0, -0.2, 0.04), Vec3::ZERO),
        Tail => (Vec3::new(0.0, -0.2, -0.18), Vec3::new(-0.6, 0.0, 0.0)),
        Snack => (Vec3::new(0.0, -0.06, 0.06), Vec3::ZERO),
    };
    let rest = RestTransform::new(position, rotation);
    if id.is_eye() {
        rest.with_scale(Vec3::new(1.0, 1.2, 1.0))
    } else {
        rest
    }
}

/// Spawn the avatar rig into `world` and insert its [`RigRegistry`].
///
/// Returns a copy of the registry.
pub fn create_rig(world: &mut World, config: &AnimatorConfig) -> RigRegistry {
    let mut registry = RigRegistry::default();

    for id in NodeId::ALL {
        let rest = rest_transform(id);
        let group = BlendGroup::for_node(id);
        let rest_rotation = rest.rotation;
        let mut entity = world.spawn((
            RigNode::new(id),
            Position { pos: rest.position },
            Rotation {
                radians: rest.rotation,
            },
            Scale { scale: rest.scale },
            rest,
            BlendRate::new(config.decay_for(group)),
        ));

        if let Some(parent) = id.parent().and_then(|p| registry.get_node(p)) {
            entity.insert(ChildOf(parent));
        }
        if id.is_ear() {
            entity.insert(LayerBase {
                rotation: rest_rotation,
            });
        }
        if id.is_eye() {
            entity.insert(Eyelid);
        }
        if id == NodeId::Snack {
            entity.insert(PropVisibility::default());
        }

        registry.insert(id, entity.id());
    }

    world.flush();
    debug!("Spawned rig with {} nodes", registry.len());
    world.insert_resource(registry.clone());
    registry
}

/// Read-only snapshot of one node, as handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeTransform {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

/// Snapshot of node `id`, or `None` when the rig does not contain it.
pub fn get_node(world: &World, id: NodeId) -> Option<NodeTransform> {
    let entity = world.get_resource::<RigRegistry>()?.get_node(id)?;
    Some(NodeTransform {
        id,
        parent: id.parent(),
        position: world.get::<Position>(entity)?.pos,
        rotation: world.get::<Rotation>(entity)?.radians,
        scale: world.get::<Scale>(entity)?.scale,
    })
}
