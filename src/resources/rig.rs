//! Rig registry resource.
//!
//! Maps each [`NodeId`] to the entity that carries it. Lookups of ids that
//! were never spawned, or whose entity has been removed, return `None` and
//! callers skip the update.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

use crate::components::rignode::NodeId;

#[derive(Resource, Debug, Clone, Default)]
pub struct RigRegistry {
    pub nodes: FxHashMap<NodeId, Entity>,
}

impl RigRegistry {
    pub fn insert(&mut self, id: NodeId, entity: Entity) {
        self.nodes.insert(id, entity);
    }

    /// Entity of `id`, or `None` when the rig does not contain it.
    pub fn get_node(&self, id: NodeId) -> Option<Entity> {
        self.nodes.get(&id).copied()
    }

    pub fn remove(&mut self, id: NodeId) -> Option<Entity> {
        self.nodes.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
