//! Rig node identity.
//!
//! Every body part of the avatar is an entity carrying a [`RigNode`]
//! component. The [`NodeId`] enumerates the fixed set of parts; the
//! parent of each part is fixed as well and is expressed in the ECS through
//! [`ChildOf`](bevy_ecs::hierarchy::ChildOf) when the rig is spawned.
//!
//! # Related
//!
//! - [`crate::rig::create_rig`] – spawns every node
//! - [`crate::resources::rig::RigRegistry`] – id to entity lookup

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Identity of a body part in the avatar rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeId {
    Root,
    Torso,
    Head,
    EarLeft,
    EarRight,
    EyeLeft,
    EyeRight,
    PupilLeft,
    PupilRight,
    ArmLeft,
    ArmRight,
    PawLeft,
    PawRight,
    LegLeft,
    LegRight,
    FootLeft,
    FootRight,
    Tail,
    /// Snack held while eating. Not a body part, but carried by the rig.
    Snack,
}

impl NodeId {
    /// Every node, parents listed before their children.
    pub const ALL: [NodeId; 19] = [
        NodeId::Root,
        NodeId::Torso,
        NodeId::Head,
        NodeId::EarLeft,
        NodeId::EarRight,
        NodeId::EyeLeft,
        NodeId::EyeRight,
        NodeId::PupilLeft,
        NodeId::PupilRight,
        NodeId::ArmLeft,
        NodeId::ArmRight,
        NodeId::PawLeft,
        NodeId::PawRight,
        NodeId::LegLeft,
        NodeId::LegRight,
        NodeId::FootLeft,
        NodeId::FootRight,
        NodeId::Tail,
        NodeId::Snack,
    ];

    /// Logical parent of this node. `None` only for [`NodeId::Root`].
    pub fn parent(self) -> Option<NodeId> {
        use NodeId::*;
        match self {
            Root => None,
            Torso => Some(Root),
            Head | ArmLeft | ArmRight | LegLeft | LegRight | Tail => Some(Torso),
            EarLeft | EarRight | EyeLeft | EyeRight => Some(Head),
            PupilLeft => Some(EyeLeft),
            PupilRight => Some(EyeRight),
            PawLeft => Some(ArmLeft),
            PawRight => Some(ArmRight),
            FootLeft => Some(LegLeft),
            FootRight => Some(LegRight),
            Snack => Some(PawRight),
        }
    }

    /// Stable snake_case name, used in logs and demo output.
    pub fn name(self) -> &'static str {
        use NodeId::*;
        match self {
            Root => "root",
            Torso => "torso",
            Head => "head",
            EarLeft => "ear_left",
            EarRight => "ear_right",
            EyeLeft => "eye_left",
            EyeRight => "eye_right",
            PupilLeft => "pupil_left",
            PupilRight => "pupil_right",
            ArmLeft => "arm_left",
            ArmRight => "arm_right",
            PawLeft => "paw_left",
            PawRight => "paw_right",
            LegLeft => "leg_left",
            LegRight => "leg_right",
            FootLeft => "foot_left",
            FootRight => "foot_right",
            Tail => "tail",
            Snack => "snack",
        }
    }

    /// Inverse of [`NodeId::name`]. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<NodeId> {
        NodeId::ALL.iter().copied().find(|id| id.name() == name)
    }

    pub fn is_ear(self) -> bool {
        matches!(self, NodeId::EarLeft | NodeId::EarRight)
    }

    pub fn is_eye(self) -> bool {
        matches!(self, NodeId::EyeLeft | NodeId::EyeRight)
    }

    pub fn is_pupil(self) -> bool {
        matches!(self, NodeId::PupilLeft | NodeId::PupilRight)
    }
}

/// Tags an entity as a node of the avatar rig.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RigNode {
    pub id: NodeId,
}

impl RigNode {
    pub fn new(id: NodeId) -> Self {
        Self { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_root_has_no_parent() {
        for id in NodeId::ALL {
            if id == NodeId::Root {
                assert!(id.parent().is_none());
            } else {
                assert!(id.parent().is_some(), "{:?} should have a parent", id);
            }
        }
    }

    #[test]
    fn test_parents_listed_before_children() {
        for (i, id) in NodeId::ALL.iter().enumerate() {
            if let Some(parent) = id.parent() {
                let parent_idx = NodeId::ALL.iter().position(|p| *p == parent).unwrap();
                assert!(parent_idx < i, "{:?} listed before its parent", id);
            }
        }
    }

    #[test]
    fn test_hierarchy_is_acyclic() {
        for id in NodeId::ALL {
            let mut cur = id;
            let mut steps = 0;
            while let Some(p) = cur.parent() {
                cur = p;
                steps += 1;
                assert!(steps <= NodeId::ALL.len(), "cycle through {:?}", id);
            }
            assert_eq!(cur, NodeId::Root);
        }
    }

    #[test]
    fn test_name_roundtrip() {
        for id in NodeId::ALL {
            assert_eq!(NodeId::from_name(id.name()), Some(id));
        }
        assert_eq!(NodeId::from_name("wing_left"), None);
    }
}
