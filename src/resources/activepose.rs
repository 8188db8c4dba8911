use bevy_ecs::prelude::Resource;

use crate::pose::Pose;

/// Pose evaluated for the current tick, replaced wholesale every tick.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct ActivePose(pub Pose);
