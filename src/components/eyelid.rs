use bevy_ecs::prelude::Component;

/// Marks an eye whose vertical scale follows the blink cycle.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Eyelid;
