use bevy_ecs::prelude::Component;

/// Whether the renderer should draw this prop.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PropVisibility {
    pub visible: bool,
}
