//! Action change detection.
//!
//! Runs first in the schedule so observers see a switch on the same tick the
//! new action starts animating.

use bevy_ecs::prelude::*;

use crate::events::actionchanged::ActionChangedEvent;
use crate::resources::action::CurrentAction;

/// Emit an [`ActionChangedEvent`] when the host switched actions since the
/// previous tick.
pub fn action_change_detector(mut action: ResMut<CurrentAction>, mut commands: Commands) {
    if action.changed() {
        commands.trigger(ActionChangedEvent {
            previous: action.previous(),
            current: action.get(),
        });
    }
    action.commit();
}
