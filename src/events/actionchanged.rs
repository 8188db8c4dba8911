//! Action change notification.
//!
//! Triggered by [`action_change_detector`](crate::systems::action::action_change_detector)
//! on the tick a new action takes effect. The switch itself is already
//! applied when the event fires; observers only react to it.
//!
//! # Usage
//!
//! ```ignore
//! fn on_action_change(trigger: On<ActionChangedEvent>) {
//!     let event = trigger.event();
//!     println!("now {:?}", event.current);
//! }
//!
//! world.add_observer(on_action_change);
//! ```

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::action::Action;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionChangedEvent {
    /// `None` on the first tick.
    pub previous: Option<Action>,
    pub current: Action,
}

/// Log every action switch.
pub fn action_changed_observer(trigger: On<ActionChangedEvent>) {
    let event = trigger.event();
    match event.previous {
        Some(previous) => info!(
            "Action changed: {} -> {}",
            previous.name(),
            event.current.name()
        ),
        None => info!("Starting with action {}", event.current.name()),
    }
}
