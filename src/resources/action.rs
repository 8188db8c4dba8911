//! Authoritative action selection.
//!
//! The host chooses what the avatar is doing; this core never changes the
//! action on its own. A new action takes effect on the very tick it is set:
//! there is no crossfade layer, continuity comes only from the pose blender.

use bevy_ecs::prelude::Resource;
use log::debug;
use serde::{Deserialize, Serialize};

/// Discrete behavior modes the avatar can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    #[default]
    Idle,
    Wave,
    Dance,
    SitDown,
    Sleep,
    Eat,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Idle,
        Action::Wave,
        Action::Dance,
        Action::SitDown,
        Action::Sleep,
        Action::Eat,
    ];

    /// Stable snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Action::Idle => "idle",
            Action::Wave => "wave",
            Action::Dance => "dance",
            Action::SitDown => "sit_down",
            Action::Sleep => "sleep",
            Action::Eat => "eat",
        }
    }

    /// Resolve a host-supplied identifier. Unknown names fall back to
    /// [`Action::Idle`].
    pub fn from_name(name: &str) -> Action {
        let normalized = name.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        let normalized = match normalized.as_str() {
            "sit" | "sitdown" => "sit_down",
            other => other,
        };
        match Action::ALL.iter().find(|a| a.name() == normalized) {
            Some(action) => *action,
            None => {
                debug!("Unknown action '{}', falling back to idle", name);
                Action::Idle
            }
        }
    }

    /// Resolve a numeric identifier (declaration order). Out of range values
    /// fall back to [`Action::Idle`].
    pub fn from_index(index: u32) -> Action {
        match Action::ALL.get(index as usize) {
            Some(action) => *action,
            None => {
                debug!("Unknown action index {}, falling back to idle", index);
                Action::Idle
            }
        }
    }
}

/// The action driving the current tick, and the one that drove the last.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurrentAction {
    current: Action,
    previous: Option<Action>,
}

impl CurrentAction {
    pub fn new(action: Action) -> Self {
        Self {
            current: action,
            previous: None,
        }
    }

    pub fn get(&self) -> Action {
        self.current
    }

    /// Action of the previous tick, `None` before the first tick.
    pub fn previous(&self) -> Option<Action> {
        self.previous
    }

    /// Set the action for the upcoming tick.
    pub fn set(&mut self, action: Action) {
        self.current = action;
    }

    /// Remember the current action as the previous one. Called once per tick
    /// after change detection has run.
    pub fn commit(&mut self) {
        self.previous = Some(self.current);
    }

    /// True when the action differs from the previous tick's.
    pub fn changed(&self) -> bool {
        self.previous != Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_known() {
        for action in Action::ALL {
            assert_eq!(Action::from_name(action.name()), action);
        }
        assert_eq!(Action::from_name("Sit Down"), Action::SitDown);
        assert_eq!(Action::from_name("sit-down"), Action::SitDown);
        assert_eq!(Action::from_name("DANCE"), Action::Dance);
    }

    #[test]
    fn test_from_name_unknown_is_idle() {
        assert_eq!(Action::from_name("backflip"), Action::Idle);
        assert_eq!(Action::from_name(""), Action::Idle);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Action::from_index(0), Action::Idle);
        assert_eq!(Action::from_index(5), Action::Eat);
        assert_eq!(Action::from_index(6), Action::Idle);
        assert_eq!(Action::from_index(u32::MAX), Action::Idle);
    }

    #[test]
    fn test_current_action_change_tracking() {
        let mut ca = CurrentAction::new(Action::Idle);
        assert!(ca.changed());
        ca.commit();
        assert!(!ca.changed());
        ca.set(Action::Eat);
        assert!(ca.changed());
        ca.commit();
        assert_eq!(ca.previous(), Some(Action::Eat));
        assert!(!ca.changed());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Action::SitDown).unwrap();
        assert_eq!(json, "\"sit_down\"");
        let back: Action = serde_json::from_str("\"eat\"").unwrap();
        assert_eq!(back, Action::Eat);
    }
}
