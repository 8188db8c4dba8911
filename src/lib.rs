//! Procedural animator for a 3D companion avatar.
//!
//! Every frame the host hands the animator the selected action, the clock,
//! and the pointer; the animator moves a fixed rig of body parts towards the
//! action's pose and layers breathing, ear flutter, blinking and gaze on
//! top. The renderer reads the rig afterwards.
//!
//! # Project Structure
//!
//! - [`animator`] – the per-avatar driver owning the ECS world and schedule
//! - [`components`] – per-node data (transforms, rest pose, blend rates)
//! - [`events`] – notifications emitted while ticking
//! - [`pose`] – action profiles and target poses
//! - [`resources`] – animation state shared across systems
//! - [`rig`] – rig construction and node snapshots
//! - [`systems`] – the per-tick update steps

pub mod animator;
pub mod components;
pub mod events;
pub mod pose;
pub mod resources;
pub mod rig;
pub mod systems;

pub use animator::{Animator, TickOutput};
pub use components::rignode::NodeId;
pub use resources::action::Action;
pub use resources::animatorconfig::AnimatorConfig;
