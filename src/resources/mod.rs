//! ECS resources made available to systems.
//!
//! Together these form the animation state of one avatar. Each is created
//! once by [`crate::animator::Animator`] and mutated in place every tick.
//!
//! Overview
//! - `action` – the host-selected action and change tracking
//! - `activepose` – pose evaluated for the current tick
//! - `animatorconfig` – tuning constants loaded from INI
//! - `blink` – blink state machine data and its random source
//! - `gaze` – raw pointer and smoothed gaze
//! - `propstate` – prop flags published for the renderer
//! - `rig` – node id to entity registry
//! - `rootmotion` – blended whole-body offset and yaw
//! - `secondary` – breathing and ear flutter offsets of the current tick
//! - `worldtime` – elapsed time and delta
pub mod action;
pub mod activepose;
pub mod animatorconfig;
pub mod blink;
pub mod gaze;
pub mod propstate;
pub mod rig;
pub mod rootmotion;
pub mod secondary;
pub mod worldtime;
