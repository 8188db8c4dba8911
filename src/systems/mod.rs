//! Animation systems.
//!
//! Submodules overview
//! - [`action`] – detect host action switches and emit events
//! - [`blend`] – frame-rate independent smoothing helpers
//! - [`blink`] – advance the blink cycle and scale the eyes
//! - [`gaze`] – smooth the pointer and derive head/pupil offsets
//! - [`pose`] – evaluate the active pose and blend nodes towards it
//! - [`prop`] – show and sway the eating prop
//! - [`rootmotion`] – blend the whole-body offset and apply breathing
//! - [`secondary`] – breathing and ear flutter signals
//! - [`time`] – update simulation time and delta

pub mod action;
pub mod blend;
pub mod blink;
pub mod gaze;
pub mod pose;
pub mod prop;
pub mod rootmotion;
pub mod secondary;
pub mod time;
