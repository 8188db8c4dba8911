//! Event types and observers used by the animator.
//!
//! Submodules:
//! - [`actionchanged`] – the host switched the avatar to a different action
pub mod actionchanged;
