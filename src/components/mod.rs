//! ECS components attached to rig nodes.
//!
//! Submodules overview:
//! - [`blendrate`] – decay base used when blending a node towards its target
//! - [`eyelid`] – marker for eyes that follow the blink cycle
//! - [`layerbase`] – blended rotation under a post-blend layer
//! - [`motion`] – declarative sinusoidal motion descriptors
//! - [`position`] – local position relative to the parent node
//! - [`propvisibility`] – whether a prop node should be drawn
//! - [`resttransform`] – authored bind transform of a node
//! - [`rignode`] – identity of a node within the rig
//! - [`rotation`] – local Euler rotation in radians
//! - [`scale`] – local 3D scale

pub mod blendrate;
pub mod eyelid;
pub mod layerbase;
pub mod motion;
pub mod position;
pub mod propvisibility;
pub mod resttransform;
pub mod rignode;
pub mod rotation;
pub mod scale;
