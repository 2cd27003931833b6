//! Interpolation primitives shared by the pose types.
//!
//! Interval projection and shortest-arc spherical interpolation of unit
//! direction vectors. Position lerp comes straight from [`glam::Vec3`].

mod project;
mod slerp;

pub use project::project;
pub use slerp::slerp_vectors;
