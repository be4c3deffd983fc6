//! # Scene
//!
//! The hand-built demo scene: a ground plane, a centerpiece, a lamp marking the
//! point light and an animated Ferris wheel, together with the cameras and
//! lights that view it.
//!
//! - [`Scene`] - owns cameras, lighting, the wheel and every drawable object
//! - [`FerrisWheel`] - rotation state and the transforms of hub, spokes and cabins
//! - [`Object`] - a mesh with a transform and flat color
//! - [`Vertex3D`] - position and normal vertex layout

pub mod ferris_wheel;
pub mod object;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use ferris_wheel::FerrisWheel;
pub use object::{DrawObject, Object};
pub use scene::Scene;
pub use vertex::Vertex3D;
