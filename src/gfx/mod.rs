//! # Graphics Module
//!
//! - **Cameras** ([`camera`]) - free, fixed and orbit cameras, the rig that
//!   switches between them and the controller that maps input onto them
//! - **Scene** ([`scene`]) - the demo scene and its Ferris wheel
//! - **Lighting** ([`lighting`]) - directional, point and torch lights
//! - **Rendering** ([`rendering`]) - the wgpu renderer and shader
//! - **Resources** ([`resources`]) - depth buffer and uniform bindings
//! - **Geometry** ([`geometry`]) - procedural cube and plane meshes

pub mod camera;
pub mod geometry;
pub mod lighting;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use rendering::render_engine::RenderEngine;
