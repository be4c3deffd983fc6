//! WGPU utility functions and helpers
//!
//! Small wrappers for the buffer and binding boilerplate the renderer repeats.

pub mod binding_types;
pub mod uniform_buffer;

pub use uniform_buffer::UniformBuffer;
