//! GPU resource management
//!
//! Depth buffers, uniform buffers and bind groups for rendering.

pub mod global_bindings;
pub mod texture_resource;

// Re-export main types
pub use global_bindings::{object_bind_group_layout, GlobalBindings};
pub use texture_resource::TextureResource;
