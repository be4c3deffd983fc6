//! Rendering pipeline: surface management, depth buffer and the lit scene pass

pub mod render_engine;

pub use render_engine::RenderEngine;
