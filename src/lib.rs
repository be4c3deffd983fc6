//! ferris-view
//!
//! A small wgpu scene viewer built around switchable cameras: a free-fly
//! camera, a fixed look-at camera, an orbit camera and one riding a Ferris
//! wheel, over a scene lit by directional, point and torch lights.

pub mod app;
pub mod config;
pub mod error;
pub mod gfx;
pub mod input;
pub mod performance;
pub mod prelude;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::ViewerApp;
pub use config::ViewerConfig;
pub use error::{Result, ViewerError};
