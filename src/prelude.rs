//! # Prelude
//!
//! Commonly used types in one import:
//!
//! ```rust
//! use ferris_view::prelude::*;
//!
//! let mut camera = FreeCamera::new(Point3::new(0.0, 0.0, 3.0));
//! camera.translate(Movement::Forward, 1.0);
//! assert!((camera.eye().z - 0.5).abs() < 1e-5);
//! ```

pub use crate::app::ViewerApp;
pub use crate::config::ViewerConfig;
pub use crate::error::{Result, ViewerError};

pub use crate::gfx::camera::{
    Camera, CameraController, CameraRig, FixedCamera, FreeCamera, Lens, Movement, OrbitCamera,
    Projection, SceneCamera,
};
pub use crate::gfx::lighting::Lighting;
pub use crate::gfx::scene::{FerrisWheel, Scene};
pub use crate::input::InputState;
pub use crate::performance::FrameClock;

pub use cgmath::{Point3, Vector3};
