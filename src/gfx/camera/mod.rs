//! Camera subsystem
//!
//! Three camera kinds share the [`Camera`] trait: a free-fly camera driven by
//! keys and mouse, a fixed look-at camera and an orbit camera circling a
//! movable center. [`CameraRig`] holds them in switching order and
//! [`CameraController`] maps input onto whichever one is active.

pub mod camera_controller;
pub mod camera_rig;
pub mod camera_utils;
pub mod fixed_camera;
pub mod free_camera;
pub mod orbit_camera;

// Re-export main types
pub use camera_controller::CameraController;
pub use camera_rig::{CameraRig, SceneCamera};
pub use camera_utils::{Camera, CameraUniform, Lens, Projection};
pub use fixed_camera::FixedCamera;
pub use free_camera::{FreeCamera, Movement};
pub use orbit_camera::OrbitCamera;
