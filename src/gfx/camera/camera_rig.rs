//! Active-camera selection.
//!
//! Every camera the viewer uses lives in a [`CameraRig`] for the whole run.
//! Exactly one of them is active at a time and switching is a cyclic step
//! through a fixed order, so a camera that is switched away from keeps its
//! state until it comes round again.

use cgmath::{Matrix4, Point3, Vector3};

use super::{
    camera_utils::{Camera, Lens},
    fixed_camera::FixedCamera,
    free_camera::FreeCamera,
    orbit_camera::OrbitCamera,
};

/// One of the camera behaviours the viewer can switch between.
#[derive(Debug, Clone, Copy)]
pub enum SceneCamera {
    Free(FreeCamera),
    Fixed(FixedCamera),
    Orbit(OrbitCamera),
}

impl SceneCamera {
    /// Short name used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            SceneCamera::Free(_) => "free",
            SceneCamera::Fixed(_) => "fixed",
            SceneCamera::Orbit(_) => "orbit",
        }
    }

    /// Whether mouse-look should be forwarded to this camera.
    pub fn consumes_mouse_look(&self) -> bool {
        matches!(self, SceneCamera::Free(_))
    }
}

impl Camera for SceneCamera {
    fn view_matrix(&self) -> Matrix4<f32> {
        match self {
            SceneCamera::Free(camera) => camera.view_matrix(),
            SceneCamera::Fixed(camera) => camera.view_matrix(),
            SceneCamera::Orbit(camera) => camera.view_matrix(),
        }
    }

    fn eye(&self) -> Point3<f32> {
        match self {
            SceneCamera::Free(camera) => camera.eye(),
            SceneCamera::Fixed(camera) => camera.eye(),
            SceneCamera::Orbit(camera) => camera.eye(),
        }
    }

    fn forward(&self) -> Vector3<f32> {
        match self {
            SceneCamera::Free(camera) => camera.forward(),
            SceneCamera::Fixed(camera) => camera.forward(),
            SceneCamera::Orbit(camera) => camera.forward(),
        }
    }

    fn lens(&self) -> &Lens {
        match self {
            SceneCamera::Free(camera) => camera.lens(),
            SceneCamera::Fixed(camera) => camera.lens(),
            SceneCamera::Orbit(camera) => camera.lens(),
        }
    }

    fn lens_mut(&mut self) -> &mut Lens {
        match self {
            SceneCamera::Free(camera) => camera.lens_mut(),
            SceneCamera::Fixed(camera) => camera.lens_mut(),
            SceneCamera::Orbit(camera) => camera.lens_mut(),
        }
    }
}

impl From<FreeCamera> for SceneCamera {
    fn from(camera: FreeCamera) -> Self {
        SceneCamera::Free(camera)
    }
}

impl From<FixedCamera> for SceneCamera {
    fn from(camera: FixedCamera) -> Self {
        SceneCamera::Fixed(camera)
    }
}

impl From<OrbitCamera> for SceneCamera {
    fn from(camera: OrbitCamera) -> Self {
        SceneCamera::Orbit(camera)
    }
}

/// Ordered set of cameras with a single active entry.
#[derive(Debug, Clone)]
pub struct CameraRig {
    cameras: Vec<SceneCamera>,
    active: usize,
}

impl CameraRig {
    /// Builds a rig whose first camera starts active. Returns `None` for an
    /// empty list since there would be nothing to render from.
    pub fn new(cameras: Vec<SceneCamera>) -> Option<Self> {
        if cameras.is_empty() {
            return None;
        }
        Some(Self { cameras, active: 0 })
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &SceneCamera {
        &self.cameras[self.active]
    }

    pub fn active_mut(&mut self) -> &mut SceneCamera {
        &mut self.cameras[self.active]
    }

    /// Steps to the next camera, wrapping to the first, and returns it.
    pub fn cycle(&mut self) -> &SceneCamera {
        self.active = (self.active + 1) % self.cameras.len();
        log::info!(
            "Switched to camera {} ({})",
            self.active,
            self.cameras[self.active].kind()
        );
        &self.cameras[self.active]
    }

    pub fn get(&self, index: usize) -> Option<&SceneCamera> {
        self.cameras.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut SceneCamera> {
        self.cameras.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }
}
