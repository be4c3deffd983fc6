use cgmath::{InnerSpace, Matrix4, Point3, Vector3};

use super::camera_utils::{Camera, Lens};

/// Camera that looks from one explicit point at another.
///
/// Used for static viewpoints and for rigs whose eye is scripted every frame
/// (the cabin camera on the Ferris wheel). It does not react to keyboard or
/// mouse input. `eye` and `look_target` must differ; this is not checked.
#[derive(Debug, Clone, Copy)]
pub struct FixedCamera {
    eye: Point3<f32>,
    look_target: Point3<f32>,
    pub lens: Lens,
}

impl FixedCamera {
    pub fn new(eye: Point3<f32>, look_target: Point3<f32>) -> Self {
        Self {
            eye,
            look_target,
            lens: Lens::default(),
        }
    }

    pub fn set_eye(&mut self, eye: Point3<f32>) {
        self.eye = eye;
    }

    pub fn set_look_target(&mut self, look_target: Point3<f32>) {
        self.look_target = look_target;
    }

    pub fn look_target(&self) -> Point3<f32> {
        self.look_target
    }
}

impl Camera for FixedCamera {
    fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.eye, self.look_target, Vector3::unit_y())
    }

    fn eye(&self) -> Point3<f32> {
        self.eye
    }

    fn forward(&self) -> Vector3<f32> {
        (self.look_target - self.eye).normalize()
    }

    fn lens(&self) -> &Lens {
        &self.lens
    }

    fn lens_mut(&mut self) -> &mut Lens {
        &mut self.lens
    }
}
