use cgmath::{InnerSpace, Matrix4, Point3, Vector3};

use super::camera_utils::{Camera, Lens};

/// Smallest orbit radius. Anything closer lets the eye reach the center and
/// the look-at transform degenerates.
pub const MIN_RADIUS: f32 = 1.0;

/// Camera circling a movable center in the horizontal plane.
///
/// The eye is only recomputed by [`OrbitCamera::advance`], and the look target
/// is only resynced by [`OrbitCamera::look_at_center`]. Moving the center or
/// changing the radius takes effect on the eye at the next advance, and on the
/// look target once the caller resyncs it.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    center: Point3<f32>,
    radius: f32,
    angle: f32,
    eye: Point3<f32>,
    look_target: Point3<f32>,
    pub lens: Lens,
}

impl OrbitCamera {
    /// Orbit at angle zero, looking at `center`.
    pub fn new(center: Point3<f32>, radius: f32) -> Self {
        let radius = radius.max(MIN_RADIUS);
        Self {
            center,
            radius,
            angle: 0.0,
            eye: orbit_position(center, radius, 0.0),
            look_target: center,
            lens: Lens::default(),
        }
    }

    pub fn center(&self) -> Point3<f32> {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Orbit angle in radians.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn look_target(&self) -> Point3<f32> {
        self.look_target
    }

    pub fn look_at_center(&mut self) {
        self.look_target = self.center;
    }

    pub fn advance(&mut self, delta_angle: f32) {
        self.angle += delta_angle;
        self.eye = orbit_position(self.center, self.radius, self.angle);
    }

    pub fn raise_center(&mut self, dh: f32) {
        self.center.y += dh;
    }

    pub fn lower_center(&mut self, dh: f32) {
        self.center.y -= dh;
    }

    pub fn grow_radius(&mut self, dr: f32) {
        self.radius += dr;
    }

    pub fn shrink_radius(&mut self, dr: f32) {
        self.radius = (self.radius - dr).max(MIN_RADIUS);
    }
}

impl Camera for OrbitCamera {
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

fn orbit_position(center: Point3<f32>, radius: f32, angle: f32) -> Point3<f32> {
    center + Vector3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}
