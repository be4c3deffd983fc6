//! Free-fly camera driven by yaw/pitch angles.

use cgmath::{Angle, Deg, EuclideanSpace, InnerSpace, Matrix4, Point3, Vector3};

use super::camera_utils::{Camera, Lens};

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;

/// Pitch limit in degrees. Looking straight up or down would make
/// `front × world_up` vanish and flip the basis.
pub const PITCH_LIMIT: f32 = 89.0;

/// Discrete movement commands understood by [`FreeCamera::translate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy)]
pub struct FreeCamera {
    pub position: Point3<f32>,
    front: Vector3<f32>,
    up: Vector3<f32>,
    right: Vector3<f32>,
    world_up: Vector3<f32>,
    yaw: f32,
    pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub lens: Lens,
}

impl Default for FreeCamera {
    fn default() -> Self {
        Self::new(Point3::origin())
    }
}

impl FreeCamera {
    /// Camera at `position` with the default orientation (looking down -Z).
    pub fn new(position: Point3<f32>) -> Self {
        Self::with_orientation(position, Vector3::unit_y(), DEFAULT_YAW, DEFAULT_PITCH)
    }

    pub fn with_orientation(
        position: Point3<f32>,
        world_up: Vector3<f32>,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        let mut camera = Self {
            position,
            front: -Vector3::unit_z(),
            up: world_up,
            right: Vector3::unit_x(),
            world_up,
            yaw,
            pitch,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            lens: Lens::default(),
        };
        camera.update_vectors();
        camera
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn front(&self) -> Vector3<f32> {
        self.front
    }

    pub fn right(&self) -> Vector3<f32> {
        self.right
    }

    pub fn up(&self) -> Vector3<f32> {
        self.up
    }

    pub fn world_up(&self) -> Vector3<f32> {
        self.world_up
    }

    /// Moves along the camera basis by `movement_speed * dt`. No bounds.
    pub fn translate(&mut self, direction: Movement, dt: f32) {
        let velocity = self.movement_speed * dt;
        let offset = match direction {
            Movement::Forward => self.front * velocity,
            Movement::Backward => -self.front * velocity,
            Movement::Left => -self.right * velocity,
            Movement::Right => self.right * velocity,
            Movement::Up => self.world_up * velocity,
            Movement::Down => -self.world_up * velocity,
        };
        self.position += offset;
    }

    /// Applies a mouse delta to yaw and pitch and rebuilds the basis.
    pub fn rotate(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch += dy * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    // front first, then right, then up: the operand order keeps the basis right-handed
    fn update_vectors(&mut self) {
        let (yaw, pitch) = (Deg(self.yaw), Deg(self.pitch));
        let front = Vector3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = front.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Camera for FreeCamera {
    fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    fn eye(&self) -> Point3<f32> {
        self.position
    }

    fn forward(&self) -> Vector3<f32> {
        self.front
    }

    fn lens(&self) -> &Lens {
        &self.lens
    }

    fn lens_mut(&mut self) -> &mut Lens {
        &mut self.lens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const EPS: f32 = 1e-5;

    fn assert_vec_near(actual: Vector3<f32>, expected: Vector3<f32>) {
        assert!(
            (actual - expected).magnitude() < EPS,
            "expected {expected:?}, got {actual:?}"
        );
    }

    fn assert_orthonormal(camera: &FreeCamera) {
        let (f, r, u) = (camera.front(), camera.right(), camera.up());
        assert!((f.magnitude() - 1.0).abs() < EPS);
        assert!((r.magnitude() - 1.0).abs() < EPS);
        assert!((u.magnitude() - 1.0).abs() < EPS);
        assert!(f.dot(r).abs() < EPS);
        assert!(f.dot(u).abs() < EPS);
        assert!(r.dot(u).abs() < EPS);
        // right-handed: right × up points backwards
        assert_vec_near(r.cross(u), -f);
    }

    #[test]
    fn test_default_orientation_looks_down_negative_z() {
        let camera = FreeCamera::new(Point3::new(0.0, 0.0, 3.0));
        assert_vec_near(camera.front(), Vector3::new(0.0, 0.0, -1.0));
        assert_vec_near(camera.right(), Vector3::new(1.0, 0.0, 0.0));
        assert_vec_near(camera.up(), Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_forward_movement() {
        let mut camera = FreeCamera::new(Point3::new(0.0, 0.0, 3.0));
        camera.translate(Movement::Forward, 1.0);
        assert_vec_near(camera.position.to_vec(), Vector3::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn test_each_direction_moves_along_basis() {
        let mut camera = FreeCamera::new(Point3::origin());
        camera.movement_speed = 1.0;

        camera.translate(Movement::Right, 2.0);
        assert_vec_near(camera.position.to_vec(), Vector3::new(2.0, 0.0, 0.0));
        camera.translate(Movement::Left, 2.0);
        camera.translate(Movement::Up, 1.0);
        assert_vec_near(camera.position.to_vec(), Vector3::new(0.0, 1.0, 0.0));
        camera.translate(Movement::Down, 1.0);
        camera.translate(Movement::Backward, 1.0);
        assert_vec_near(camera.position.to_vec(), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_zero_dt_does_not_move() {
        let mut camera = FreeCamera::new(Point3::new(1.0, 2.0, 3.0));
        camera.translate(Movement::Forward, 0.0);
        assert_eq!(camera.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_basis_stays_orthonormal() {
        let mut rng = rand::rng();
        let mut camera = FreeCamera::default();
        for _ in 0..500 {
            camera.rotate(
                rng.random_range(-2000.0..2000.0),
                rng.random_range(-2000.0..2000.0),
                true,
            );
            assert_orthonormal(&camera);
        }
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut rng = rand::rng();
        let mut camera = FreeCamera::default();
        for _ in 0..500 {
            let dy = rng.random_range(-1.0e6..1.0e6);
            camera.rotate(0.0, dy, true);
            assert!((-PITCH_LIMIT..=PITCH_LIMIT).contains(&camera.pitch()));
        }

        camera.rotate(0.0, 10_000.0, true);
        assert_eq!(camera.pitch(), PITCH_LIMIT);
        camera.rotate(0.0, -10_000.0, true);
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn test_unconstrained_pitch_passes_through() {
        let mut camera = FreeCamera::default();
        camera.rotate(0.0, 1000.0, false);
        assert!((camera.pitch() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_rotation_scales_by_sensitivity() {
        let mut camera = FreeCamera::default();
        camera.rotate(10.0, 5.0, true);
        assert!((camera.yaw() - (DEFAULT_YAW + 1.0)).abs() < 1e-4);
        assert!((camera.pitch() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_view_matrix_puts_front_on_negative_z() {
        let mut camera = FreeCamera::new(Point3::new(4.0, -1.0, 2.0));
        camera.rotate(137.0, 42.0, true);

        let ahead = camera.position + camera.front() * 3.0;
        let in_view = camera.view_matrix() * ahead.to_homogeneous();
        assert!(in_view.x.abs() < 1e-4);
        assert!(in_view.y.abs() < 1e-4);
        assert!((in_view.z + 3.0).abs() < 1e-4);
    }
}
