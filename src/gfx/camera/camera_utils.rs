use cgmath::{perspective, Deg, Matrix4, Point3, SquareMatrix, Vector3};

/// Remaps OpenGL clip depth [-1, 1] to wgpu's [0, 1]: `z' = 0.5 z + 0.5 w`.
/// Arguments are column by column.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// Field of view used at startup and restored when a punch zoom is released.
pub const DEFAULT_FOV: f32 = 90.0;
pub const MIN_FOV: f32 = 1.0;
pub const MAX_FOV: f32 = 90.0;

/// What the render stage needs from any camera kind.
pub trait Camera {
    /// World-to-view transform, recomputed on every call.
    fn view_matrix(&self) -> Matrix4<f32>;

    /// Position the scene is viewed from.
    fn eye(&self) -> Point3<f32>;

    /// Unit viewing direction. Used to aim the torch.
    fn forward(&self) -> Vector3<f32>;

    fn lens(&self) -> &Lens;

    fn lens_mut(&mut self) -> &mut Lens;
}

/// Field-of-view state owned by each camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lens {
    fov: f32,
}

impl Default for Lens {
    fn default() -> Self {
        Self { fov: DEFAULT_FOV }
    }
}

impl Lens {
    pub fn new(fov: f32) -> Self {
        Self {
            fov: fov.clamp(MIN_FOV, MAX_FOV),
        }
    }

    /// Vertical field of view in degrees, always within `[MIN_FOV, MAX_FOV]`.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Scroll zoom. Only narrows or widens while the zoom modifier is held,
    /// but the result is clamped either way.
    pub fn adjust_zoom(&mut self, scroll_delta: f32, modifier_active: bool) {
        if modifier_active {
            self.fov -= scroll_delta;
        }
        self.fov = self.fov.clamp(MIN_FOV, MAX_FOV);
    }

    /// Punch zoom keyed to the edges of a single button: a press divides the
    /// field of view by three, a release snaps back to [`DEFAULT_FOV`].
    pub fn toggle_zoom(&mut self, pressed: bool) {
        self.fov = if pressed {
            self.fov / 3.0
        } else {
            DEFAULT_FOV
        };
        self.fov = self.fov.clamp(MIN_FOV, MAX_FOV);
    }
}

/// Perspective projection parameters that do not belong to a camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Projection {
    pub fn new(width: u32, height: u32, znear: f32, zfar: f32) -> Self {
        let mut projection = Self {
            aspect: 1.0,
            znear,
            zfar,
        };
        projection.resize(width, height);
        projection
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        // A minimised window reports a zero height; keep the last aspect.
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn matrix(&self, fov_degrees: f32) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(Deg(fov_degrees), self.aspect, self.znear, self.zfar)
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct CameraUniform {
    /// The eye position of the camera in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fullfill the 16 byte alignment requirement.
    pub view_position: [f32; 4],

    /// Contains the view projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    /// Creates a default [CameraUniform].
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: convert_matrix4_to_array(Matrix4::identity()),
        }
    }
}

impl CameraUniform {
    /// Snapshot of `camera` as seen through `projection`.
    pub fn from_camera<C: Camera + ?Sized>(camera: &C, projection: &Projection) -> Self {
        let eye = camera.eye();
        let view_proj = projection.matrix(camera.lens().fov()) * camera.view_matrix();
        Self {
            view_position: [eye.x, eye.y, eye.z, 1.0],
            view_proj: convert_matrix4_to_array(view_proj),
        }
    }
}

pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    let mut result = [[0.0; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            result[i][j] = matrix4[i][j];
        }
    }

    result
}
