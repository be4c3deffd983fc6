//! Scene lights and their GPU layout.
//!
//! The scene has one light of each kind: a directional "sun", a point lamp
//! near the centerpiece and a spot light (the torch) that rides on whichever
//! camera is active. Every field is padded out to a `vec4` so the structs
//! match WGSL uniform layout rules without manual offsets.

use cgmath::{Deg, InnerSpace, Point3, Vector3};

/// Light falloff `1 / (constant + linear d + quadratic d²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Default for Attenuation {
    /// Falloff reaching roughly fifty units.
    fn default() -> Self {
        Self {
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
        }
    }
}

impl Attenuation {
    fn to_raw(self) -> [f32; 4] {
        [self.constant, self.linear, self.quadratic, 0.0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vector3<f32>,
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vector3::new(-0.2, -1.0, -0.3),
            ambient: [0.8; 3],
            diffuse: [0.4; 3],
            specular: [0.5; 3],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Point3<f32>,
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub attenuation: Attenuation,
}

impl Default for PointLight {
    fn default() -> Self {
        let color = [1.0, 1.0, 1.0];
        Self {
            position: Point3::new(1.2, 1.0, 2.0),
            ambient: scale(color, 0.1),
            diffuse: scale(color, 0.8),
            specular: color,
            attenuation: Attenuation::default(),
        }
    }
}

/// Cone light carried by the active camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    pub position: Point3<f32>,
    pub direction: Vector3<f32>,
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub attenuation: Attenuation,
    /// Full intensity inside this half-angle.
    pub inner_cutoff: Deg<f32>,
    /// Zero intensity outside this half-angle.
    pub outer_cutoff: Deg<f32>,
    pub enabled: bool,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 0.0),
            direction: Vector3::new(0.0, 0.0, -1.0),
            ambient: [0.0; 3],
            diffuse: [1.0; 3],
            specular: [1.0; 3],
            attenuation: Attenuation::default(),
            inner_cutoff: Deg(25.0),
            outer_cutoff: Deg(30.0),
            enabled: false,
        }
    }
}

impl SpotLight {
    /// Flips the torch and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Moves the torch to a camera's eye and aims it along its view.
    pub fn follow(&mut self, eye: Point3<f32>, forward: Vector3<f32>) {
        self.position = eye;
        self.direction = forward;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lighting {
    pub directional: DirectionalLight,
    pub point: PointLight,
    pub torch: SpotLight,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DirectionalLightRaw {
    direction: [f32; 4],
    ambient: [f32; 4],
    diffuse: [f32; 4],
    specular: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightRaw {
    position: [f32; 4],
    ambient: [f32; 4],
    diffuse: [f32; 4],
    specular: [f32; 4],
    attenuation: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpotLightRaw {
    position: [f32; 4],
    direction: [f32; 4],
    ambient: [f32; 4],
    diffuse: [f32; 4],
    specular: [f32; 4],
    attenuation: [f32; 4],
    /// cos(inner), cos(outer), enabled flag, unused
    cone: [f32; 4],
}

/// Everything the fragment shader needs to light a surface.
/// MUST match `Lighting` in `shader.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    directional: DirectionalLightRaw,
    point: PointLightRaw,
    spot: SpotLightRaw,
    /// shininess, unused, unused, unused
    material: [f32; 4],
}

impl LightingUniform {
    pub fn new(lighting: &Lighting, shininess: f32) -> Self {
        let sun = &lighting.directional;
        let lamp = &lighting.point;
        let torch = &lighting.torch;
        let direction = sun.direction.normalize();

        Self {
            directional: DirectionalLightRaw {
                direction: [direction.x, direction.y, direction.z, 0.0],
                ambient: extend(sun.ambient),
                diffuse: extend(sun.diffuse),
                specular: extend(sun.specular),
            },
            point: PointLightRaw {
                position: [lamp.position.x, lamp.position.y, lamp.position.z, 1.0],
                ambient: extend(lamp.ambient),
                diffuse: extend(lamp.diffuse),
                specular: extend(lamp.specular),
                attenuation: lamp.attenuation.to_raw(),
            },
            spot: SpotLightRaw {
                position: [torch.position.x, torch.position.y, torch.position.z, 1.0],
                direction: [torch.direction.x, torch.direction.y, torch.direction.z, 0.0],
                ambient: extend(torch.ambient),
                diffuse: extend(torch.diffuse),
                specular: extend(torch.specular),
                attenuation: torch.attenuation.to_raw(),
                cone: [
                    cgmath::Angle::cos(torch.inner_cutoff),
                    cgmath::Angle::cos(torch.outer_cutoff),
                    if torch.enabled { 1.0 } else { 0.0 },
                    0.0,
                ],
            },
            material: [shininess, 0.0, 0.0, 0.0],
        }
    }
}

fn scale(color: [f32; 3], factor: f32) -> [f32; 3] {
    color.map(|c| c * factor)
}

fn extend(color: [f32; 3]) -> [f32; 4] {
    [color[0], color[1], color[2], 0.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_size_is_vec4_aligned() {
        assert_eq!(std::mem::size_of::<LightingUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<LightingUniform>(), 64 + 80 + 112 + 16);
    }

    #[test]
    fn test_torch_starts_off_and_toggles() {
        let mut lighting = Lighting::default();
        assert!(!lighting.torch.enabled);
        assert!(lighting.torch.toggle());
        assert!(!lighting.torch.toggle());
    }

    #[test]
    fn test_torch_cone_is_packed_as_cosines() {
        let mut lighting = Lighting::default();
        let _ = lighting.torch.toggle();
        let uniform = LightingUniform::new(&lighting, 32.0);

        assert!((uniform.spot.cone[0] - 25.0f32.to_radians().cos()).abs() < 1e-6);
        assert!((uniform.spot.cone[1] - 30.0f32.to_radians().cos()).abs() < 1e-6);
        assert_eq!(uniform.spot.cone[2], 1.0);
        assert_eq!(uniform.material[0], 32.0);
    }

    #[test]
    fn test_torch_follows_camera() {
        let mut torch = SpotLight::default();
        torch.follow(Point3::new(1.0, 2.0, 3.0), Vector3::new(0.0, -1.0, 0.0));
        let uniform = LightingUniform::new(
            &Lighting {
                torch,
                ..Default::default()
            },
            32.0,
        );
        assert_eq!(uniform.spot.position, [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(uniform.spot.direction, [0.0, -1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_sun_direction_is_normalized() {
        let uniform = LightingUniform::new(&Lighting::default(), 32.0);
        let d = uniform.directional.direction;
        let len = (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt();
        assert!((len - 1.0).abs() < 1e-6);
    }
}
