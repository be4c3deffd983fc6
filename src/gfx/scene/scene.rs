use std::ops::Range;

use cgmath::{EuclideanSpace, Matrix4, Point3, Vector3};

use crate::{
    config::ViewerConfig,
    error::{Result, ViewerError},
    gfx::{
        camera::{
            camera_rig::{CameraRig, SceneCamera},
            camera_utils::{Camera, CameraUniform, Projection},
            fixed_camera::FixedCamera,
            free_camera::FreeCamera,
            orbit_camera::OrbitCamera,
        },
        geometry::{generate_cube, generate_plane},
        lighting::{Lighting, LightingUniform},
    },
};

use super::{ferris_wheel::FerrisWheel, object::Object};

const GROUND_LEVEL: f32 = -1.0;
const WHEEL_HUB: Point3<f32> = Point3::new(0.0, 5.5, -12.0);
/// Where the cabin camera sits relative to the cabin center: just outside
/// the front wall so the cabin itself does not block the view.
const RIDER_OFFSET: Vector3<f32> = Vector3::new(0.0, 0.1, 0.6);

const CENTERPIECE_COLOR: [f32; 3] = [0.87, 0.35, 0.1];
const GROUND_COLOR: [f32; 3] = [0.35, 0.45, 0.35];
const FRAME_COLOR: [f32; 3] = [0.75, 0.75, 0.8];
const LAMP_COLOR: [f32; 3] = [1.0, 1.0, 0.9];

/// Object slots the wheel animation rewrites every frame.
#[derive(Debug, Clone)]
struct WheelParts {
    hub: usize,
    spokes: Range<usize>,
    cabins: Range<usize>,
}

/// The demo scene: cameras, lights, the Ferris wheel and everything drawn.
pub struct Scene {
    pub cameras: CameraRig,
    pub lighting: Lighting,
    pub wheel: FerrisWheel,
    pub objects: Vec<Object>,
    /// Rig slot of the camera that rides in the first cabin.
    cabin_camera: Option<usize>,
    wheel_parts: WheelParts,
    shininess: f32,
    clear_color: [f32; 3],
}

impl Scene {
    /// Builds the stock scene. Cameras are ordered free, fixed, orbit, cabin.
    pub fn demo(config: &ViewerConfig) -> Result<Self> {
        let wheel = FerrisWheel::new(WHEEL_HUB, &config.wheel);

        let mut free = FreeCamera::new(Point3::new(0.0, 0.0, 3.0));
        free.movement_speed = config.camera.walk_speed;
        free.mouse_sensitivity = config.camera.mouse_sensitivity;

        let fixed = FixedCamera::new(Point3::new(0.0, 0.0, 3.0), Point3::new(0.0, 0.0, -1.0));
        let orbit = OrbitCamera::new(Point3::origin(), 5.0);
        let cabin = FixedCamera::new(wheel.cabin_position(0) + RIDER_OFFSET, Point3::origin());

        let mut rig: Vec<SceneCamera> = vec![free.into(), fixed.into(), orbit.into()];
        let cabin_camera = rig.len();
        rig.push(cabin.into());
        let cameras = CameraRig::new(rig).ok_or(ViewerError::NoCameras)?;

        let lighting = Lighting::default();
        let mut objects = vec![
            Object::new("Ground", &generate_plane(60.0, 60.0, 1, 1), GROUND_COLOR)
                .with_transform(Matrix4::from_translation(Vector3::new(0.0, GROUND_LEVEL, 0.0))),
            Object::new("Centerpiece", &generate_cube(), CENTERPIECE_COLOR),
            Object::new("Lamp", &generate_cube(), LAMP_COLOR).with_transform(
                Matrix4::from_translation(lighting.point.position.to_vec()) * Matrix4::from_scale(0.2),
            ),
        ];

        // two pillars either side of the wheel plane, from the ground up to the axle
        let pillar_height = WHEEL_HUB.y - GROUND_LEVEL;
        for (name, dz) in [("Pillar Front", 0.9), ("Pillar Back", -0.9)] {
            let base = Vector3::new(WHEEL_HUB.x, GROUND_LEVEL + pillar_height * 0.5, WHEEL_HUB.z + dz);
            objects.push(
                Object::new(name, &generate_cube(), FRAME_COLOR).with_transform(
                    Matrix4::from_translation(base)
                        * Matrix4::from_nonuniform_scale(0.3, pillar_height, 0.3),
                ),
            );
        }

        let hub = objects.len();
        objects.push(Object::new("Wheel Hub", &generate_cube(), FRAME_COLOR));

        let count = wheel.cabin_count() as usize;
        let spokes = objects.len()..objects.len() + count;
        for i in 0..count {
            objects.push(Object::new(&format!("Spoke {i}"), &generate_cube(), FRAME_COLOR));
        }

        let cabins = objects.len()..objects.len() + count;
        for i in 0..count {
            objects.push(Object::new(&format!("Cabin {i}"), &generate_cube(), cabin_color(i, count)));
        }

        let mut scene = Self {
            cameras,
            lighting,
            wheel,
            objects,
            cabin_camera: Some(cabin_camera),
            wheel_parts: WheelParts { hub, spokes, cabins },
            shininess: config.scene.shininess,
            clear_color: config.scene.clear_color,
        };
        scene.place_wheel_parts();
        scene.follow_active_camera();
        Ok(scene)
    }

    pub fn clear_color(&self) -> wgpu::Color {
        let [r, g, b] = self.clear_color;
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        }
    }

    /// Advances animation by `dt` and moves everything attached to it.
    ///
    /// Call after input has been applied for the frame, with the same `dt`.
    pub fn update(&mut self, dt: f32) {
        self.wheel.advance(dt);
        self.place_wheel_parts();

        if let Some(SceneCamera::Fixed(rider)) =
            self.cabin_camera.and_then(|index| self.cameras.get_mut(index))
        {
            rider.set_eye(self.wheel.cabin_position(0) + RIDER_OFFSET);
        }

        self.follow_active_camera();
    }

    fn place_wheel_parts(&mut self) {
        let parts = &self.wheel_parts;
        self.objects[parts.hub].transform = self.wheel.hub_transform();
        for (i, slot) in parts.spokes.clone().enumerate() {
            self.objects[slot].transform = self.wheel.spoke_transform(i as u32);
        }
        for (i, slot) in parts.cabins.clone().enumerate() {
            self.objects[slot].transform = self.wheel.cabin_transform(i as u32);
        }
    }

    fn follow_active_camera(&mut self) {
        let camera = self.cameras.active();
        self.lighting.torch.follow(camera.eye(), camera.forward());
    }

    pub fn camera_uniform(&self, projection: &Projection) -> CameraUniform {
        CameraUniform::from_camera(self.cameras.active(), projection)
    }

    pub fn lighting_uniform(&self) -> LightingUniform {
        LightingUniform::new(&self.lighting, self.shininess)
    }

    pub fn init_gpu_resources(&mut self, device: &wgpu::Device, layout: &wgpu::BindGroupLayout) {
        for object in &mut self.objects {
            object.init_gpu_resources(device, layout);
        }
        log::debug!("Uploaded {} scene objects", self.objects.len());
    }

    /// Pushes changed object transforms to the GPU
    pub fn sync_gpu(&mut self, queue: &wgpu::Queue) {
        for object in &mut self.objects {
            object.sync_gpu(queue);
        }
    }
}

/// Spreads cabin colors around the hue circle.
fn cabin_color(index: usize, count: usize) -> [f32; 3] {
    let hue = index as f32 / count.max(1) as f32 * 6.0;
    let x = 1.0 - ((hue % 2.0) - 1.0).abs();
    match hue as u32 {
        0 => [1.0, x, 0.2],
        1 => [x, 1.0, 0.2],
        2 => [0.2, 1.0, x],
        3 => [0.2, x, 1.0],
        4 => [x, 0.2, 1.0],
        _ => [1.0, 0.2, x],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    fn scene() -> Scene {
        Scene::demo(&ViewerConfig::default()).unwrap()
    }

    #[test]
    fn test_demo_has_four_cameras_in_order() {
        let mut scene = scene();
        let kinds: Vec<&str> = (0..4).map(|_| scene.cameras.cycle().kind()).collect();
        assert_eq!(kinds, ["fixed", "orbit", "fixed", "free"]);
    }

    #[test]
    fn test_free_camera_uses_configured_speed() {
        let scene = scene();
        match scene.cameras.active() {
            SceneCamera::Free(camera) => assert_eq!(camera.movement_speed, 5.0),
            other => panic!("expected free camera, got {}", other.kind()),
        }
    }

    #[test]
    fn test_object_layout() {
        let scene = scene();
        // ground, centerpiece, lamp, two pillars, hub, 8 spokes, 8 cabins
        assert_eq!(scene.objects.len(), 6 + 16);
        assert_eq!(scene.objects[scene.wheel_parts.cabins.start].name, "Cabin 0");
    }

    fn rider_slot(scene: &Scene) -> usize {
        scene.cabin_camera.unwrap()
    }

    #[test]
    fn test_cabin_slot_holds_the_rider() {
        let mut scene = scene();
        let slot = rider_slot(&scene);
        assert_eq!(slot, scene.cameras.len() - 1);
        assert!(matches!(scene.cameras.get(slot), Some(SceneCamera::Fixed(_))));

        // cycling lands on the same camera the wheel moves
        for _ in 0..slot {
            let _ = scene.cameras.cycle();
        }
        scene.update(0.25);
        let expected = scene.wheel.cabin_position(0) + RIDER_OFFSET;
        assert!((scene.cameras.active().eye() - expected).magnitude() < 1e-5);
    }

    #[test]
    fn test_cabin_camera_rides_the_wheel() {
        let mut scene = scene();
        let slot = rider_slot(&scene);
        let before = scene.cameras.get(slot).unwrap().eye();
        scene.update(1.0);
        let after = scene.cameras.get(slot).unwrap().eye();

        assert!((after - before).magnitude() > 1e-3);
        let expected = scene.wheel.cabin_position(0) + RIDER_OFFSET;
        assert!((after - expected).magnitude() < 1e-5);
    }

    #[test]
    fn test_cabin_objects_track_wheel() {
        let mut scene = scene();
        scene.update(0.5);
        let slot = scene.wheel_parts.cabins.start + 2;
        let translation = scene.objects[slot].transform.w.truncate();
        let expected = scene.wheel.cabin_position(2).to_vec();
        assert!((translation - expected).magnitude() < 1e-5);
    }

    #[test]
    fn test_torch_follows_active_camera() {
        let mut scene = scene();
        let _ = scene.cameras.cycle();
        let _ = scene.cameras.cycle();
        scene.update(0.0);

        let orbit_eye = scene.cameras.active().eye();
        assert_eq!(scene.lighting.torch.position, orbit_eye);
    }

    #[test]
    fn test_cabin_colors_are_distinct() {
        let colors: Vec<[f32; 3]> = (0..8).map(|i| cabin_color(i, 8)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
