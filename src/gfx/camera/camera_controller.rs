use winit::keyboard::KeyCode;

use crate::{
    config::{CameraConfig, ViewerConfig},
    gfx::{lighting::Lighting, scene::ferris_wheel::FerrisWheel},
    input::InputState,
};

use super::{
    camera_rig::{CameraRig, SceneCamera},
    camera_utils::Camera,
    free_camera::{FreeCamera, Movement},
    orbit_camera::OrbitCamera,
};

const NEXT_CAMERA: KeyCode = KeyCode::Digit0;
const ZOOM: KeyCode = KeyCode::KeyC;
const SPRINT: KeyCode = KeyCode::ShiftLeft;
const TORCH: KeyCode = KeyCode::KeyT;
const WHEEL_SPIN: KeyCode = KeyCode::KeyF;
const WHEEL_REVERSE: KeyCode = KeyCode::KeyR;
const WHEEL_FASTER: KeyCode = KeyCode::Equal;
const WHEEL_SLOWER: KeyCode = KeyCode::Minus;

const FREE_BINDINGS: [(KeyCode, Movement); 6] = [
    (KeyCode::KeyW, Movement::Forward),
    (KeyCode::KeyS, Movement::Backward),
    (KeyCode::KeyA, Movement::Left),
    (KeyCode::KeyD, Movement::Right),
    (KeyCode::Space, Movement::Up),
    (KeyCode::ControlLeft, Movement::Down),
];

/// Maps one frame of input onto the active camera, the torch and the wheel.
///
/// Only the active camera is touched. Cameras that are switched away from keep
/// whatever state they had.
#[derive(Debug, Clone)]
pub struct CameraController {
    settings: CameraConfig,
    wheel_speed_step: f32,
}

impl CameraController {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            settings: config.camera.clone(),
            wheel_speed_step: config.wheel.speed_step,
        }
    }

    pub fn update(
        &self,
        input: &InputState,
        cameras: &mut CameraRig,
        lighting: &mut Lighting,
        wheel: &mut FerrisWheel,
        dt: f32,
    ) {
        if input.just_pressed(NEXT_CAMERA) {
            cameras.cycle();
        }

        match cameras.active_mut() {
            SceneCamera::Free(camera) => self.drive_free(input, camera, dt),
            SceneCamera::Orbit(camera) => self.drive_orbit(input, camera, dt),
            SceneCamera::Fixed(_) => {}
        }

        let lens = cameras.active_mut().lens_mut();
        let scroll = input.scroll_delta();
        if scroll != 0.0 {
            lens.adjust_zoom(scroll, input.is_held(ZOOM));
        }
        // a tap inside one frame reports both edges; apply them in order
        if input.just_pressed(ZOOM) {
            lens.toggle_zoom(true);
        }
        if input.just_released(ZOOM) {
            lens.toggle_zoom(false);
        }

        if input.just_pressed(TORCH) {
            let on = lighting.torch.toggle();
            log::info!("Torch {}", if on { "on" } else { "off" });
        }

        self.drive_wheel(input, wheel, dt);
    }

    fn drive_free(&self, input: &InputState, camera: &mut FreeCamera, dt: f32) {
        camera.movement_speed = if input.is_held(SPRINT) {
            self.settings.walk_speed * self.settings.sprint_multiplier
        } else {
            self.settings.walk_speed
        };

        for (key, direction) in FREE_BINDINGS {
            if input.is_held(key) {
                camera.translate(direction, dt);
            }
        }

        let delta = input.mouse_delta() * self.settings.cursor_scale;
        if delta.x != 0.0 || delta.y != 0.0 {
            camera.rotate(delta.x, delta.y, true);
        }
    }

    fn drive_orbit(&self, input: &InputState, camera: &mut OrbitCamera, dt: f32) {
        let rate = if input.is_held(SPRINT) {
            self.settings.orbit_rate * 2.0
        } else {
            self.settings.orbit_rate
        };

        let center_step = self.settings.center_speed * dt;
        if input.is_held(KeyCode::ArrowUp) {
            camera.raise_center(center_step);
        }
        if input.is_held(KeyCode::ArrowDown) {
            camera.lower_center(center_step);
        }

        let radius_step = self.settings.radius_speed * dt;
        if input.is_held(KeyCode::ArrowRight) {
            camera.grow_radius(radius_step);
        }
        if input.is_held(KeyCode::ArrowLeft) {
            camera.shrink_radius(radius_step);
        }

        camera.advance(rate * dt);
        camera.look_at_center();
    }

    fn drive_wheel(&self, input: &InputState, wheel: &mut FerrisWheel, dt: f32) {
        if input.just_pressed(WHEEL_SPIN) {
            let spinning = wheel.toggle_spin();
            log::info!("Ferris wheel {}", if spinning { "started" } else { "stopped" });
        }
        if input.just_pressed(WHEEL_REVERSE) {
            let reversed = wheel.reverse();
            log::info!("Ferris wheel reversed: {reversed}");
        }

        let step = self.wheel_speed_step * dt;
        if input.is_held(WHEEL_FASTER) {
            wheel.speed_up(step);
        }
        if input.is_held(WHEEL_SLOWER) {
            wheel.slow_down(step);
        }
        if input.just_released(WHEEL_FASTER) || input.just_released(WHEEL_SLOWER) {
            log::debug!("Ferris wheel speed {:.2} rad/s", wheel.angular_speed());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::{
        camera_utils::{DEFAULT_FOV, MAX_FOV, MIN_FOV},
        fixed_camera::FixedCamera,
    };
    use cgmath::{InnerSpace, Point3};

    struct Harness {
        controller: CameraController,
        input: InputState,
        cameras: CameraRig,
        lighting: Lighting,
        wheel: FerrisWheel,
    }

    impl Harness {
        fn new() -> Self {
            let config = ViewerConfig::default();
            let cameras = CameraRig::new(vec![
                FreeCamera::new(Point3::new(0.0, 0.0, 3.0)).into(),
                FixedCamera::new(Point3::new(0.0, 0.0, 3.0), Point3::new(0.0, 0.0, -1.0)).into(),
                OrbitCamera::new(Point3::new(0.0, 0.0, 0.0), 5.0).into(),
            ])
            .unwrap();
            Self {
                controller: CameraController::new(&config),
                input: InputState::new(),
                cameras,
                lighting: Lighting::default(),
                wheel: FerrisWheel::new(Point3::new(0.0, 5.0, -10.0), &config.wheel),
            }
        }

        fn frame(&mut self, dt: f32) {
            self.controller.update(
                &self.input,
                &mut self.cameras,
                &mut self.lighting,
                &mut self.wheel,
                dt,
            );
            self.input.end_frame();
        }

        fn tap(&mut self, key: KeyCode) {
            self.input.set_key(key, true);
            self.frame(0.0);
            self.input.set_key(key, false);
            self.frame(0.0);
        }
    }

    #[test]
    fn test_zero_cycles_on_press_only() {
        let mut h = Harness::new();
        h.input.set_key(KeyCode::Digit0, true);
        h.frame(0.0);
        assert_eq!(h.cameras.active_index(), 1);

        // still held: no further switch
        h.frame(0.0);
        assert_eq!(h.cameras.active_index(), 1);

        h.input.set_key(KeyCode::Digit0, false);
        h.frame(0.0);
        assert_eq!(h.cameras.active_index(), 1);
    }

    #[test]
    fn test_three_taps_return_to_start() {
        let mut h = Harness::new();
        for _ in 0..3 {
            h.tap(KeyCode::Digit0);
        }
        assert_eq!(h.cameras.active_index(), 0);
    }

    #[test]
    fn test_walk_forward_uses_configured_speed() {
        let mut h = Harness::new();
        h.input.set_key(KeyCode::KeyW, true);
        h.frame(0.5);

        let eye = h.cameras.active().eye();
        // walk_speed 5 for half a second along -Z
        assert!((eye - Point3::new(0.0, 0.0, 0.5)).magnitude() < 1e-4);
    }

    #[test]
    fn test_sprint_doubles_speed() {
        let mut h = Harness::new();
        h.input.set_key(KeyCode::ShiftLeft, true);
        h.input.set_key(KeyCode::KeyD, true);
        h.frame(0.1);

        let eye = h.cameras.active().eye();
        assert!((eye.x - 1.0).abs() < 1e-4);
        match h.cameras.active() {
            SceneCamera::Free(camera) => assert_eq!(camera.movement_speed, 10.0),
            other => panic!("expected free camera, got {}", other.kind()),
        }
    }

    fn free_angles(h: &Harness) -> (f32, f32, f32) {
        match h.cameras.active() {
            SceneCamera::Free(camera) => (camera.yaw(), camera.pitch(), camera.mouse_sensitivity),
            other => panic!("expected free camera, got {}", other.kind()),
        }
    }

    #[test]
    fn test_mouse_look_keeps_turning_over_long_sweeps() {
        let mut h = Harness::new();
        let (yaw0, _, sensitivity) = free_angles(&h);
        let scale = ViewerConfig::default().camera.cursor_scale;

        h.input.mouse_moved(0.0, 0.0);
        for _ in 0..10 {
            h.input.mouse_moved(400.0, 0.0);
            h.frame(0.016);
        }
        let (yaw, _, _) = free_angles(&h);
        assert!((yaw - (yaw0 + 4000.0 * scale * sensitivity)).abs() < 1e-3);
    }

    #[test]
    fn test_mouse_up_pitches_up() {
        let mut h = Harness::new();
        let (_, pitch0, sensitivity) = free_angles(&h);
        let scale = ViewerConfig::default().camera.cursor_scale;

        h.input.mouse_moved(0.0, 0.0);
        // device y grows downwards
        h.input.mouse_moved(0.0, -20.0);
        h.frame(0.016);
        let (_, pitch, _) = free_angles(&h);
        assert!((pitch - (pitch0 + 20.0 * scale * sensitivity)).abs() < 1e-4);
        assert!(h.cameras.active().forward().y > 0.0);
    }

    #[test]
    fn test_fixed_camera_ignores_movement_keys() {
        let mut h = Harness::new();
        h.tap(KeyCode::Digit0);
        let before = h.cameras.active().view_matrix();

        h.input.set_key(KeyCode::KeyW, true);
        h.input.set_key(KeyCode::ArrowUp, true);
        h.frame(1.0);
        assert_eq!(h.cameras.active().view_matrix(), before);
    }

    #[test]
    fn test_inactive_free_camera_keeps_state() {
        let mut h = Harness::new();
        h.tap(KeyCode::Digit0);
        h.input.set_key(KeyCode::KeyW, true);
        h.frame(1.0);

        let free = h.cameras.get(0).unwrap();
        assert!((free.eye() - Point3::new(0.0, 0.0, 3.0)).magnitude() < 1e-6);
    }

    #[test]
    fn test_orbit_advances_and_tracks_center() {
        let mut h = Harness::new();
        h.tap(KeyCode::Digit0);
        h.tap(KeyCode::Digit0);

        h.input.set_key(KeyCode::ArrowUp, true);
        h.frame(0.2);

        match h.cameras.active() {
            SceneCamera::Orbit(camera) => {
                assert!((camera.angle() - 0.2).abs() < 1e-5);
                assert!((camera.center().y - 1.0).abs() < 1e-5);
                assert_eq!(camera.look_target(), camera.center());
            }
            other => panic!("expected orbit camera, got {}", other.kind()),
        }
    }

    #[test]
    fn test_orbit_radius_keys_respect_minimum() {
        let mut h = Harness::new();
        h.tap(KeyCode::Digit0);
        h.tap(KeyCode::Digit0);

        h.input.set_key(KeyCode::ArrowLeft, true);
        h.frame(10.0);
        match h.cameras.active() {
            SceneCamera::Orbit(camera) => assert_eq!(camera.radius(), 1.0),
            other => panic!("expected orbit camera, got {}", other.kind()),
        }
    }

    #[test]
    fn test_punch_zoom_round_trip() {
        let mut h = Harness::new();
        h.input.set_key(KeyCode::KeyC, true);
        h.frame(0.0);
        assert!((h.cameras.active().lens().fov() - DEFAULT_FOV / 3.0).abs() < 1e-5);

        h.input.set_key(KeyCode::KeyC, false);
        h.frame(0.0);
        assert_eq!(h.cameras.active().lens().fov(), DEFAULT_FOV);
    }

    #[test]
    fn test_quick_zoom_tap_restores_fov() {
        let mut h = Harness::new();
        h.input.set_key(KeyCode::KeyC, true);
        h.input.set_key(KeyCode::KeyC, false);
        h.frame(0.0);
        assert_eq!(h.cameras.active().lens().fov(), DEFAULT_FOV);

        h.frame(0.0);
        assert_eq!(h.cameras.active().lens().fov(), DEFAULT_FOV);
    }

    #[test]
    fn test_torch_toggles_on_edge() {
        let mut h = Harness::new();
        assert!(!h.lighting.torch.enabled);
        h.tap(KeyCode::KeyT);
        assert!(h.lighting.torch.enabled);
        h.tap(KeyCode::KeyT);
        assert!(!h.lighting.torch.enabled);
    }

    #[test]
    fn test_wheel_keys() {
        let mut h = Harness::new();
        let spinning = h.wheel.is_spinning();
        h.tap(KeyCode::KeyF);
        assert_eq!(h.wheel.is_spinning(), !spinning);

        h.tap(KeyCode::KeyR);
        assert!(h.wheel.is_reversed());

        let speed = h.wheel.angular_speed();
        h.input.set_key(KeyCode::Equal, true);
        h.frame(1.0);
        assert!(h.wheel.angular_speed() > speed);
    }

    #[test]
    fn test_random_scroll_keeps_fov_in_range() {
        use rand::Rng;

        let mut rng = rand::rng();
        let mut h = Harness::new();
        h.input.set_key(KeyCode::KeyC, true);
        h.frame(0.0);
        for _ in 0..200 {
            let lens = h.cameras.active_mut().lens_mut();
            lens.adjust_zoom(rng.random_range(-50.0..50.0), rng.random_bool(0.5));
            let fov = h.cameras.active().lens().fov();
            assert!((MIN_FOV..=MAX_FOV).contains(&fov));
        }
    }
}
