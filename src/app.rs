use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowAttributes, WindowId},
};

use crate::{
    config::ViewerConfig,
    error::{Result, ViewerError},
    gfx::{camera::CameraController, rendering::RenderEngine, scene::Scene},
    input::InputState,
    performance::FrameClock,
};

/// The viewer application: owns the event loop until [`ViewerApp::run`].
pub struct ViewerApp {
    event_loop: EventLoop<()>,
    app_state: AppState,
}

struct AppState {
    config: ViewerConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    scene: Scene,
    controller: CameraController,
    input: InputState,
    clock: FrameClock,
    // first fatal error raised inside a winit callback
    error: Option<ViewerError>,
}

impl ViewerApp {
    pub fn new(config: ViewerConfig) -> Result<Self> {
        config.validate()?;
        let event_loop = EventLoop::new()?;
        let scene = Scene::demo(&config)?;
        let controller = CameraController::new(&config);

        Ok(Self {
            event_loop,
            app_state: AppState {
                config,
                window: None,
                render_engine: None,
                scene,
                controller,
                input: InputState::new(),
                clock: FrameClock::new(),
                error: None,
            },
        })
    }

    /// Runs until the window closes or Escape is pressed.
    ///
    /// # Errors
    /// Returns the first error raised while setting up or rendering.
    pub fn run(mut self) -> Result<()> {
        self.event_loop.set_control_flow(ControlFlow::Poll);
        self.event_loop.run_app(&mut self.app_state)?;

        match self.app_state.error.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: ViewerError) {
        log::error!("{error}");
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }

    fn open_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let settings = &self.config.window;
        let window = Arc::new(
            event_loop.create_window(
                WindowAttributes::default()
                    .with_title(settings.title.as_str())
                    .with_inner_size(PhysicalSize::new(settings.width, settings.height)),
            )?,
        );
        capture_cursor(&window);

        let (width, height) = window.inner_size().into();
        let renderer = pollster::block_on(RenderEngine::new(
            window.clone(),
            width,
            height,
            &self.config.projection,
        ))?;
        renderer.prepare_scene(&mut self.scene);

        log::info!("Opened {width}x{height} window");
        self.window = Some(window);
        self.render_engine = Some(renderer);
        self.clock.reset();
        Ok(())
    }

    fn frame(&mut self) -> Result<()> {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return Ok(());
        };

        let dt = self.clock.tick();
        let scene = &mut self.scene;
        self.controller.update(
            &self.input,
            &mut scene.cameras,
            &mut scene.lighting,
            &mut scene.wheel,
            dt,
        );
        scene.update(dt);
        render_engine.render(scene)?;

        self.input.end_frame();
        Ok(())
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(error) = self.open_window(event_loop) {
            self.fail(event_loop, error);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        self.input.handle_window_event(&event);

        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            }
            | WindowEvent::CloseRequested => {
                log::info!("Exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(width, height);
                }
            }
            WindowEvent::Focused(true) => {
                if let Some(window) = self.window.as_ref() {
                    capture_cursor(window);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(error) = self.frame() {
                    self.fail(event_loop, error);
                }
            }
            _ => (),
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if self.window.is_some() {
            self.input.handle_device_event(&event);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

/// Hides the cursor and pins it for mouse look. Look reads raw device motion,
/// so the grab only keeps the pointer from wandering onto other windows.
/// Not every platform supports every grab mode, so failures only warn.
fn capture_cursor(window: &Window) {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
    if let Err(e) = grabbed {
        log::warn!("Could not grab cursor: {e}");
    }
    window.set_cursor_visible(false);
}
