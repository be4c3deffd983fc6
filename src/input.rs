//! Per-frame input state.
//!
//! winit delivers keyboard, mouse and wheel events one at a time between
//! frames. [`InputState`] folds them into something the per-frame update can
//! query: which keys are held, which changed since the previous frame, how far
//! the mouse moved and how much the wheel scrolled. Call
//! [`InputState::end_frame`] once the frame has consumed the input.
//!
//! Mouse look reads raw device motion rather than cursor positions, so it keeps
//! turning after a grabbed cursor reaches the window edge.

use std::collections::HashSet;

use cgmath::Vector2;
use winit::{
    event::{DeviceEvent, ElementState, KeyEvent, MouseScrollDelta, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

/// Pixel-precise trackpads report far larger values than wheel notches.
const PIXEL_SCROLL_SCALE: f32 = 0.01;

#[derive(Debug, Clone)]
pub struct InputState {
    held: HashSet<KeyCode>,
    previous: HashSet<KeyCode>,
    // transitions seen this frame, so a tap shorter than a frame still registers
    pressed: HashSet<KeyCode>,
    released: HashSet<KeyCode>,
    // drop the first motion after (re)gaining focus, which carries the grab jump
    skip_next_motion: bool,
    mouse_delta: Vector2<f32>,
    scroll_delta: f32,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            previous: HashSet::new(),
            pressed: HashSet::new(),
            released: HashSet::new(),
            skip_next_motion: true,
            mouse_delta: Vector2::new(0.0, 0.0),
            scroll_delta: 0.0,
        }
    }

    /// Feeds a window event in: keys, wheel and focus changes.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => self.set_key(*code, *state == ElementState::Pressed),
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll_delta += match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * PIXEL_SCROLL_SCALE,
                };
            }
            WindowEvent::Focused(focused) => {
                if !focused {
                    // Key releases that happen while unfocused never arrive.
                    self.released.extend(self.held.drain());
                }
                self.skip_next_motion = true;
            }
            _ => (),
        }
    }

    /// Feeds a device event in. Only raw mouse motion is used.
    pub fn handle_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.mouse_moved(*dx as f32, *dy as f32);
        }
    }

    pub fn set_key(&mut self, code: KeyCode, pressed: bool) {
        if pressed {
            let _ = self.held.insert(code);
            let _ = self.pressed.insert(code);
        } else {
            let _ = self.held.remove(&code);
            let _ = self.released.insert(code);
        }
    }

    /// Adds raw mouse motion. Device y grows downwards, so it is flipped to
    /// mean "up". The first sample after focus changes only re-arms tracking so
    /// the view does not jump.
    pub fn mouse_moved(&mut self, dx: f32, dy: f32) {
        if self.skip_next_motion {
            self.skip_next_motion = false;
            return;
        }
        self.mouse_delta.x += dx;
        self.mouse_delta.y -= dy;
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    /// True only on the frame the key went down.
    pub fn just_pressed(&self, code: KeyCode) -> bool {
        self.pressed.contains(&code) && !self.previous.contains(&code)
    }

    /// True only on the frame the key came up.
    pub fn just_released(&self, code: KeyCode) -> bool {
        self.released.contains(&code) && !self.held.contains(&code)
    }

    /// Mouse travel accumulated this frame, y pointing up.
    pub fn mouse_delta(&self) -> Vector2<f32> {
        self.mouse_delta
    }

    /// Wheel travel accumulated this frame, positive away from the user.
    pub fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }

    /// Rolls the held set into the previous-frame set and clears the
    /// per-frame accumulators.
    pub fn end_frame(&mut self) {
        self.previous.clone_from(&self.held);
        self.pressed.clear();
        self.released.clear();
        self.mouse_delta = Vector2::new(0.0, 0.0);
        self.scroll_delta = 0.0;
    }
}
