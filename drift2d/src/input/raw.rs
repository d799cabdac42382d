use std::collections::HashSet;

use winit::{
    event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use super::InputSource;
use crate::math::Vec2;

/// Raw device state accumulated from winit window events.
///
/// Feed it every `WindowEvent` as it arrives; the input controller polls it
/// once per tick through [`InputSource`].
#[derive(Clone, Debug, Default)]
pub struct RawInput {
    keys_down: HashSet<KeyCode>,
    mouse_down: HashSet<MouseButton>,
    cursor: Vec2,
    wheel: f64,
}

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle the window events relevant to input.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event),
            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_button(*button, *state)
            }
            WindowEvent::CursorMoved { position, .. } => self.set_cursor(position.x, position.y),
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(_, y) => self.scroll(f64::from(*y)),
                MouseScrollDelta::PixelDelta(pos) => self.scroll(pos.y),
            },
            // Keys released while unfocused never report, so drop everything.
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    /// Handle a keyboard input event from winit.
    pub fn handle_key(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(keycode) = event.physical_key {
            match event.state {
                ElementState::Pressed => self.press_key(keycode),
                ElementState::Released => self.release_key(keycode),
            }
        }
    }

    /// Handle a mouse button input event from winit.
    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        match state {
            ElementState::Pressed => self.press_mouse(button),
            ElementState::Released => self.release_mouse(button),
        }
    }

    pub fn press_key(&mut self, key: KeyCode) {
        self.keys_down.insert(key);
    }

    pub fn release_key(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
    }

    pub fn press_mouse(&mut self, button: MouseButton) {
        self.mouse_down.insert(button);
    }

    pub fn release_mouse(&mut self, button: MouseButton) {
        self.mouse_down.remove(&button);
    }

    /// Handle mouse cursor movement, in window pixels.
    pub fn set_cursor(&mut self, x: f64, y: f64) {
        self.cursor = Vec2::new(x, y);
    }

    /// Accumulate wheel movement. Positive values scroll up.
    pub fn scroll(&mut self, delta: f64) {
        self.wheel += delta;
    }

    pub fn release_all(&mut self) {
        self.keys_down.clear();
        self.mouse_down.clear();
    }
}

impl InputSource for RawInput {
    fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    fn is_mouse_held(&self, button: MouseButton) -> bool {
        self.mouse_down.contains(&button)
    }

    fn cursor_position(&self) -> Vec2 {
        self.cursor
    }

    fn wheel(&self) -> f64 {
        self.wheel
    }
}
