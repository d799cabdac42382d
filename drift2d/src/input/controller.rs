use std::collections::HashMap;

use winit::{event::MouseButton, keyboard::KeyCode};

use super::{
    binding::{Button, MouseButtonBinding},
    mouse::Mouse,
    state::{ControlState, KeyManager},
    InputSource,
};
use crate::{camera::Camera, config::InputConfig, math::Vec2};

/// Input context handed to game code.
///
/// Owns the keyboard and mouse trackers and the named action registries.
/// Call [`InputController::update`] exactly once per tick.
#[derive(Debug)]
pub struct InputController {
    keys: KeyManager,
    mouse: Mouse,
    buttons: HashMap<String, Button>,
    mouse_buttons: HashMap<String, MouseButtonBinding>,
}

impl InputController {
    /// Create a controller with `LeftMouse`, `RightMouse` and `MiddleMouse`
    /// already bound.
    pub fn new() -> Self {
        let mut controller = Self {
            keys: KeyManager::new(),
            mouse: Mouse::new(),
            buttons: HashMap::new(),
            mouse_buttons: HashMap::new(),
        };
        controller.register_mouse_button("LeftMouse", [MouseButton::Left]);
        controller.register_mouse_button("RightMouse", [MouseButton::Right]);
        controller.register_mouse_button("MiddleMouse", [MouseButton::Middle]);
        controller
    }

    /// Bind a named action to keyboard keys, replacing any previous binding.
    ///
    /// A key action shadows a mouse action of the same name.
    pub fn register_button(&mut self, name: &str, keys: impl IntoIterator<Item = KeyCode>) {
        if self.mouse_buttons.contains_key(name) {
            log::warn!("Key action {name:?} hides the mouse action of the same name");
        }
        let button = Button::new(name, keys);
        for &key in button.triggers() {
            self.keys.register(key);
        }
        self.buttons.insert(name.to_string(), button);
    }

    /// Bind a named action to mouse buttons, replacing any previous binding.
    pub fn register_mouse_button(
        &mut self,
        name: &str,
        buttons: impl IntoIterator<Item = MouseButton>,
    ) {
        if self.buttons.contains_key(name) {
            log::warn!("Mouse action {name:?} is hidden by the key action of the same name");
        }
        let binding = MouseButtonBinding::new(name, buttons);
        for &button in binding.triggers() {
            self.mouse.buttons().register(button);
        }
        self.mouse_buttons.insert(name.to_string(), binding);
    }

    /// Register every binding in `config`.
    pub fn apply_config(&mut self, config: &InputConfig) {
        for (name, keys) in &config.buttons {
            self.register_button(name, keys.iter().copied());
        }
        for (name, buttons) in &config.mouse_buttons {
            self.register_mouse_button(name, buttons.iter().copied());
        }
    }

    /// Sample every tracked control from the host.
    pub fn update(&self, source: &dyn InputSource) {
        self.keys.sample_all(|k| source.is_key_held(k));
        self.mouse.update(source);
    }

    pub fn button(&self, name: &str) -> Option<&Button> {
        self.buttons.get(name)
    }

    pub fn mouse_button(&self, name: &str) -> Option<&MouseButtonBinding> {
        self.mouse_buttons.get(name)
    }

    /// True if the named action was pressed this tick.
    pub fn just_pressed(&self, name: &str) -> bool {
        self.query(name, |b| b.just_pressed(&self.keys), |m| {
            m.just_pressed(self.mouse.buttons())
        })
    }

    /// True if the named action was released this tick.
    pub fn just_released(&self, name: &str) -> bool {
        self.query(name, |b| b.just_released(&self.keys), |m| {
            m.just_released(self.mouse.buttons())
        })
    }

    /// True if the named action is being held.
    pub fn down(&self, name: &str) -> bool {
        self.query(name, |b| b.down(&self.keys), |m| m.down(self.mouse.buttons()))
    }

    pub fn keys(&self) -> &KeyManager {
        &self.keys
    }

    pub fn mouse(&self) -> &Mouse {
        &self.mouse
    }

    pub fn left_click(&self) -> ControlState {
        self.mouse.buttons().get(MouseButton::Left)
    }

    pub fn right_click(&self) -> ControlState {
        self.mouse.buttons().get(MouseButton::Right)
    }

    /// Cursor position in raw window coordinates.
    pub fn cursor_position(&self) -> Vec2 {
        self.mouse.position()
    }

    /// Cursor position in world coordinates seen through `camera`.
    pub fn world_mouse(&self, camera: &Camera) -> Vec2 {
        camera.screen_to_world(self.mouse.position())
    }

    /// Cursor position shifted by the camera but not scaled by its zoom.
    ///
    /// Useful for drawing a cursor sprite at a constant size.
    pub fn world_mouse_ignore_zoom(&self, camera: &Camera) -> Vec2 {
        self.mouse.position() + camera.position()
    }

    fn query(
        &self,
        name: &str,
        key_query: impl Fn(&Button) -> bool,
        mouse_query: impl Fn(&MouseButtonBinding) -> bool,
    ) -> bool {
        if let Some(button) = self.buttons.get(name) {
            return key_query(button);
        }
        if let Some(binding) = self.mouse_buttons.get(name) {
            return mouse_query(binding);
        }
        log::debug!("Queried unbound input action {name:?}");
        false
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new()
    }
}
