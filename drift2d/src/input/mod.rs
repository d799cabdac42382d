//! Edge-triggered keyboard and mouse input.
//!
//! The host feeds raw device state through an [`InputSource`]; once per tick
//! the [`InputController`] samples it, and game code queries named actions.

mod binding;
mod controller;
mod mouse;
mod raw;
mod state;

pub use binding::{Binding, Button, MouseButtonBinding};
pub use controller::InputController;
pub use mouse::Mouse;
pub use raw::RawInput;
pub use state::{ControlPhase, ControlState, ControlTracker, KeyManager};

use winit::{event::MouseButton, keyboard::KeyCode};

use crate::math::Vec2;

/// Polled view of the physical input devices.
pub trait InputSource {
    fn is_key_held(&self, key: KeyCode) -> bool;
    fn is_mouse_held(&self, button: MouseButton) -> bool;
    /// Cursor position in window pixels.
    fn cursor_position(&self) -> Vec2;
    /// Accumulated wheel position; only changes between ticks matter.
    fn wheel(&self) -> f64;
}
