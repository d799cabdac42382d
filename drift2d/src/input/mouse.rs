use std::sync::{PoisonError, RwLock};

use winit::event::MouseButton;

use super::{state::ControlTracker, InputSource};
use crate::math::Vec2;

#[derive(Clone, Copy, Debug, Default)]
struct Pointer {
    position: Vec2,
    wheel: f64,
    scroll: i32,
}

/// Mouse button edge tracker plus cursor position and wheel direction.
#[derive(Debug)]
pub struct Mouse {
    buttons: ControlTracker<MouseButton>,
    pointer: RwLock<Pointer>,
}

impl Mouse {
    /// Create a tracker watching the left, right and middle buttons.
    pub fn new() -> Self {
        let buttons = ControlTracker::new();
        for button in [MouseButton::Left, MouseButton::Right, MouseButton::Middle] {
            buttons.register(button);
        }
        Self {
            buttons,
            pointer: RwLock::new(Pointer::default()),
        }
    }

    /// Sample buttons, cursor and wheel from the host for this tick.
    pub fn update(&self, source: &dyn InputSource) {
        self.buttons.sample_all(|b| source.is_mouse_held(b));

        let mut pointer = self.pointer.write().unwrap_or_else(PoisonError::into_inner);
        let wheel = source.wheel();
        pointer.scroll = if wheel > pointer.wheel {
            1
        } else if wheel < pointer.wheel {
            -1
        } else {
            0
        };
        pointer.wheel = wheel;
        pointer.position = source.cursor_position();
    }

    pub fn buttons(&self) -> &ControlTracker<MouseButton> {
        &self.buttons
    }

    /// Cursor position in raw window coordinates.
    pub fn position(&self) -> Vec2 {
        self.pointer().position
    }

    /// `1` if the wheel moved up this tick, `-1` if down, `0` otherwise.
    pub fn scroll(&self) -> i32 {
        self.pointer().scroll
    }

    fn pointer(&self) -> Pointer {
        *self.pointer.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Mouse {
    fn default() -> Self {
        Self::new()
    }
}
