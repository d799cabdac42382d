use std::{fmt::Debug, hash::Hash};

use winit::{event::MouseButton, keyboard::KeyCode};

use super::state::ControlTracker;

/// A named logical action bound to one or more physical controls.
///
/// Every query is the logical OR of the same query over the bound triggers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding<K> {
    name: String,
    triggers: Vec<K>,
}

/// Action bound to keyboard keys (e.g. "jump" on Space or W).
pub type Button = Binding<KeyCode>;

/// Action bound to mouse buttons.
pub type MouseButtonBinding = Binding<MouseButton>;

impl<K> Binding<K>
where
    K: Copy + Eq + Hash + Debug,
{
    pub fn new(name: impl Into<String>, triggers: impl IntoIterator<Item = K>) -> Self {
        Self {
            name: name.into(),
            triggers: triggers.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn triggers(&self) -> &[K] {
        &self.triggers
    }

    /// True if any trigger went down this tick.
    pub fn just_pressed(&self, tracker: &ControlTracker<K>) -> bool {
        self.triggers.iter().any(|&t| tracker.just_pressed(t))
    }

    /// True if any trigger was let go this tick.
    pub fn just_released(&self, tracker: &ControlTracker<K>) -> bool {
        self.triggers.iter().any(|&t| tracker.just_released(t))
    }

    /// True if any trigger has been held for at least two ticks.
    pub fn down(&self, tracker: &ControlTracker<K>) -> bool {
        self.triggers.iter().any(|&t| tracker.down(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyManager;

    #[test]
    fn any_trigger_satisfies_the_button() {
        let keys = KeyManager::new();
        let jump = Button::new("jump", [KeyCode::Space, KeyCode::KeyW]);
        for &k in jump.triggers() {
            keys.register(k);
        }

        keys.sample_all(|k| k == KeyCode::KeyW);
        assert!(jump.just_pressed(&keys));
        assert!(!jump.down(&keys));

        keys.sample_all(|k| k == KeyCode::KeyW);
        assert!(jump.down(&keys));
        assert!(!jump.just_pressed(&keys));

        keys.sample_all(|_| false);
        assert!(jump.just_released(&keys));
    }

    #[test]
    fn binding_without_triggers_never_fires() {
        let keys = KeyManager::new();
        let empty = Button::new("nothing", []);
        assert!(!empty.just_pressed(&keys));
        assert!(!empty.down(&keys));
        assert_eq!(empty.name(), "nothing");
    }
}
