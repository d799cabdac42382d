use std::{
    collections::HashMap,
    fmt::Debug,
    hash::Hash,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use winit::keyboard::KeyCode;

/// Edge state of a control, derived from its last two samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlPhase {
    Up,
    Down,
    JustPressed,
    JustReleased,
}

/// Two-sample shift register for one physical key or button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlState {
    last: bool,
    current: bool,
}

impl ControlState {
    /// Shift the current sample into the last slot and record a new one.
    pub fn sample(&mut self, held: bool) {
        self.last = self.current;
        self.current = held;
    }

    pub fn phase(&self) -> ControlPhase {
        match (self.last, self.current) {
            (false, false) => ControlPhase::Up,
            (false, true) => ControlPhase::JustPressed,
            (true, true) => ControlPhase::Down,
            (true, false) => ControlPhase::JustReleased,
        }
    }

    pub fn up(&self) -> bool {
        !self.last && !self.current
    }

    pub fn down(&self) -> bool {
        self.last && self.current
    }

    pub fn just_pressed(&self) -> bool {
        !self.last && self.current
    }

    pub fn just_released(&self) -> bool {
        self.last && !self.current
    }
}

/// Tracks the edge state of a set of controls, sampled once per tick.
///
/// Queries take a shared lock and may come from any thread; sampling takes
/// the exclusive lock.
#[derive(Debug)]
pub struct ControlTracker<K> {
    controls: RwLock<HashMap<K, ControlState>>,
}

/// Keyboard tracker keyed by physical key code.
pub type KeyManager = ControlTracker<KeyCode>;

impl<K> ControlTracker<K>
where
    K: Copy + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self {
            controls: RwLock::new(HashMap::new()),
        }
    }

    /// Start tracking a control. Registering twice keeps the existing state.
    pub fn register(&self, id: K) {
        self.write().entry(id).or_default();
    }

    pub fn is_registered(&self, id: K) -> bool {
        self.read().contains_key(&id)
    }

    /// Record one sample for a single control.
    pub fn sample(&self, id: K, held: bool) {
        self.write().entry(id).or_default().sample(held);
    }

    /// Sample every registered control under a single write lock.
    pub fn sample_all(&self, mut held: impl FnMut(K) -> bool) {
        for (&id, state) in self.write().iter_mut() {
            state.sample(held(id));
        }
    }

    /// Current state of a control.
    ///
    /// An unknown control is registered on the spot and reports `Up`.
    pub fn get(&self, id: K) -> ControlState {
        if let Some(state) = self.read().get(&id) {
            return *state;
        }
        log::trace!("Auto-registering untracked control {id:?}");
        *self.write().entry(id).or_default()
    }

    pub fn phase(&self, id: K) -> ControlPhase {
        self.get(id).phase()
    }

    pub fn up(&self, id: K) -> bool {
        self.get(id).up()
    }

    pub fn down(&self, id: K) -> bool {
        self.get(id).down()
    }

    pub fn just_pressed(&self, id: K) -> bool {
        self.get(id).just_pressed()
    }

    pub fn just_released(&self, id: K) -> bool {
        self.get(id).just_released()
    }

    /// Number of tracked controls.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<K, ControlState>> {
        self.controls.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<K, ControlState>> {
        self.controls.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K> Default for ControlTracker<K>
where
    K: Copy + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_after(samples: &[bool]) -> ControlState {
        let mut state = ControlState::default();
        for &held in samples {
            state.sample(held);
        }
        state
    }

    #[test]
    fn phase_table() {
        assert_eq!(state_after(&[false, false]).phase(), ControlPhase::Up);
        assert_eq!(state_after(&[false, true]).phase(), ControlPhase::JustPressed);
        assert_eq!(state_after(&[true, true]).phase(), ControlPhase::Down);
        assert_eq!(state_after(&[true, false]).phase(), ControlPhase::JustReleased);
    }

    #[test]
    fn shortcuts_agree_with_phase() {
        for samples in [[false, false], [false, true], [true, true], [true, false]] {
            let state = state_after(&samples);
            let phase = state.phase();
            assert_eq!(state.up(), phase == ControlPhase::Up);
            assert_eq!(state.down(), phase == ControlPhase::Down);
            assert_eq!(state.just_pressed(), phase == ControlPhase::JustPressed);
            assert_eq!(state.just_released(), phase == ControlPhase::JustReleased);
        }
    }

    #[test]
    fn register_is_idempotent() {
        let keys = KeyManager::new();
        keys.register(KeyCode::Space);
        keys.sample(KeyCode::Space, true);
        keys.register(KeyCode::Space);
        assert_eq!(keys.len(), 1);
        assert!(keys.just_pressed(KeyCode::Space));
    }

    #[test]
    fn unknown_control_is_registered_as_up() {
        let keys = KeyManager::new();
        assert!(!keys.is_registered(KeyCode::KeyQ));
        assert_eq!(keys.phase(KeyCode::KeyQ), ControlPhase::Up);
        assert!(keys.is_registered(KeyCode::KeyQ));
    }

    #[test]
    fn sample_all_polls_every_registered_control() {
        let keys = KeyManager::new();
        keys.register(KeyCode::KeyA);
        keys.register(KeyCode::KeyD);
        keys.sample_all(|k| k == KeyCode::KeyA);
        assert!(keys.just_pressed(KeyCode::KeyA));
        assert!(keys.up(KeyCode::KeyD));
        keys.sample_all(|_| false);
        assert!(keys.just_released(KeyCode::KeyA));
    }

    #[test]
    fn queries_from_other_threads_see_samples() {
        let keys = std::sync::Arc::new(KeyManager::new());
        keys.register(KeyCode::Enter);
        keys.sample_all(|_| true);
        keys.sample_all(|_| true);

        let reader = {
            let keys = std::sync::Arc::clone(&keys);
            std::thread::spawn(move || keys.down(KeyCode::Enter))
        };
        assert!(reader.join().unwrap());
    }
}
