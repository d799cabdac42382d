//! Serializable tuning for the camera and input bindings.

use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};
use winit::{event::MouseButton, keyboard::KeyCode};

use crate::error::{read_to_string, Error, Result};

/// Camera tuning values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Largest zoom factor (closest view).
    pub max_zoom_in: f64,
    /// Smallest zoom factor (widest view).
    pub max_zoom_out: f64,
    /// Zoom change applied by a single `zoom_in`/`zoom_out` call.
    pub zoom_step: f64,
    /// Calls ignored after each zoom step.
    pub zoom_cooldown_ticks: u32,
    /// Distance travelled per tick while moving to a destination.
    pub free_float_speed: f64,
    /// Distance under which a moving camera snaps onto its destination.
    pub arrival_radius: f64,
    /// Per-tick multiplier applied to the shake radius.
    pub shake_decay: f64,
    /// Shake radius under which shaking stops.
    pub shake_min_radius: f64,
    /// Round the camera position to whole pixels after every move.
    pub pixel_snap: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            max_zoom_in: 2.0,
            max_zoom_out: 0.1,
            zoom_step: 0.01,
            zoom_cooldown_ticks: 1,
            free_float_speed: 4.0,
            arrival_radius: 5.0,
            shake_decay: 0.9,
            shake_min_radius: 0.2,
            pixel_snap: false,
        }
    }
}

impl CameraConfig {
    /// Reject values the camera cannot work with.
    ///
    /// Zoom bounds must be positive and ordered, the glide speed positive, and
    /// the shake decay strictly between 0 and 1 so a shake always ends.
    pub fn validate(&self) -> Result<()> {
        let invalid = |field, reason| Err(Error::InvalidConfig { field, reason });
        // Negated comparisons so NaN is rejected too.
        if !(self.max_zoom_out > 0.0) {
            return invalid("max_zoom_out", "must be greater than 0");
        }
        if !(self.max_zoom_out <= self.max_zoom_in) {
            return invalid("max_zoom_out", "must not exceed max_zoom_in");
        }
        if !(self.free_float_speed > 0.0) {
            return invalid("free_float_speed", "must be greater than 0");
        }
        if !(self.shake_decay > 0.0 && self.shake_decay < 1.0) {
            return invalid("shake_decay", "must be between 0 and 1 exclusive");
        }
        Ok(())
    }
}

/// Named action bindings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub buttons: BTreeMap<String, Vec<KeyCode>>,
    pub mouse_buttons: BTreeMap<String, Vec<MouseButton>>,
}

/// Top-level settings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub camera: CameraConfig,
    pub input: InputConfig,
}

impl Settings {
    /// Parse settings from JSON text. Missing fields take their defaults.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(text)?;
        settings.camera.validate()?;
        Ok(settings)
    }

    /// Read and parse a JSON settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = Self::from_json_str(&read_to_string(path)?)?;
        log::info!(
            "Loaded settings from {} ({} buttons, {} mouse buttons)",
            path.display(),
            settings.input.buttons.len(),
            settings.input.mouse_buttons.len()
        );
        Ok(settings)
    }
}
