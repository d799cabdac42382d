//! Drift2D - camera, animation and input support for 2D games.
//!
//! The host owns the window and the frame loop. Once per tick it feeds device
//! state to the [`InputController`], then advances [`Camera`] and
//! [`Animation`] instances with their `update` methods. Renderers read the
//! camera transforms and the current animation frame rectangle.

pub mod animation;
pub mod camera;
pub mod collision;
pub mod config;
pub mod error;
pub mod input;
pub mod math;
pub mod object;
pub mod spritesheet;

pub use crate::animation::Animation;
pub use crate::camera::{Bounds, Camera};
pub use crate::collision::{Circle, Shape};
pub use crate::config::{CameraConfig, InputConfig, Settings};
pub use crate::error::{Error, Result};
pub use crate::input::{Button, ControlPhase, InputController, InputSource, Mouse, RawInput};
pub use crate::math::{Line, Rect, Vec2};
pub use crate::object::{BasicObject, ColliderKind, GameObject, Positioned};
pub use crate::spritesheet::{FrameSource, SourceRect, SpriteSheet};
pub use winit::{event::MouseButton, keyboard::KeyCode};
