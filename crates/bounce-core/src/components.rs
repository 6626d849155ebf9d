//! Components attached to simulation entities.
//!
//! Components are plain data structs with no methods.
//! Behavior lives in systems, not components. `Position` and `Velocity`
//! live in `types` because the geometry helpers operate on them directly.

use serde::{Deserialize, Serialize};

use crate::input::MousePosition;
use crate::types::Color;

pub use crate::types::{Position, Velocity};

/// Constant directional acceleration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Gravity {
    /// Acceleration per tick, in pixels per tick².
    pub magnitude: f64,
    /// Degrees, 0 = +x, 90 = +y (screen down).
    pub direction: f64,
}

/// Drawn and collided as a disc; there is no separate hitbox.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
    pub color: Color,
}

/// Steers velocity toward a target point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Follow {
    pub target_x: f64,
    pub target_y: f64,
    /// Fraction of the remaining offset covered per tick, in (0, 1].
    pub easing: f64,
}

/// The drawing surface's extent and the last mouse position observed on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub mouse: MousePosition,
}
