//! Pointer input translated into surface-local coordinates.

use serde::{Deserialize, Serialize};

/// Mouse position relative to the drawing surface's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MousePosition {
    pub x: f64,
    pub y: f64,
}

/// A pointer-move event in client (window) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MouseEvent {
    pub client_x: f64,
    pub client_y: f64,
}

/// Placement of the drawing surface within the client area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect {
    pub left: f64,
    pub top: f64,
}

impl MouseEvent {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }

    /// Translate into coordinates local to the surface described by `rect`.
    pub fn to_surface_local(&self, rect: &BoundingRect) -> MousePosition {
        MousePosition {
            x: self.client_x - rect.left,
            y: self.client_y - rect.top,
        }
    }
}
