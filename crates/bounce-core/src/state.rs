//! Frame snapshot: the visible state produced after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::ScenePreset;
use crate::input::MousePosition;
use crate::types::Color;

/// Everything a viewer needs to redraw one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Number of completed ticks.
    pub tick: u64,
    pub scene: ScenePreset,
    pub mouse: MousePosition,
    pub circles: Vec<CircleView>,
}

/// One drawn circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleView {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub color: Color,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl FrameSnapshot {
    /// Total kinetic proxy (sum of squared speeds), handy for damping checks.
    pub fn speed_squared_sum(&self) -> f64 {
        self.circles
            .iter()
            .map(|c| c.vx * c.vx + c.vy * c.vy)
            .sum()
    }
}
