//! The 2D drawing surface the render systems talk to.
//!
//! `RenderSurface` mirrors the subset of a canvas 2D context the simulation
//! uses. `RecordingSurface` captures the calls as `DrawCommand`s so frames
//! can be inspected headlessly or replayed onto a real canvas.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use bounce_core::types::Color;

pub trait RenderSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn set_fill_style(&mut self, color: Color);
    fn fill(&mut self);
}

/// One recorded surface call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    BeginPath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    ClosePath,
    SetFillStyle(Color),
    Fill,
}

/// A closed path that was filled, reassembled from a command stream.
#[derive(Debug, Clone, PartialEq)]
pub struct FilledPolygon {
    pub color: Color,
    pub vertices: Vec<DVec2>,
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Hand the recorded commands to the caller, leaving the surface empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Every filled path, in draw order, with the fill style active at `fill`.
    pub fn filled_polygons(&self) -> Vec<FilledPolygon> {
        let mut polygons = Vec::new();
        let mut path: Vec<DVec2> = Vec::new();
        let mut color = Color::default();

        for command in &self.commands {
            match *command {
                DrawCommand::BeginPath => path.clear(),
                DrawCommand::MoveTo { x, y } | DrawCommand::LineTo { x, y } => {
                    path.push(DVec2::new(x, y));
                }
                DrawCommand::SetFillStyle(c) => color = c,
                DrawCommand::Fill => polygons.push(FilledPolygon {
                    color,
                    vertices: path.clone(),
                }),
                DrawCommand::ClearRect { .. } | DrawCommand::ClosePath => {}
            }
        }
        polygons
    }
}

impl RenderSurface for RecordingSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn set_fill_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFillStyle(color));
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reassembles_filled_paths() {
        let mut surface = RecordingSurface::new();
        surface.clear_rect(0.0, 0.0, 10.0, 10.0);
        surface.begin_path();
        surface.move_to(1.0, 1.0);
        surface.line_to(2.0, 1.0);
        surface.line_to(2.0, 2.0);
        surface.close_path();
        surface.set_fill_style(Color::BLUE);
        surface.fill();

        let polygons = surface.filled_polygons();
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].color, Color::BLUE);
        assert_eq!(polygons[0].vertices.len(), 3);
        assert_eq!(polygons[0].vertices[0], DVec2::new(1.0, 1.0));
    }

    #[test]
    fn take_commands_empties_surface() {
        let mut surface = RecordingSurface::new();
        surface.begin_path();
        surface.fill();
        assert_eq!(surface.take_commands().len(), 2);
        assert!(surface.commands().is_empty());
    }
}
