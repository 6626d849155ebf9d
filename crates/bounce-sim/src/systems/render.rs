//! Render system: traces every circle as a filled polygon.
//!
//! No native arc primitive is assumed. Each circle is a closed path through
//! 37 vertices at 10° steps from 0° to 360° inclusive, so the last vertex
//! repeats the first.

use glam::DVec2;

use bounce_core::components::Position;
use bounce_core::constants::{CIRCLE_STEP_DEG, CIRCLE_VERTEX_COUNT};
use bounce_core::enums::ComponentMask;
use bounce_core::types::deg_to_rad;

use crate::scheduler::System;
use crate::store::Store;
use crate::surface::RenderSurface;

/// Polygon vertices for a circle. Angles run counter-clockwise on screen
/// (y is flipped), starting at `(cx + r, cy)`.
pub fn circle_vertices(center: &Position, radius: f64) -> Vec<DVec2> {
    (0..CIRCLE_VERTEX_COUNT as u32)
        .map(|k| {
            let angle = deg_to_rad(f64::from(k * CIRCLE_STEP_DEG));
            DVec2::new(
                center.x + angle.cos() * radius,
                center.y - angle.sin() * radius,
            )
        })
        .collect()
}

/// Draw every Position + Circle entity, once per canvas.
pub fn run(store: &Store, surface: &mut dyn RenderSurface) {
    let canvases = store.query(ComponentMask::CANVAS);
    let circles = store.query(ComponentMask::POSITION | ComponentMask::CIRCLE);

    for _canvas in &canvases {
        for &id in &circles {
            let (Some(pos), Some(circle)) = (store.position(id), store.circle(id)) else {
                continue;
            };
            let vertices = circle_vertices(pos, circle.radius);
            let Some((first, rest)) = vertices.split_first() else {
                continue;
            };

            surface.begin_path();
            surface.move_to(first.x, first.y);
            for v in rest {
                surface.line_to(v.x, v.y);
            }
            surface.close_path();
            surface.set_fill_style(circle.color);
            surface.fill();
        }
    }
}

#[derive(Debug, Default)]
pub struct RenderSystem;

impl System for RenderSystem {
    fn name(&self) -> &'static str {
        "render"
    }

    fn update(&mut self, store: &mut Store, surface: &mut dyn RenderSurface) {
        run(store, surface);
    }
}
