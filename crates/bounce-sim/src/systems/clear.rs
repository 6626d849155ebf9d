//! Clear system: erases every canvas before the frame is redrawn.

use bounce_core::enums::ComponentMask;

use crate::scheduler::System;
use crate::store::Store;
use crate::surface::RenderSurface;

pub fn run(store: &Store, surface: &mut dyn RenderSurface) {
    for id in store.query(ComponentMask::CANVAS) {
        if let Some(canvas) = store.canvas(id) {
            surface.clear_rect(0.0, 0.0, canvas.width, canvas.height);
        }
    }
}

#[derive(Debug, Default)]
pub struct ClearSystem;

impl System for ClearSystem {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn update(&mut self, store: &mut Store, surface: &mut dyn RenderSurface) {
        run(store, surface);
    }
}
