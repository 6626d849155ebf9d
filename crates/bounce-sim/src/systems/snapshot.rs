//! Builds the `FrameSnapshot` handed to the frame driver after each tick.

use bounce_core::enums::{ComponentMask, ScenePreset};
use bounce_core::state::{CircleView, FrameSnapshot};

use crate::store::Store;

pub fn build_snapshot(store: &Store, tick: u64, scene: ScenePreset) -> FrameSnapshot {
    let mouse = store
        .query(ComponentMask::CANVAS)
        .first()
        .and_then(|&id| store.canvas(id))
        .map(|c| c.mouse)
        .unwrap_or_default();

    let circles = store
        .query(ComponentMask::POSITION | ComponentMask::CIRCLE)
        .into_iter()
        .filter_map(|id| {
            let view = store.view(id)?;
            let pos = view.position?;
            let circle = view.circle?;
            let (vx, vy) = view.velocity.map(|v| (v.vx, v.vy)).unwrap_or((0.0, 0.0));
            Some(CircleView {
                id: id.index,
                x: pos.x,
                y: pos.y,
                vx,
                vy,
                radius: circle.radius,
                color: circle.color,
                tags: view.tags.to_vec(),
            })
        })
        .collect();

    FrameSnapshot {
        tick,
        scene,
        mouse,
        circles,
    }
}
