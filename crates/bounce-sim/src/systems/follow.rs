//! Follow systems: steer velocity toward a target point.
//!
//! `follow_mouse` refreshes the targets of `followMouse`-tagged entities from
//! the canvas mouse; `run` then sets each follower's velocity to the remaining
//! offset scaled by its easing. This is a direct positional correction, not a
//! spring, so the follower closes `easing` of the gap every tick.

use bounce_core::constants::FOLLOW_MOUSE_TAG;
use bounce_core::enums::ComponentMask;

use crate::scheduler::System;
use crate::store::Store;
use crate::surface::RenderSurface;

/// Copy the canvas mouse position into every mouse follower's target.
pub fn follow_mouse(store: &mut Store) {
    let followers = store.query_tagged(FOLLOW_MOUSE_TAG, ComponentMask::FOLLOW);
    for canvas_id in store.query(ComponentMask::CANVAS) {
        let Some(mouse) = store.canvas(canvas_id).map(|c| c.mouse) else {
            continue;
        };
        for &id in &followers {
            if let Some(follow) = store.follow_mut(id) {
                follow.target_x = mouse.x;
                follow.target_y = mouse.y;
            }
        }
    }
}

/// Set `velocity = (target - position) * easing` for every follower.
pub fn run(store: &mut Store) {
    let mask = ComponentMask::FOLLOW | ComponentMask::POSITION | ComponentMask::VELOCITY;
    for id in store.query(mask) {
        let (Some(follow), Some(pos)) = (store.follow(id).copied(), store.position(id).copied())
        else {
            continue;
        };
        if let Some(vel) = store.velocity_mut(id) {
            vel.vx = (follow.target_x - pos.x) * follow.easing;
            vel.vy = (follow.target_y - pos.y) * follow.easing;
        }
    }
}

#[derive(Debug, Default)]
pub struct FollowMouseSystem;

impl System for FollowMouseSystem {
    fn name(&self) -> &'static str {
        "follow_mouse"
    }

    fn update(&mut self, store: &mut Store, _surface: &mut dyn RenderSurface) {
        follow_mouse(store);
    }
}

#[derive(Debug, Default)]
pub struct FollowSystem;

impl System for FollowSystem {
    fn name(&self) -> &'static str {
        "follow"
    }

    fn update(&mut self, store: &mut Store, _surface: &mut dyn RenderSurface) {
        run(store);
    }
}
