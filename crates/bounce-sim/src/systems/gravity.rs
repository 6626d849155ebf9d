//! Gravity system: friction decay followed by constant acceleration.

use bounce_core::enums::ComponentMask;
use bounce_core::types::deg_to_rad;

use crate::scheduler::System;
use crate::store::Store;
use crate::surface::RenderSurface;

/// For every entity with Gravity + Velocity: scale both velocity axes by the
/// entity's friction, then add `magnitude` along `direction` (degrees).
/// The damping and re-acceleration settle at a friction-dependent terminal
/// speed.
pub fn run(store: &mut Store) {
    for id in store.query(ComponentMask::GRAVITY | ComponentMask::VELOCITY) {
        let Some(gravity) = store.gravity(id).copied() else {
            continue;
        };
        if let Some(vel) = store.velocity_mut(id) {
            let angle = deg_to_rad(gravity.direction);
            vel.vx *= vel.friction;
            vel.vy *= vel.friction;
            vel.vx += angle.cos() * gravity.magnitude;
            vel.vy += angle.sin() * gravity.magnitude;
        }
    }
}

#[derive(Debug, Default)]
pub struct GravitySystem;

impl System for GravitySystem {
    fn name(&self) -> &'static str {
        "gravity"
    }

    fn update(&mut self, store: &mut Store, _surface: &mut dyn RenderSurface) {
        run(store);
    }
}
