//! Kinematic integration system.
//!
//! Explicit Euler with a unit time step: one tick is one display refresh, so
//! velocity is already in pixels per tick.

use bounce_core::enums::ComponentMask;

use crate::scheduler::System;
use crate::store::Store;
use crate::surface::RenderSurface;

/// Run integration for all entities with Position + Velocity.
pub fn run(store: &mut Store) {
    for id in store.query(ComponentMask::POSITION | ComponentMask::VELOCITY) {
        let Some(vel) = store.velocity(id).copied() else {
            continue;
        };
        if let Some(pos) = store.position_mut(id) {
            pos.x += vel.vx;
            pos.y += vel.vy;
        }
    }
}

#[derive(Debug, Default)]
pub struct IntegrateSystem;

impl System for IntegrateSystem {
    fn name(&self) -> &'static str {
        "integrate"
    }

    fn update(&mut self, store: &mut Store, _surface: &mut dyn RenderSurface) {
        run(store);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounce_core::components::{Position, Velocity};

    #[test]
    fn adds_velocity_exactly() {
        let mut store = Store::new();
        let id = store.spawn();
        store.attach(id, Position::new(10.5, -2.25)).unwrap();
        store.attach(id, Velocity::new(0.25, 3.0, 0.5)).unwrap();

        run(&mut store);

        assert_eq!(store.position(id), Some(&Position::new(10.75, 0.75)));
        // Velocity is read, never written.
        assert_eq!(store.velocity(id), Some(&Velocity::new(0.25, 3.0, 0.5)));
    }

    #[test]
    fn position_without_velocity_stays_put() {
        let mut store = Store::new();
        let id = store.spawn();
        store.attach(id, Position::new(1.0, 2.0)).unwrap();
        run(&mut store);
        assert_eq!(store.position(id), Some(&Position::new(1.0, 2.0)));
    }
}
