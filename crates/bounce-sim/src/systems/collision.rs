//! Collision system: circle/circle overlap resolution, then arena clamping.
//!
//! Brute force over every pair. Circles are copied out of the store in
//! insertion order, resolved in place, and written back, so pair indices
//! are stable from tick to tick.

use glam::DVec2;
use log::debug;

use bounce_core::enums::{CollisionResponse, ComponentMask};
use bounce_core::types::{Arena, EntityId};

use crate::scheduler::System;
use crate::store::Store;
use crate::surface::RenderSurface;

/// Working copy of one circle during resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub id: EntityId,
    pub pos: DVec2,
    pub vel: DVec2,
    pub friction: f64,
    pub radius: f64,
}

/// Unit vector from `from` toward `to` and the distance between them.
/// Coincident centers fall back to +x (direction 0).
fn separation(from: DVec2, to: DVec2) -> (DVec2, f64) {
    let delta = to - from;
    let distance = delta.length();
    if distance > 0.0 {
        (delta / distance, distance)
    } else {
        (DVec2::X, 0.0)
    }
}

/// Resolve each unordered pair once (j < i). Overlapping circles are pushed
/// apart by half the overlap each along the line of centers, then both
/// velocities decay by their own friction.
pub fn resolve_ordered(bodies: &mut [Body]) {
    for i in 0..bodies.len() {
        for j in 0..i {
            let (a, b) = (bodies[i], bodies[j]);
            let (dir, distance) = separation(a.pos, b.pos);
            let padding = a.radius + b.radius - distance;
            if padding <= 0.0 {
                continue;
            }
            if distance == 0.0 {
                debug!("{} and {} share a center; separating along +x", a.id, b.id);
            }

            let push = dir * (padding / 2.0);
            bodies[i].pos -= push;
            bodies[j].pos += push;
            bodies[i].vel *= a.friction;
            bodies[j].vel *= b.friction;
        }
    }
}

/// Test every ordered pair independently. On overlap the first circle is
/// nudged one pixel away from the other and the component of its velocity
/// along the line of centers is negated. Since each pair is visited from both
/// sides, both circles bounce. Coincident centers are skipped.
pub fn resolve_negate(bodies: &mut [Body]) {
    for i in 0..bodies.len() {
        for j in 0..bodies.len() {
            if i == j {
                continue;
            }
            let (a, b) = (bodies[i], bodies[j]);
            let (dir, distance) = separation(a.pos, b.pos);
            if distance <= 0.0 {
                continue;
            }
            if a.radius + b.radius - distance > 0.0 {
                let along = a.vel.dot(dir);
                bodies[i].pos -= dir;
                bodies[i].vel -= dir * (2.0 * along);
            }
        }
    }
}

/// Clamp a circle inside the arena. A velocity component is inverted only
/// while it points outward.
pub fn clamp_to_arena(body: &mut Body, arena: &Arena) {
    let r = body.radius;
    if body.pos.x <= r {
        body.pos.x = r;
        if body.vel.x < 0.0 {
            body.vel.x = -body.vel.x;
        }
    }
    if body.pos.y <= r {
        body.pos.y = r;
        if body.vel.y < 0.0 {
            body.vel.y = -body.vel.y;
        }
    }
    if body.pos.x >= arena.width - r {
        body.pos.x = arena.width - r;
        if body.vel.x > 0.0 {
            body.vel.x = -body.vel.x;
        }
    }
    if body.pos.y >= arena.height - r {
        body.pos.y = arena.height - r;
        if body.vel.y > 0.0 {
            body.vel.y = -body.vel.y;
        }
    }
}

/// Gather every Position + Velocity + Circle entity in insertion order.
pub fn gather(store: &Store) -> Vec<Body> {
    let mask = ComponentMask::POSITION | ComponentMask::VELOCITY | ComponentMask::CIRCLE;
    store
        .query(mask)
        .into_iter()
        .filter_map(|id| {
            let pos = store.position(id)?;
            let vel = store.velocity(id)?;
            let circle = store.circle(id)?;
            Some(Body {
                id,
                pos: pos.as_dvec2(),
                vel: vel.as_dvec2(),
                friction: vel.friction,
                radius: circle.radius,
            })
        })
        .collect()
}

fn write_back(store: &mut Store, bodies: &[Body]) {
    for body in bodies {
        if let Some(pos) = store.position_mut(body.id) {
            pos.x = body.pos.x;
            pos.y = body.pos.y;
        }
        if let Some(vel) = store.velocity_mut(body.id) {
            vel.vx = body.vel.x;
            vel.vy = body.vel.y;
        }
    }
}

/// Resolve pairwise overlaps with `response`, then clamp to `arena`.
pub fn run(store: &mut Store, response: CollisionResponse, arena: &Arena) {
    let mut bodies = gather(store);

    match response {
        CollisionResponse::Ordered => resolve_ordered(&mut bodies),
        CollisionResponse::Negate => resolve_negate(&mut bodies),
    }
    for body in &mut bodies {
        clamp_to_arena(body, arena);
    }

    write_back(store, &bodies);
}

#[derive(Debug, Clone)]
pub struct CollisionSystem {
    pub response: CollisionResponse,
    pub arena: Arena,
}

impl CollisionSystem {
    pub fn new(response: CollisionResponse, arena: Arena) -> Self {
        Self { response, arena }
    }
}

impl Default for CollisionSystem {
    fn default() -> Self {
        Self::new(CollisionResponse::default(), Arena::default())
    }
}

impl System for CollisionSystem {
    fn name(&self) -> &'static str {
        "collision"
    }

    fn update(&mut self, store: &mut Store, _surface: &mut dyn RenderSurface) {
        run(store, self.response, &self.arena);
    }
}
