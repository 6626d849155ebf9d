//! Physics scenarios run through the public store + scheduler API.
//!
//! Collision uses the ordered pairwise response (each pair resolved once,
//! j < i) unless a test says otherwise.

use bounce_core::components::{Canvas, Circle, Follow, Gravity, Position, Velocity};
use bounce_core::constants::{CIRCLE_VERTEX_COUNT, FOLLOW_MOUSE_TAG};
use bounce_core::enums::CollisionResponse;
use bounce_core::input::MousePosition;
use bounce_core::types::{point_distance, Arena, Color, EntityId};
use bounce_sim::scheduler::Scheduler;
use bounce_sim::store::{Component, Store};
use bounce_sim::surface::{DrawCommand, RecordingSurface};
use bounce_sim::systems::{self, collision};

/// Helper: spawn a circle at (x, y) with velocity (vx, vy).
fn spawn_circle(store: &mut Store, x: f64, y: f64, vx: f64, vy: f64, radius: f64) -> EntityId {
    store
        .spawn_with([
            Component::from(Position::new(x, y)),
            Component::from(Velocity::new(vx, vy, 1.0)),
            Component::from(Circle {
                radius,
                color: Color::RED,
            }),
        ])
        .unwrap()
}

/// Helper: spawn the canvas with the mouse at `mouse`.
fn spawn_canvas(store: &mut Store, mouse: MousePosition) -> EntityId {
    store
        .spawn_with([Component::from(Canvas {
            width: 600.0,
            height: 400.0,
            mouse,
        })])
        .unwrap()
}

fn full_schedule() -> Scheduler {
    Scheduler::new()
        .with(systems::ClearSystem)
        .with(systems::FollowMouseSystem)
        .with(systems::FollowSystem)
        .with(systems::GravitySystem)
        .with(systems::IntegrateSystem)
        .with(systems::CollisionSystem::new(
            CollisionResponse::Ordered,
            Arena::default(),
        ))
        .with(systems::RenderSystem)
}

#[test]
fn wall_bounce_scenario() {
    // 600x400 arena, r = 20 at (10, 200), v = (-5, 0), friction 1, no gravity.
    let mut store = Store::new();
    let id = spawn_circle(&mut store, 10.0, 200.0, -5.0, 0.0, 20.0);
    store
        .attach(
            id,
            Gravity {
                magnitude: 0.0,
                direction: 90.0,
            },
        )
        .unwrap();

    collision::run(&mut store, CollisionResponse::Ordered, &Arena::default());

    assert_eq!(store.position(id).unwrap().x, 20.0);
    assert_eq!(store.velocity(id).unwrap().vx, 5.0);
}

#[test]
fn overlap_resolution_leaves_no_residual_overlap() {
    let mut store = Store::new();
    let a = spawn_circle(&mut store, 100.0, 100.0, 0.0, 0.0, 10.0);
    let b = spawn_circle(&mut store, 105.0, 100.0, 0.0, 0.0, 10.0);

    collision::run(&mut store, CollisionResponse::Ordered, &Arena::default());

    let pa = *store.position(a).unwrap();
    let pb = *store.position(b).unwrap();
    assert!(point_distance(&pa, &pb) >= 20.0);
    let da = point_distance(&pa, &Position::new(100.0, 100.0));
    let db = point_distance(&pb, &Position::new(105.0, 100.0));
    assert_eq!(da, db);
    assert_eq!(da, 7.5);
}

#[test]
fn follow_mouse_scenario() {
    for (easing, expected) in [(1.0, (100.0, 50.0)), (0.5, (50.0, 25.0))] {
        let mut store = Store::new();
        spawn_canvas(&mut store, MousePosition { x: 130.0, y: 250.0 });
        let id = store
            .spawn_with([
                Component::from(Position::new(30.0, 200.0)),
                Component::from(Velocity::new(0.0, 0.0, 1.0)),
                Component::from(Follow {
                    target_x: 0.0,
                    target_y: 0.0,
                    easing,
                }),
            ])
            .unwrap();
        store.tag(id, FOLLOW_MOUSE_TAG).unwrap();

        systems::follow::follow_mouse(&mut store);
        systems::follow::run(&mut store);

        let vel = store.velocity(id).unwrap();
        assert_eq!((vel.vx, vel.vy), expected, "easing {easing}");
    }
}

#[test]
fn full_tick_moves_then_draws() {
    let mut store = Store::new();
    spawn_canvas(&mut store, MousePosition::default());
    let id = spawn_circle(&mut store, 300.0, 200.0, 3.0, -4.0, 15.0);
    let mut scheduler = full_schedule();
    let mut surface = RecordingSurface::new();

    scheduler.update(&mut store, &mut surface);

    assert_eq!(store.position(id), Some(&Position::new(303.0, 196.0)));
    assert!(matches!(surface.commands()[0], DrawCommand::ClearRect { .. }));
    let polygons = surface.filled_polygons();
    assert_eq!(polygons.len(), 1);
    assert_eq!(polygons[0].vertices.len(), CIRCLE_VERTEX_COUNT);
    assert_eq!(polygons[0].vertices[0].x, 318.0);
    assert_eq!(polygons[0].vertices[0].y, 196.0);
}

#[test]
fn gravity_drop_lands_on_floor() {
    let mut store = Store::new();
    spawn_canvas(&mut store, MousePosition::default());
    let id = spawn_circle(&mut store, 300.0, 50.0, 0.0, 0.0, 20.0);
    store
        .attach(
            id,
            Gravity {
                magnitude: 0.5,
                direction: 90.0,
            },
        )
        .unwrap();
    let mut scheduler = full_schedule();
    let mut surface = RecordingSurface::new();

    let mut bounced = false;
    for _ in 0..200 {
        scheduler.update(&mut store, &mut surface);
        surface.clear();
        let pos = store.position(id).unwrap();
        assert!(pos.y <= 380.0 + 1e-9, "sank into floor: {}", pos.y);
        if store.velocity(id).unwrap().vy < 0.0 {
            bounced = true;
        }
    }
    assert!(bounced);
}

#[test]
fn empty_store_ticks_cleanly() {
    let mut store = Store::new();
    let mut surface = RecordingSurface::new();
    full_schedule().update(&mut store, &mut surface);
    assert!(surface.commands().is_empty());
}
