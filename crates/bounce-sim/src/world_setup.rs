//! Entity spawn factories for setting up the arena.
//!
//! Creates the canvas entity and the circle population for each
//! `ScenePreset` with the appropriate component bundles.

use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bounce_core::components::{Canvas, Circle, Follow, Gravity, Position, Velocity};
use bounce_core::constants::*;
use bounce_core::enums::ScenePreset;
use bounce_core::input::MousePosition;
use bounce_core::types::{Arena, Color, EntityId};

use crate::error::StoreError;
use crate::store::{Component, Store};

/// Entities created by `setup_scene`.
#[derive(Debug, Clone)]
pub struct SceneEntities {
    pub canvas: EntityId,
    pub circles: Vec<EntityId>,
}

/// Populate an empty store: canvas first, then the scene's circles.
pub fn setup_scene(
    store: &mut Store,
    scene: ScenePreset,
    arena: &Arena,
    rng: &mut ChaCha8Rng,
) -> Result<SceneEntities, StoreError> {
    let canvas = spawn_canvas(store, arena)?;

    let mut circles = Vec::with_capacity(SCENE_CIRCLE_COUNT);
    for i in 0..SCENE_CIRCLE_COUNT {
        let at = grid_position(i);
        let id = match scene {
            ScenePreset::Rain => spawn_rain_circle(store, rng, at)?,
            ScenePreset::FollowMouse => spawn_mouse_follower(store, at)?,
            ScenePreset::FollowPoint => spawn_point_follower(store, at, arena.center())?,
        };
        circles.push(id);
    }

    debug!(
        "scene {} ready: {} circles in {}x{} arena",
        scene.as_str(),
        circles.len(),
        arena.width,
        arena.height
    );
    Ok(SceneEntities { canvas, circles })
}

/// Grid slot `i`: rows of `GRID_COLUMNS`, `GRID_SPACING` apart.
pub fn grid_position(i: usize) -> Position {
    Position::new(
        GRID_ORIGIN + (i % GRID_COLUMNS) as f64 * GRID_SPACING,
        GRID_ORIGIN + (i / GRID_COLUMNS) as f64 * GRID_SPACING,
    )
}

pub fn spawn_canvas(store: &mut Store, arena: &Arena) -> Result<EntityId, StoreError> {
    store.spawn_with([Component::from(Canvas {
        width: arena.width,
        height: arena.height,
        mouse: MousePosition::default(),
    })])
}

fn scene_circle() -> Circle {
    Circle {
        radius: CIRCLE_RADIUS,
        color: Color::RED,
    }
}

/// Falling circle with a small random sideways launch.
pub fn spawn_rain_circle(
    store: &mut Store,
    rng: &mut ChaCha8Rng,
    at: Position,
) -> Result<EntityId, StoreError> {
    let vx = rng.gen_range(-RAIN_SPREAD..RAIN_SPREAD);
    store.spawn_with([
        Component::from(at),
        Component::from(Velocity::new(vx, 0.0, CIRCLE_FRICTION)),
        Component::from(scene_circle()),
        Component::from(Gravity {
            magnitude: RAIN_GRAVITY,
            direction: RAIN_GRAVITY_DIRECTION,
        }),
    ])
}

/// Circle whose Follow target tracks the canvas mouse.
pub fn spawn_mouse_follower(store: &mut Store, at: Position) -> Result<EntityId, StoreError> {
    let id = store.spawn_with([
        Component::from(at),
        Component::from(Velocity::new(0.0, 0.0, CIRCLE_FRICTION)),
        Component::from(scene_circle()),
        Component::from(Follow {
            target_x: at.x,
            target_y: at.y,
            easing: FOLLOW_MOUSE_EASING,
        }),
    ])?;
    store.tag(id, FOLLOW_MOUSE_TAG)?;
    Ok(id)
}

/// Circle converging on a fixed point.
pub fn spawn_point_follower(
    store: &mut Store,
    at: Position,
    target: Position,
) -> Result<EntityId, StoreError> {
    store.spawn_with([
        Component::from(at),
        Component::from(Velocity::new(0.0, 0.0, CIRCLE_FRICTION)),
        Component::from(scene_circle()),
        Component::from(Follow {
            target_x: target.x,
            target_y: target.y,
            easing: FOLLOW_POINT_EASING,
        }),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounce_core::enums::ComponentMask;
    use rand::SeedableRng;

    #[test]
    fn grid_matches_layout() {
        assert_eq!(grid_position(0), Position::new(50.0, 50.0));
        assert_eq!(grid_position(9), Position::new(500.0, 50.0));
        assert_eq!(grid_position(10), Position::new(50.0, 100.0));
        assert_eq!(grid_position(19), Position::new(500.0, 100.0));
    }

    #[test]
    fn rain_scene_bundles() {
        let mut store = Store::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let scene = setup_scene(&mut store, ScenePreset::Rain, &Arena::default(), &mut rng).unwrap();

        assert_eq!(scene.canvas.index, 0);
        assert_eq!(scene.circles.len(), SCENE_CIRCLE_COUNT);
        assert_eq!(store.query(ComponentMask::GRAVITY).len(), SCENE_CIRCLE_COUNT);
        assert!(store.query(ComponentMask::FOLLOW).is_empty());
        for &id in &scene.circles {
            let vel = store.velocity(id).unwrap();
            assert!(vel.vx >= -RAIN_SPREAD && vel.vx < RAIN_SPREAD);
            assert_eq!(vel.vy, 0.0);
            assert_eq!(vel.friction, CIRCLE_FRICTION);
        }
    }

    #[test]
    fn follow_mouse_scene_tags_every_circle() {
        let mut store = Store::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let scene =
            setup_scene(&mut store, ScenePreset::FollowMouse, &Arena::default(), &mut rng).unwrap();
        assert_eq!(store.query_tag(FOLLOW_MOUSE_TAG), scene.circles);
        assert!(store.query(ComponentMask::GRAVITY).is_empty());
    }

    #[test]
    fn follow_point_targets_center() {
        let mut store = Store::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let arena = Arena::default();
        let scene = setup_scene(&mut store, ScenePreset::FollowPoint, &arena, &mut rng).unwrap();
        let follow = store.follow(scene.circles[3]).unwrap();
        assert_eq!((follow.target_x, follow.target_y), (300.0, 200.0));
        assert!(store.query_tag(FOLLOW_MOUSE_TAG).is_empty());
    }

    #[test]
    fn invalid_arena_is_rejected() {
        let mut store = Store::new();
        let arena = Arena {
            width: 0.0,
            height: 400.0,
        };
        let err = spawn_canvas(&mut store, &arena).unwrap_err();
        assert!(matches!(err, StoreError::InvalidComponent { .. }));
    }
}
