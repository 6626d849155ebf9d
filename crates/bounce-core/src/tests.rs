use crate::components::{Canvas, Circle, Follow, Gravity};
use crate::constants::*;
use crate::enums::*;
use crate::input::MousePosition;
use crate::state::{CircleView, FrameSnapshot};
use crate::types::*;

#[test]
fn test_scene_preset_serde() {
    let variants = vec![
        ScenePreset::Rain,
        ScenePreset::FollowMouse,
        ScenePreset::FollowPoint,
    ];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: ScenePreset = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_scene_preset_parse_matches_as_str() {
    for v in [
        ScenePreset::Rain,
        ScenePreset::FollowMouse,
        ScenePreset::FollowPoint,
    ] {
        assert_eq!(ScenePreset::parse(v.as_str()), Some(v));
    }
    assert_eq!(ScenePreset::parse("snow"), None);
}

#[test]
fn test_collision_response_parse_matches_as_str() {
    for v in [CollisionResponse::Ordered, CollisionResponse::Negate] {
        assert_eq!(CollisionResponse::parse(v.as_str()), Some(v));
    }
    assert_eq!(CollisionResponse::parse("bounce"), None);
}

#[test]
fn test_collision_response_json_names() {
    assert_eq!(
        serde_json::to_string(&CollisionResponse::Ordered).unwrap(),
        "\"ordered\""
    );
    let back: CollisionResponse = serde_json::from_str("\"negate\"").unwrap();
    assert_eq!(back, CollisionResponse::Negate);
}

#[test]
fn test_component_masks_are_distinct() {
    let mut all = ComponentMask::empty();
    for kind in ComponentKind::ALL {
        assert!(!all.intersects(kind.mask()), "{kind:?} overlaps");
        all |= kind.mask();
    }
    assert_eq!(all, ComponentMask::all());
}

#[test]
fn test_vertex_count_constant() {
    assert_eq!(CIRCLE_VERTEX_COUNT, 37);
}

#[test]
fn test_point_direction_and_distance() {
    let a = Position::new(100.0, 100.0);
    let b = Position::new(105.0, 100.0);
    assert_eq!(point_distance(&a, &b), 5.0);
    assert_eq!(point_direction(&a, &b), 0.0);

    let below = Position::new(100.0, 110.0);
    let dir = point_direction(&a, &below);
    assert!((rad_to_deg(dir) - 90.0).abs() < 1e-9);
}

#[test]
fn test_coincident_direction_is_zero() {
    let a = Position::new(42.0, 42.0);
    assert_eq!(point_direction(&a, &a), 0.0);
}

#[test]
fn test_deg_to_rad() {
    assert!((deg_to_rad(180.0) - std::f64::consts::PI).abs() < 1e-12);
    assert!((deg_to_rad(90.0).sin() - 1.0).abs() < 1e-12);
}

#[test]
fn test_arena_default_and_center() {
    let arena = Arena::default();
    assert_eq!(arena.width, 600.0);
    assert_eq!(arena.height, 400.0);
    assert_eq!(arena.center(), Position::new(300.0, 200.0));
}

#[test]
fn test_color_display_is_css() {
    assert_eq!(Color::RED.to_string(), "rgb(255, 0, 0)");
}

#[test]
fn test_snapshot_serialization() {
    let snap = FrameSnapshot {
        tick: 3,
        scene: ScenePreset::FollowMouse,
        mouse: MousePosition { x: 1.0, y: 2.0 },
        circles: vec![CircleView {
            id: 1,
            x: 10.0,
            y: 20.0,
            vx: 0.5,
            vy: -0.5,
            radius: CIRCLE_RADIUS,
            color: Color::RED,
            tags: vec![FOLLOW_MOUSE_TAG.to_string()],
        }],
    };
    let json = serde_json::to_string(&snap).unwrap();
    assert!(json.contains("\"follow_mouse\""));
    assert!(json.contains("followMouse"));
    let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
    assert!((back.speed_squared_sum() - 0.5).abs() < 1e-12);
}

#[test]
fn test_components_serde() {
    let g = Gravity {
        magnitude: RAIN_GRAVITY,
        direction: RAIN_GRAVITY_DIRECTION,
    };
    let c = Circle {
        radius: 20.0,
        color: Color::BLUE,
    };
    let f = Follow {
        target_x: 1.0,
        target_y: 2.0,
        easing: 0.5,
    };
    let canvas = Canvas {
        width: 600.0,
        height: 400.0,
        mouse: MousePosition::default(),
    };
    let json = serde_json::to_string(&(g, c, f, canvas)).unwrap();
    let back: (Gravity, Circle, Follow, Canvas) = serde_json::from_str(&json).unwrap();
    assert_eq!(back, (g, c, f, canvas));
}
