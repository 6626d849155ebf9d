//! Enumerations shared across the simulation.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Kind of component an entity may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Position,
    Velocity,
    Gravity,
    Circle,
    Follow,
    Canvas,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 6] = [
        ComponentKind::Position,
        ComponentKind::Velocity,
        ComponentKind::Gravity,
        ComponentKind::Circle,
        ComponentKind::Follow,
        ComponentKind::Canvas,
    ];

    pub fn mask(self) -> ComponentMask {
        match self {
            ComponentKind::Position => ComponentMask::POSITION,
            ComponentKind::Velocity => ComponentMask::VELOCITY,
            ComponentKind::Gravity => ComponentMask::GRAVITY,
            ComponentKind::Circle => ComponentMask::CIRCLE,
            ComponentKind::Follow => ComponentMask::FOLLOW,
            ComponentKind::Canvas => ComponentMask::CANVAS,
        }
    }
}

bitflags! {
    /// Set of component kinds attached to an entity, or required by a query.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ComponentMask: u8 {
        const POSITION = 1 << 0;
        const VELOCITY = 1 << 1;
        const GRAVITY = 1 << 2;
        const CIRCLE = 1 << 3;
        const FOLLOW = 1 << 4;
        const CANVAS = 1 << 5;
    }
}

/// How overlapping circles are pushed apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionResponse {
    /// Each unordered pair is resolved once (j < i): both circles move half
    /// the overlap apart and both velocities decay by their friction.
    #[default]
    Ordered,
    /// Every ordered pair is tested independently: the first circle is
    /// nudged one pixel away and its velocity is flipped along the line of
    /// centers. Approximate, not momentum-conserving.
    Negate,
}

impl CollisionResponse {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ordered" => Some(CollisionResponse::Ordered),
            "negate" => Some(CollisionResponse::Negate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionResponse::Ordered => "ordered",
            CollisionResponse::Negate => "negate",
        }
    }
}

/// Initial population of the arena.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenePreset {
    /// Grid of circles falling under gravity with a random sideways push.
    #[default]
    Rain,
    /// Grid of circles chasing the mouse.
    FollowMouse,
    /// Grid of circles converging on the arena center.
    FollowPoint,
}

impl ScenePreset {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "rain" => Some(ScenePreset::Rain),
            "follow-mouse" | "follow_mouse" => Some(ScenePreset::FollowMouse),
            "follow-point" | "follow_point" => Some(ScenePreset::FollowPoint),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScenePreset::Rain => "rain",
            ScenePreset::FollowMouse => "follow-mouse",
            ScenePreset::FollowPoint => "follow-point",
        }
    }
}
