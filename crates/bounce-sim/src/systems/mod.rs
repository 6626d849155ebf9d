//! Systems that operate on the store each tick.
//!
//! Each module exposes a free `run` function over `&mut Store` plus a unit
//! struct implementing `System` so the scheduler can hold it. Systems do not
//! own entity state; all state lives in components.

pub mod clear;
pub mod collision;
pub mod follow;
pub mod gravity;
pub mod integrate;
pub mod render;
pub mod snapshot;

pub use clear::ClearSystem;
pub use collision::CollisionSystem;
pub use follow::{FollowMouseSystem, FollowSystem};
pub use gravity::GravitySystem;
pub use integrate::IntegrateSystem;
pub use render::RenderSystem;
