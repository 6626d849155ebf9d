//! Simulation engine for bounce.
//!
//! Owns the entity/component store, runs the systems in a fixed order once
//! per frame, and produces `FrameSnapshot`s for the frame driver.

pub mod engine;
pub mod error;
pub mod scheduler;
pub mod store;
pub mod surface;
pub mod systems;
pub mod world_setup;

pub use bounce_core as core;
pub use engine::{SimConfig, Simulation};
