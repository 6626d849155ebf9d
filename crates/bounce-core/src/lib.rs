//! Core types and definitions for the bounce circle simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, geometry, input translation, frame snapshots, and constants.
//! It has no dependency on any drawing or windowing runtime.

pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod input;
pub mod state;
pub mod types;
pub mod validate;

#[cfg(test)]
mod tests;
