//! Headless frame driver for the bounce simulation.
//!
//! Runs the simulation on its own loop thread at the display rate, forwards
//! pointer input into it between ticks, and streams frame snapshots back.

pub mod cli;
pub mod error;
pub mod game_loop;
