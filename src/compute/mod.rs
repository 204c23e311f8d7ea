//! Compute module - Cell codec, grid and generation engine.

mod cell;
mod engine;
mod grid;
mod simulation;
mod stats;

pub use cell::*;
pub use engine::*;
pub use grid::*;
pub use simulation::*;
pub use stats::*;
