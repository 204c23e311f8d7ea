//! Life Engine - Conway's Game of Life with per-cell age and origin tracking.
//!
//! This crate implements the Game of Life on a bounded square grid. Every cell
//! is packed into a single byte that carries, besides being alive, how many
//! generations it has been alive and whether it was part of the initial
//! configuration. Statistics on births, deaths and surviving original cells
//! are accumulated while the simulation runs.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration, seeds and `.gol` templates
//! - `compute`: Cell codec, grid, generation engine and run driver
//!
//! # Example
//!
//! ```rust,no_run
//! use life_engine::{
//!     compute::Simulation,
//!     schema::{Pattern, Seed, SimulationConfig},
//! };
//!
//! // Create configuration
//! let config = SimulationConfig {
//!     size: 64,
//!     max_generations: Some(100),
//! };
//!
//! // Seed with a random soup in the middle of the grid
//! let seed = Seed {
//!     pattern: Pattern::Soup {
//!         density: 0.5,
//!         window: Some(16),
//!         seed: 42,
//!     },
//! };
//! let mut sim = Simulation::from_seed(config, &seed).expect("seed fits the grid");
//!
//! // Run until the generation limit halts the run
//! while sim.step() {}
//!
//! println!("{}", sim.finish());
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{Cell, Grid, Simulation, SimulationStats, advance, count_live_neighbors};
pub use schema::{Pattern, Seed, SimulationConfig, Template};
