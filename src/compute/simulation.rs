//! Simulation driver - owns the grid and statistics of one run.
//!
//! The driver is called once per tick by a control loop. It replaces its grid
//! with the one returned by [`advance`] and stops accepting steps once the
//! run is halted.

use log::{debug, info};

use super::{Grid, SimulationStats, advance};
use crate::schema::{Seed, SeedError, SimulationConfig};

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Accepting `step` calls.
    Running,
    /// Terminal. No further generations are computed.
    Halted,
}

/// A single Game of Life run.
pub struct Simulation {
    config: SimulationConfig,
    grid: Grid,
    stats: SimulationStats,
    status: RunStatus,
    generation: u64,
}

impl Simulation {
    /// Create a run over an empty grid.
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    pub fn new(config: SimulationConfig) -> Self {
        config.validate().expect("Invalid configuration");

        let grid = Grid::new(config.size);
        Self::with_grid(config, grid)
    }

    /// Create a run from a seed.
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    pub fn from_seed(config: SimulationConfig, seed: &Seed) -> Result<Self, SeedError> {
        config.validate().expect("Invalid configuration");

        let mut grid = Grid::new(config.size);
        let mut stats = SimulationStats::new();
        seed.plant(&mut grid, &mut stats)?;

        Ok(Self::assemble(config, grid, stats))
    }

    /// Create a run from an already populated grid.
    ///
    /// # Panics
    /// Panics if the grid size differs from `config.size`.
    pub fn with_grid(config: SimulationConfig, grid: Grid) -> Self {
        assert_eq!(
            grid.size(),
            config.size,
            "grid size does not match configuration"
        );

        Self::assemble(config, grid, SimulationStats::new())
    }

    fn assemble(config: SimulationConfig, grid: Grid, mut stats: SimulationStats) -> Self {
        stats.set_baseline(&grid);

        let mut sim = Self {
            config,
            grid,
            stats,
            status: RunStatus::Running,
            generation: 0,
        };
        sim.check_limit();
        sim
    }

    /// Compute one generation.
    ///
    /// Returns false without doing anything once the run is halted.
    pub fn step(&mut self) -> bool {
        if self.status == RunStatus::Halted {
            return false;
        }

        self.grid = advance(&self.grid, &mut self.stats);
        self.generation += 1;

        debug!(
            "generation {}: alive={} (original={}), born={}, died={}",
            self.generation,
            self.stats.alive,
            self.stats.originally_alive,
            self.stats.born,
            self.stats.died
        );

        self.check_limit();
        true
    }

    /// Run up to `steps` generations. Returns the number actually computed.
    pub fn run(&mut self, steps: u64) -> u64 {
        let mut computed = 0;
        while computed < steps && self.step() {
            computed += 1;
        }
        computed
    }

    /// Stop the run. Idempotent.
    pub fn halt(&mut self) {
        if self.status == RunStatus::Running {
            info!("Run halted after {} generations", self.generation);
            self.status = RunStatus::Halted;
        }
        self.stats.generations = self.generation;
    }

    /// Halt the run and return its final statistics.
    pub fn finish(mut self) -> SimulationStats {
        self.halt();
        self.stats
    }

    fn check_limit(&mut self) {
        if let Some(max) = self.config.max_generations
            && self.generation >= max
            && self.is_running()
        {
            info!("Generation limit {max} reached");
            self.halt();
        }
    }

    /// Current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Statistics so far. `generations` is only written once halted.
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == RunStatus::Running
    }

    /// Generations computed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Get configuration reference.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}
