//! Run-scoped simulation statistics.

use serde::{Deserialize, Serialize};

use super::Grid;

/// Statistics accumulated over a single run.
///
/// `born`, `died` and `placed` are cumulative. `alive` and `originally_alive`
/// are a snapshot of the current generation and are recomputed on every
/// advance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Cells born since the run started.
    pub born: u64,
    /// Cells that died since the run started.
    pub died: u64,
    /// Cells placed by the initial configuration.
    pub placed: u64,
    /// Cells alive when the run started.
    pub initial_alive: u64,
    /// Cells currently alive.
    pub alive: u64,
    /// Currently alive cells that were part of the initial configuration.
    pub originally_alive: u64,
    /// Generations elapsed. Written when the run ends.
    pub generations: u64,
}

impl SimulationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one placement made by the initialization phase.
    #[inline]
    pub fn record_placement(&mut self) {
        self.placed += 1;
    }

    /// Take the pre-run baseline from a freshly seeded grid.
    pub fn set_baseline(&mut self, grid: &Grid) {
        let alive = grid.live_count() as u64;
        self.initial_alive = alive;
        self.alive = alive;
        self.originally_alive = grid.original_count() as u64;
    }

    /// Clear the per-generation snapshot counters.
    #[inline]
    pub(crate) fn reset_snapshot(&mut self) {
        self.alive = 0;
        self.originally_alive = 0;
    }

    /// Fraction of the starting population still alive and original.
    pub fn original_survival(&self) -> f64 {
        if self.initial_alive == 0 {
            0.0
        } else {
            self.originally_alive as f64 / self.initial_alive as f64
        }
    }
}

impl std::fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "After {} generations with {} starting cells:",
            self.generations, self.initial_alive
        )?;
        writeln!(f, "  - {} cells were born", self.born)?;
        writeln!(f, "  - {} cells died", self.died)?;
        writeln!(f, "  - {} cells were alive at the end", self.alive)?;
        write!(
            f,
            "  - {} of these {} cells are original cells",
            self.originally_alive, self.alive
        )
    }
}
