//! Seed types for initializing Game of Life runs.
//!
//! Seeding is the only phase allowed to set the origin flag: every cell it
//! places is [`Cell::PLACED`] and counts toward `SimulationStats::placed`.

use std::path::PathBuf;

use log::warn;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use super::{Template, TemplateError};
use crate::compute::{Cell, Grid, SimulationStats};

/// Complete seed specification for simulation initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::Soup {
                density: 0.5,
                window: None,
                seed: 42,
            },
        }
    }
}

/// Initial configurations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// No live cells.
    Empty,
    /// Explicit list of (x, y) coordinates.
    Cells { cells: Vec<(usize, usize)> },
    /// Random soup.
    Soup {
        /// Probability of each cell starting alive (0.0-1.0).
        density: f64,
        /// Side of the centered square that gets seeded (None = whole grid).
        window: Option<usize>,
        /// Random seed.
        seed: u64,
    },
    /// Inline `.gol` body rows.
    Template {
        /// Template side length.
        side: usize,
        /// Rows of `1` (alive) and anything else (dead).
        rows: Vec<String>,
        /// Grid position of the template's top-left corner.
        origin: (usize, usize),
    },
    /// `.gol` template file.
    TemplateFile {
        path: PathBuf,
        /// Grid position of the template's top-left corner.
        origin: (usize, usize),
    },
}

impl Seed {
    pub fn new(pattern: Pattern) -> Self {
        Self { pattern }
    }

    /// Place the seed's cells into `grid`, recording each placement.
    ///
    /// The grid is left untouched when an error is returned.
    pub fn plant(&self, grid: &mut Grid, stats: &mut SimulationStats) -> Result<(), SeedError> {
        match &self.pattern {
            Pattern::Empty => {}
            Pattern::Cells { cells } => {
                if let Some(&(x, y)) = cells.iter().find(|&&(x, y)| !grid.contains(x, y)) {
                    return Err(SeedError::OutOfBounds {
                        x,
                        y,
                        size: grid.size(),
                    });
                }
                for &(x, y) in cells {
                    grid.set(x, y, Cell::PLACED);
                    stats.record_placement();
                }
            }
            Pattern::Soup {
                density,
                window,
                seed,
            } => {
                if !(0.0..=1.0).contains(density) {
                    return Err(SeedError::InvalidDensity(*density));
                }
                plant_soup(grid, stats, *density, *window, *seed);
            }
            Pattern::Template { side, rows, origin } => {
                Template::from_rows(*side, rows)?.stamp(grid, *origin, stats)?;
            }
            Pattern::TemplateFile { path, origin } => {
                Template::load(path)?.stamp(grid, *origin, stats)?;
            }
        }
        Ok(())
    }
}

/// Bounds `[start, start + side)` of a centered square window.
fn centered_window(size: usize, window: Option<usize>) -> (usize, usize) {
    let side = match window {
        Some(w) if w > size => {
            warn!("Soup window {w} exceeds grid size {size}, seeding whole grid");
            size
        }
        Some(w) => w,
        None => size,
    };
    let start = size / 2 - side / 2;
    (start, side)
}

fn plant_soup(
    grid: &mut Grid,
    stats: &mut SimulationStats,
    density: f64,
    window: Option<usize>,
    seed: u64,
) {
    let mut rng = StdRng::seed_from_u64(seed);
    let (start, side) = centered_window(grid.size(), window);

    for y in start..start + side {
        for x in start..start + side {
            if rng.gen_bool(density) {
                grid.set(x, y, Cell::PLACED);
                stats.record_placement();
            }
        }
    }
}

/// Seeding errors.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Cell ({x}, {y}) lies outside the {size}x{size} grid")]
    OutOfBounds { x: usize, y: usize, size: usize },
    #[error("Soup density must be within [0, 1], got {0}")]
    InvalidDensity(f64),
    #[error(transparent)]
    Template(#[from] TemplateError),
}
