//! `.gol` pattern templates.
//!
//! A template file is a square pattern:
//!
//! ```text
//! 3
//! 010
//! 001
//! 111
//! ```
//!
//! The first line holds the side length `N`. Each following non-empty line
//! is one row of at most `N` characters; `1` marks a live cell and any other
//! character a dead one. Missing trailing rows and columns are dead.

use std::fs;
use std::path::Path;

use crate::compute::{Cell, Grid, SimulationStats};

/// Parsed `.gol` template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    side: usize,
    /// Live cell offsets (dx, dy) from the top-left corner.
    cells: Vec<(usize, usize)>,
}

impl Template {
    /// Parse template text.
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let mut lines = text.lines().map(|l| l.trim_end_matches('\r'));

        let header = lines.next().ok_or(TemplateError::MissingHeader)?.trim();
        if header.is_empty() {
            return Err(TemplateError::MissingHeader);
        }
        let side: usize = header
            .parse()
            .map_err(|_| TemplateError::InvalidHeader(header.to_string()))?;

        let rows: Vec<&str> = lines.filter(|l| !l.is_empty()).collect();
        Self::from_rows(side, &rows)
    }

    /// Build a template of side `side` from body rows.
    pub fn from_rows<S: AsRef<str>>(side: usize, rows: &[S]) -> Result<Self, TemplateError> {
        if rows.len() > side {
            return Err(TemplateError::TooManyRows {
                rows: rows.len(),
                side,
            });
        }

        let mut cells = Vec::new();
        for (dy, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len > side {
                return Err(TemplateError::RowTooLong { row: dy, len, side });
            }
            cells.extend(
                row.chars()
                    .enumerate()
                    .filter(|&(_, ch)| ch == '1')
                    .map(|(dx, _)| (dx, dy)),
            );
        }

        Ok(Self { side, cells })
    }

    /// Read and parse a template file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TemplateError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Side length.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Live cell offsets from the top-left corner.
    #[inline]
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Check that the template fits in a grid of side `size` at `origin`.
    pub fn fits(&self, size: usize, origin: (usize, usize)) -> bool {
        let (x, y) = origin;
        x.checked_add(self.side).is_some_and(|end| end <= size)
            && y.checked_add(self.side).is_some_and(|end| end <= size)
    }

    /// Place the template with its top-left corner at `origin`.
    ///
    /// Live cells become [`Cell::PLACED`] and are counted as placements.
    /// Returns the number of cells placed.
    pub fn stamp(
        &self,
        grid: &mut Grid,
        origin: (usize, usize),
        stats: &mut SimulationStats,
    ) -> Result<usize, TemplateError> {
        if !self.fits(grid.size(), origin) {
            return Err(TemplateError::DoesNotFit {
                side: self.side,
                x: origin.0,
                y: origin.1,
                size: grid.size(),
            });
        }

        let (x, y) = origin;
        for &(dx, dy) in &self.cells {
            grid.set(x + dx, y + dy, Cell::PLACED);
            stats.record_placement();
        }
        Ok(self.cells.len())
    }
}

/// Template parsing and placement errors.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template is missing its size header")]
    MissingHeader,
    #[error("Invalid template size header: {0:?}")]
    InvalidHeader(String),
    #[error("Template row {row} has {len} cells, expected at most {side}")]
    RowTooLong { row: usize, len: usize, side: usize },
    #[error("Template has {rows} rows, expected at most {side}")]
    TooManyRows { rows: usize, side: usize },
    #[error("Template of size {side} at ({x}, {y}) does not fit in a {size}x{size} grid")]
    DoesNotFit {
        side: usize,
        x: usize,
        y: usize,
        size: usize,
    },
    #[error("Failed to read template: {0}")]
    Io(#[from] std::io::Error),
}
