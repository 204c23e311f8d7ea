//! Square cell grid.

use super::Cell;

/// Fixed-size square grid of packed cells.
///
/// Data is stored as a flat row-major array: `cells[y * size + x]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    size: usize,
}

impl Grid {
    /// Create an all-dead grid of side `size`.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be non-zero");
        Self {
            cells: vec![Cell::DEAD; size * size],
            size,
        }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Convert (x, y) coordinates to flat index.
    ///
    /// # Panics
    /// Panics if (x, y) lies outside the grid.
    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        assert!(x < self.size && y < self.size, "({x}, {y}) outside grid");
        y * self.size + x
    }

    /// Check whether (x, y) lies inside the grid.
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = self.idx(x, y);
        self.cells[idx] = cell;
    }

    /// Flat row-major view of all cells.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over `(x, y, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i % size, i / size, cell))
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.alive()).count()
    }

    /// Number of live cells carrying the origin flag.
    pub fn original_count(&self) -> usize {
        self.cells.iter().filter(|c| c.alive() && c.origin()).count()
    }

    /// Coordinates of all live cells in row-major order.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|(_, _, c)| c.alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }
}

impl std::fmt::Display for Grid {
    /// Renders one line per row, `#` for live cells and `.` for dead ones.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size) {
            for cell in row {
                f.write_str(if cell.alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
