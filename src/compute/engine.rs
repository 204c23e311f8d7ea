//! Generation engine - neighbor counting and the Life update rule.
//!
//! The grid is bounded: positions outside `[0, size)` do not exist and are
//! never counted. Every generation is computed from the current grid into a
//! freshly allocated one, so the rule is applied to all cells simultaneously.

use super::{Cell, Grid, SimulationStats};

/// Inclusive `[start, end]` span of a 3-wide neighborhood along one axis,
/// clamped to `[0, size)`.
///
/// At `c = 0` the start stays at `c` instead of wrapping below zero, and at
/// `c = size - 1` the end stays at `c`.
#[inline]
fn neighborhood_span(c: usize, size: usize) -> (usize, usize) {
    let start = if c == 0 { c } else { c - 1 };
    let end = if c >= size - 1 { c } else { c + 1 };
    (start, end)
}

/// Count live cells among the up-to-8 neighbors of `(x, y)`.
///
/// Returns a value in `[0, 8]`. The center cell is never counted.
pub fn count_live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let size = grid.size();
    assert!(grid.contains(x, y), "({x}, {y}) outside grid");

    let (x_start, x_end) = neighborhood_span(x, size);
    let (y_start, y_end) = neighborhood_span(y, size);

    let mut count = 0u8;
    for ny in y_start..=y_end {
        for nx in x_start..=x_end {
            if nx == x && ny == y {
                continue;
            }
            if grid.get(nx, ny).alive() {
                count += 1;
            }
        }
    }
    count
}

/// Advance `grid` by one generation.
///
/// Returns the next grid. `stats.born` and `stats.died` accumulate, while
/// `stats.alive` and `stats.originally_alive` are recomputed to describe the
/// returned grid.
///
/// Rules, evaluated against the current grid:
/// - a dead cell with exactly 3 live neighbors is born at age 1 without the
///   origin flag
/// - a live cell with 2 or 3 live neighbors survives one generation older,
///   keeping its origin flag
/// - every other live cell dies, losing both age and origin
pub fn advance(grid: &Grid, stats: &mut SimulationStats) -> Grid {
    let size = grid.size();
    let mut next = Grid::new(size);

    stats.reset_snapshot();

    for y in 0..size {
        for x in 0..size {
            let cell = grid.get(x, y);
            let neighbors = count_live_neighbors(grid, x, y);

            if cell.alive() {
                if matches!(neighbors, 2 | 3) {
                    let survivor = cell.aged();
                    next.set(x, y, survivor);
                    stats.alive += 1;
                    if survivor.origin() {
                        stats.originally_alive += 1;
                    }
                } else {
                    // Next cell is already dead
                    stats.died += 1;
                }
            } else if neighbors == 3 {
                next.set(x, y, Cell::NEWBORN);
                stats.born += 1;
                stats.alive += 1;
            }
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::MAX_AGE;
    use proptest::prelude::*;

    /// Build a grid from rows of `#` (placed cell) and `.` (dead).
    fn grid_from_rows(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows.len());
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), rows.len(), "rows must form a square");
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    grid.set(x, y, Cell::PLACED);
                }
            }
        }
        grid
    }

    /// Offsets of the 8 neighbors, in a fixed order.
    const NEIGHBOR_OFFSETS: [(usize, usize); 8] = [
        (1, 1),
        (2, 1),
        (3, 1),
        (1, 2),
        (3, 2),
        (1, 3),
        (2, 3),
        (3, 3),
    ];

    /// 5x5 grid with `center` at (2, 2) and the first `k` neighbors alive.
    fn neighborhood(center: Cell, k: usize) -> Grid {
        let mut grid = Grid::new(5);
        grid.set(2, 2, center);
        for &(x, y) in NEIGHBOR_OFFSETS.iter().take(k) {
            grid.set(x, y, Cell::PLACED);
        }
        grid
    }

    #[test]
    fn test_span_clamps_at_edges() {
        assert_eq!(neighborhood_span(0, 5), (0, 1));
        assert_eq!(neighborhood_span(2, 5), (1, 3));
        assert_eq!(neighborhood_span(4, 5), (3, 4));
        assert_eq!(neighborhood_span(0, 1), (0, 0));
        // Far past the edge the end bound must not wrap to zero
        assert_eq!(neighborhood_span(usize::MAX, 5), (usize::MAX - 1, usize::MAX));
    }

    #[test]
    #[should_panic(expected = "outside grid")]
    fn test_count_outside_grid_panics() {
        let grid = Grid::new(3);
        let _ = count_live_neighbors(&grid, usize::MAX, 0);
    }

    #[test]
    fn test_zero_age_origin_cell_is_dead() {
        let mut grid = Grid::new(3);
        grid.set(1, 1, Cell::encode(0, true));

        let mut stats = SimulationStats::new();
        stats.set_baseline(&grid);
        assert_eq!(stats.alive, 0);
        assert_eq!(stats.originally_alive, 0);
        assert_eq!(count_live_neighbors(&grid, 0, 0), 0);

        let next = advance(&grid, &mut stats);
        assert_eq!(stats.died, 0);
        assert_eq!(next.live_count(), 0);
    }

    #[test]
    fn test_count_full_grid() {
        let grid = grid_from_rows(&["####", "####", "####", "####"]);

        // Corners
        assert_eq!(count_live_neighbors(&grid, 0, 0), 3);
        assert_eq!(count_live_neighbors(&grid, 3, 0), 3);
        assert_eq!(count_live_neighbors(&grid, 0, 3), 3);
        assert_eq!(count_live_neighbors(&grid, 3, 3), 3);

        // Edges
        assert_eq!(count_live_neighbors(&grid, 1, 0), 5);
        assert_eq!(count_live_neighbors(&grid, 0, 2), 5);
        assert_eq!(count_live_neighbors(&grid, 3, 1), 5);
        assert_eq!(count_live_neighbors(&grid, 2, 3), 5);

        // Interior
        assert_eq!(count_live_neighbors(&grid, 1, 1), 8);
        assert_eq!(count_live_neighbors(&grid, 2, 2), 8);
    }

    #[test]
    fn test_count_single_cell_grid() {
        let grid = grid_from_rows(&["#"]);
        assert_eq!(count_live_neighbors(&grid, 0, 0), 0);
    }

    #[test]
    fn test_count_excludes_center() {
        let grid = grid_from_rows(&["...", ".#.", "..."]);
        assert_eq!(count_live_neighbors(&grid, 1, 1), 0);
        assert_eq!(count_live_neighbors(&grid, 0, 0), 1);
        assert_eq!(count_live_neighbors(&grid, 2, 2), 1);
    }

    #[test]
    fn test_survival_rule() {
        for k in 0..=8 {
            let grid = neighborhood(Cell::PLACED, k);
            assert_eq!(count_live_neighbors(&grid, 2, 2), k as u8);

            let mut stats = SimulationStats::new();
            let next = advance(&grid, &mut stats);
            let cell = next.get(2, 2);

            if k == 2 || k == 3 {
                assert_eq!(cell.decode(), (true, 2, true), "k = {k}");
            } else {
                assert_eq!(cell, Cell::DEAD, "k = {k}");
            }
        }
    }

    #[test]
    fn test_birth_rule() {
        for k in 0..=8 {
            let grid = neighborhood(Cell::DEAD, k);
            let mut stats = SimulationStats::new();
            let next = advance(&grid, &mut stats);
            let cell = next.get(2, 2);

            if k == 3 {
                assert_eq!(cell.decode(), (true, 1, false));
            } else {
                assert_eq!(cell, Cell::DEAD, "k = {k}");
            }
        }
    }

    #[test]
    fn test_blinker_on_edge() {
        let row = grid_from_rows(&["...", "###", "..."]);
        let mut stats = SimulationStats::new();

        let column = advance(&row, &mut stats);
        assert_eq!(column.live_cells(), vec![(1, 0), (1, 1), (1, 2)]);
        assert_eq!(stats.born, 2);
        assert_eq!(stats.died, 2);
        assert_eq!(stats.alive, 3);
        assert_eq!(stats.originally_alive, 1);

        let back = advance(&column, &mut stats);
        assert_eq!(back.live_cells(), vec![(0, 1), (1, 1), (2, 1)]);
        assert_eq!(stats.born, 4);
        assert_eq!(stats.died, 4);

        // The center survived both generations with its origin flag
        assert_eq!(back.get(1, 1).decode(), (true, 3, true));
        assert_eq!(back.get(0, 1).decode(), (true, 1, false));
    }

    #[test]
    fn test_isolated_cell_dies() {
        let grid = grid_from_rows(&[".....", ".....", "..#..", ".....", "....."]);
        let mut stats = SimulationStats::new();
        stats.set_baseline(&grid);

        let next = advance(&grid, &mut stats);

        assert_eq!(next.live_count(), 0);
        assert_eq!(stats.died, 1);
        assert_eq!(stats.born, 0);
        assert_eq!(stats.alive, 0);
        assert_eq!(stats.originally_alive, 0);
    }

    #[test]
    fn test_block_ages_until_saturation() {
        let mut grid = grid_from_rows(&[
            "......", "......", "..##..", "..##..", "......", "......",
        ]);
        let block = grid.live_cells();
        let mut stats = SimulationStats::new();

        for generation in 1..=200u32 {
            grid = advance(&grid, &mut stats);

            assert_eq!(grid.live_cells(), block);
            let expected_age = (1 + generation).min(MAX_AGE as u32) as u8;
            for &(x, y) in &block {
                assert_eq!(grid.get(x, y).decode(), (true, expected_age, true));
            }
        }

        assert_eq!(stats.born, 0);
        assert_eq!(stats.died, 0);
        assert_eq!(stats.alive, 4);
        assert_eq!(stats.originally_alive, 4);
    }

    #[test]
    fn test_origin_lost_after_death() {
        let mut stats = SimulationStats::new();

        // A placed cell dies alone, then is reborn from three newborns
        let mut single = Grid::new(4);
        single.set(0, 0, Cell::PLACED);
        let dead = advance(&single, &mut stats);
        assert_eq!(dead.get(0, 0), Cell::DEAD);

        let mut reborn = dead;
        reborn.set(1, 0, Cell::NEWBORN);
        reborn.set(0, 1, Cell::NEWBORN);
        reborn.set(1, 1, Cell::NEWBORN);
        let next = advance(&reborn, &mut stats);
        assert_eq!(next.get(0, 0).decode(), (true, 1, false));
        assert_eq!(stats.originally_alive, 0);
    }

    #[test]
    fn test_tromino_keeps_origin_of_survivors() {
        let mut grid = grid_from_rows(&["#...", "....", "....", "...."]);
        grid.set(1, 1, Cell::NEWBORN);
        grid.set(0, 1, Cell::NEWBORN);

        let mut stats = SimulationStats::new();
        let next = advance(&grid, &mut stats);

        // L-tromino closes into a block
        assert_eq!(next.live_count(), 4);
        assert_eq!(next.get(0, 0).decode(), (true, 2, true));
        assert_eq!(next.get(1, 0).decode(), (true, 1, false));
        assert_eq!(next.get(0, 1).decode(), (true, 2, false));
        assert_eq!(stats.originally_alive, 1);
        assert_eq!(stats.born, 1);
    }

    #[test]
    fn test_advance_leaves_input_untouched() {
        let grid = grid_from_rows(&["...", "###", "..."]);
        let before = grid.clone();
        let mut stats = SimulationStats::new();
        let _ = advance(&grid, &mut stats);
        assert_eq!(grid, before);
    }

    proptest! {
        #[test]
        fn prop_count_stays_in_bounds(size in 1usize..12, x in 0usize..12, y in 0usize..12) {
            let x = x % size;
            let y = y % size;
            let mut grid = Grid::new(size);
            for gy in 0..size {
                for gx in 0..size {
                    grid.set(gx, gy, Cell::PLACED);
                }
            }

            let width = x.min(1) + 1 + (size - 1 - x).min(1);
            let height = y.min(1) + 1 + (size - 1 - y).min(1);
            prop_assert_eq!(
                count_live_neighbors(&grid, x, y) as usize,
                width * height - 1
            );
        }

        #[test]
        fn prop_snapshot_matches_returned_grid(
            size in 1usize..10,
            bits in prop::collection::vec(any::<u8>(), 100),
        ) {
            let mut grid = Grid::new(size);
            for y in 0..size {
                for x in 0..size {
                    let b = bits[y * size + x];
                    // Roughly a third of the cells start alive
                    if b % 3 == 0 {
                        grid.set(x, y, Cell::encode(b % 100 + 1, b % 2 == 0));
                    }
                }
            }

            let mut stats = SimulationStats::new();
            let mut current = grid;
            for _ in 0..3 {
                let born = stats.born;
                let died = stats.died;
                let before = current.live_count() as u64;

                current = advance(&current, &mut stats);

                prop_assert_eq!(stats.alive, current.live_count() as u64);
                prop_assert_eq!(stats.originally_alive, current.original_count() as u64);
                prop_assert!(stats.originally_alive <= stats.alive);
                prop_assert_eq!(before + (stats.born - born) - (stats.died - died), stats.alive);
            }
        }
    }
}
