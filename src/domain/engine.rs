//! Generation advance: applies the B3/S23 transition to every cell at once.
//!
//! Both variants read only from the input grid and build a fresh output,
//! so no cell ever sees a partially updated neighborhood.

use rayon::prelude::*;

use super::{Cell, Grid, count_live_neighbors};

/// Next state of a single cell, read from the input generation.
fn next_cell(grid: &Grid, row: usize, col: usize, current: Cell) -> Cell {
    current.evolve(count_live_neighbors(grid, row, col))
}

/// Pure functional evolution - returns the next generation (serial)
pub fn advance(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    let cells = grid
        .iter_cells()
        .map(|(row, col, cell)| next_cell(grid, row, col, cell))
        .collect();
    Grid::from_cells(rows, cols, cells)
}

/// Parallel evolution using rayon, one task per row.
/// Produces exactly the same grid as [`advance`].
pub fn advance_parallel(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    let cells: Vec<Cell> = (0..rows)
        .into_par_iter()
        .flat_map_iter(|row| {
            grid.row(row)
                .iter()
                .enumerate()
                .map(move |(col, &cell)| next_cell(grid, row, col, cell))
        })
        .collect();
    Grid::from_cells(rows, cols, cells)
}
