use super::{Cell, LifeError, Result};

/// Grid owns the 2D cell array of one generation.
/// Cells are stored row-major; every row has exactly `cols` entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Build a grid by evaluating `f` at every coordinate, row by row
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> Cell) -> Self {
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .map(|(row, col)| f(row, col))
            .collect();
        Self { rows, cols, cells }
    }

    /// Wrap an already computed row-major cell vector.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check(&self, row: usize, col: usize) -> Result<usize> {
        if self.contains(row, col) {
            Ok(self.index(row, col))
        } else {
            Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Get cell at position, rejecting coordinates outside the grid
    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        self.check(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at position, rejecting coordinates outside the grid
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        let idx = self.check(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip a cell and return its new state
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell> {
        let idx = self.check(row, col)?;
        let cell = self.cells[idx].toggle();
        self.cells[idx] = cell;
        Ok(cell)
    }

    /// Reject a `height`x`width` box at (row, col) unless it lies fully inside.
    /// Corners past `usize::MAX` are reported at the origin.
    pub(crate) fn check_box(&self, row: usize, col: usize, height: usize, width: usize) -> Result<()> {
        let corner = row
            .checked_add(height.saturating_sub(1))
            .zip(col.checked_add(width.saturating_sub(1)));
        let (bad_row, bad_col) = match corner {
            Some((last_row, last_col)) if self.contains(last_row, last_col) => return Ok(()),
            Some(last) => last,
            None => (row, col),
        };
        Err(LifeError::OutOfBounds {
            row: bad_row,
            col: bad_col,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Cells of one row, left to right
    pub(crate) fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Bounds-free lookup for neighbor scans; off-grid reads as dead.
    pub(crate) fn is_alive_at(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        let (row, col) = (row as usize, col as usize);
        self.contains(row, col) && self.cells[self.index(row, col)].is_alive()
    }

    /// Mark a cell alive; callers guarantee the coordinate is in range.
    pub(crate) fn revive(&mut self, row: usize, col: usize) {
        debug_assert!(self.contains(row, col));
        let idx = self.index(row, col);
        self.cells[idx] = Cell::Alive;
    }

    /// Number of live cells, as shown by the live counter
    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates of every live cell in row-major order
    pub fn live_positions(&self) -> Vec<(usize, usize)> {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }
}
