use super::{Grid, Result};

/// A fixed pattern that can be stamped onto the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<(usize, usize)>, // (row, col) offsets of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|(r, _)| *r).max().map_or(0, |r| r + 1);
        let cols = cells.iter().map(|(_, c)| *c).max().map_or(0, |c| c + 1);
        Self { name, rows, cols, cells }
    }

    /// Stamp the pattern with its top-left corner at (row, col).
    /// Nothing is written unless the whole bounding box fits.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) -> Result<()> {
        if self.rows > 0 {
            grid.check_box(row, col, self.rows, self.cols)?;
        }
        for &(dr, dc) in &self.cells {
            grid.revive(row + dr, col + dc);
        }
        Ok(())
    }
}

/// Small library of classic patterns
pub mod presets {
    use super::*;

    /// Glider - moves one cell down and right every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", vec![(0, 0), (0, 1), (0, 2)])
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, LifeError, advance};

    #[test]
    fn test_bounding_boxes() {
        let glider = presets::glider();
        assert_eq!((glider.rows, glider.cols), (3, 3));
        let blinker = presets::blinker();
        assert_eq!((blinker.rows, blinker.cols), (1, 3));
    }

    #[test]
    fn test_place_on_offsets_cells() {
        let mut grid = Grid::new(6, 6);
        presets::block().place_on(&mut grid, 4, 4).unwrap();
        assert_eq!(grid.live_positions(), vec![(4, 4), (4, 5), (5, 4), (5, 5)]);
    }

    #[test]
    fn test_place_off_grid_writes_nothing() {
        let mut grid = Grid::new(6, 6);
        let result = presets::glider().place_on(&mut grid, 4, 0);
        assert!(matches!(result, Err(LifeError::OutOfBounds { row: 6, .. })));
        assert_eq!(grid.live_cells(), 0);
    }

    #[test]
    fn test_place_far_off_grid_is_rejected() {
        let mut grid = Grid::new(10, 10);
        let glider = presets::glider();
        assert!(matches!(
            glider.place_on(&mut grid, usize::MAX, 0),
            Err(LifeError::OutOfBounds { .. })
        ));
        assert!(matches!(
            glider.place_on(&mut grid, 0, usize::MAX - 1),
            Err(LifeError::OutOfBounds { .. })
        ));
        assert_eq!(grid.live_cells(), 0);
    }

    #[test]
    fn test_placed_blinker_turns_vertical() {
        let mut grid = Grid::new(7, 7);
        presets::blinker().place_on(&mut grid, 3, 2).unwrap();
        let next = advance(&grid);
        assert_eq!(next.live_positions(), vec![(2, 3), (3, 3), (4, 3)]);
        assert_eq!(advance(&next).get(3, 2), Ok(Cell::Alive));
    }
}
