//! Seeding: uniform random fills and procedural shape placement.
//!
//! All generators take the random source from the caller, so a seeded
//! `StdRng` makes any board reproducible.

use std::ops::Range;

use rand::Rng;

use super::{Cell, Grid, LifeError, Result};

/// Probability used by the "Random 10%" preset
pub const SPARSE_DENSITY: f64 = 0.1;
/// Probability used by the "Random 30%" preset
pub const DENSE_DENSITY: f64 = 0.3;

/// Fill a fresh grid where each cell is alive with `probability`.
pub fn random_fill<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    probability: f64,
    rng: &mut R,
) -> Result<Grid> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(LifeError::InvalidProbability(probability));
    }
    Ok(Grid::from_fn(rows, cols, |_, _| Cell::from(rng.random_bool(probability))))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    /// Filled `size`x`size` block
    Square,
    /// Right triangle, row `i` holds `i + 1` cells
    Triangle,
    /// Plus sign overlaid with both diagonals
    Star,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Square, ShapeKind::Triangle, ShapeKind::Star];
}

/// One placement: a shape kind, its top-left origin and its side length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub row: usize,
    pub col: usize,
    pub size: usize,
}

impl Shape {
    /// Whether local cell (i, j) of the bounding box is part of the shape
    pub fn covers(&self, i: usize, j: usize) -> bool {
        if i >= self.size || j >= self.size {
            return false;
        }
        match self.kind {
            ShapeKind::Square => true,
            ShapeKind::Triangle => j <= i,
            ShapeKind::Star => {
                let mid = self.size / 2;
                i == mid || j == mid || i == j || i + j == self.size - 1
            }
        }
    }

    /// Area credited towards coverage. Stars are credited their full box,
    /// so this overestimates the cells actually set.
    pub fn area(&self) -> usize {
        match self.kind {
            ShapeKind::Square | ShapeKind::Star => self.size * self.size,
            ShapeKind::Triangle => self.size * (self.size + 1) / 2,
        }
    }

    /// Set the shape's cells alive and return its credited area.
    pub fn stamp(&self, grid: &mut Grid) -> Result<usize> {
        if self.size == 0 {
            return Ok(0);
        }
        grid.check_box(self.row, self.col, self.size, self.size)?;
        for i in 0..self.size {
            for j in (0..self.size).filter(|&j| self.covers(i, j)) {
                grid.revive(self.row + i, self.col + j);
            }
        }
        Ok(self.area())
    }

    /// Draw a shape whose bounding box fits inside `rows`x`cols`.
    /// `sizes` must be non-empty and its end must not exceed `min(rows, cols) + 1`.
    fn random<R: Rng + ?Sized>(rng: &mut R, sizes: Range<usize>, rows: usize, cols: usize) -> Self {
        let kind = ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())];
        let size = rng.random_range(sizes);
        Self {
            kind,
            row: rng.random_range(0..=rows - size),
            col: rng.random_range(0..=cols - size),
            size,
        }
    }
}

/// Tuning for procedural shape placement
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeConfig {
    /// Fraction of the grid area to cover before stopping
    pub coverage: f64,
    /// Smallest side length drawn (inclusive)
    pub min_size: usize,
    /// Largest side length drawn (exclusive)
    pub max_size: usize,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            coverage: 0.4,
            min_size: 4,
            max_size: 16,
        }
    }
}

impl ShapeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_size == 0 {
            return Err(LifeError::InvalidShapeConfig("min_size must be non-zero".into()));
        }
        if self.min_size >= self.max_size {
            return Err(LifeError::InvalidShapeConfig(format!(
                "min_size {} must be below max_size {}",
                self.min_size, self.max_size
            )));
        }
        if !(0.0..=1.0).contains(&self.coverage) {
            return Err(LifeError::InvalidShapeConfig(format!(
                "coverage {} must be between 0.0 and 1.0",
                self.coverage
            )));
        }
        Ok(())
    }

    /// Credited area at which placement stops
    pub fn target_area(&self, rows: usize, cols: usize) -> usize {
        ((rows * cols) as f64 * self.coverage).floor() as usize
    }
}

/// Scatter random shapes over an empty grid using the default tuning.
pub fn random_shapes<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Grid> {
    random_shapes_with(rows, cols, &ShapeConfig::default(), rng)
}

/// Scatter random shapes until the credited area reaches the coverage target.
/// Shapes may overlap. Grids smaller than `min_size` on either side are rejected.
pub fn random_shapes_with<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    config: &ShapeConfig,
    rng: &mut R,
) -> Result<Grid> {
    place_shapes(rows, cols, config, rng).map(|(grid, _)| grid)
}

fn place_shapes<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    config: &ShapeConfig,
    rng: &mut R,
) -> Result<(Grid, usize)> {
    config.validate()?;
    if rows < config.min_size || cols < config.min_size {
        return Err(LifeError::DegenerateGrid { rows, cols, min_size: config.min_size });
    }

    // Sizes at or above this never fit. Drawing below it is the same
    // distribution as re-drawing until a shape fits.
    let size_limit = config.max_size.min(rows + 1).min(cols + 1);
    let target = config.target_area(rows, cols);

    let mut grid = Grid::new(rows, cols);
    let mut covered = 0;
    while covered < target {
        let shape = Shape::random(rng, config.min_size..size_limit, rows, cols);
        covered += shape.stamp(&mut grid)?;
    }
    Ok((grid, covered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn live_local(shape: &Shape) -> Vec<(usize, usize)> {
        let mut grid = Grid::new(shape.size, shape.size);
        let local = Shape { row: 0, col: 0, ..*shape };
        local.stamp(&mut grid).unwrap();
        grid.live_positions()
    }

    #[test]
    fn test_fill_with_zero_is_all_dead() {
        let grid = random_fill(20, 30, 0.0, &mut rng(1)).unwrap();
        assert_eq!(grid.dimensions(), (20, 30));
        assert_eq!(grid.live_cells(), 0);
    }

    #[test]
    fn test_fill_with_one_is_all_alive() {
        let grid = random_fill(20, 30, 1.0, &mut rng(1)).unwrap();
        assert_eq!(grid.live_cells(), 600);
    }

    #[test]
    fn test_fill_density_is_roughly_respected() {
        let grid = random_fill(100, 100, DENSE_DENSITY, &mut rng(3)).unwrap();
        let live = grid.live_cells();
        assert!((2500..3500).contains(&live), "got {live}");
    }

    #[test]
    fn test_fill_is_reproducible_with_seed() {
        let a = random_fill(16, 16, SPARSE_DENSITY, &mut rng(42)).unwrap();
        let b = random_fill(16, 16, SPARSE_DENSITY, &mut rng(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fill_rejects_bad_probability() {
        assert_eq!(
            random_fill(4, 4, 1.5, &mut rng(0)),
            Err(LifeError::InvalidProbability(1.5))
        );
        assert!(random_fill(4, 4, -0.1, &mut rng(0)).is_err());
        assert!(random_fill(4, 4, f64::NAN, &mut rng(0)).is_err());
    }

    #[test]
    fn test_square_geometry() {
        let shape = Shape { kind: ShapeKind::Square, row: 0, col: 0, size: 4 };
        assert_eq!(live_local(&shape).len(), 16);
        assert_eq!(shape.area(), 16);
    }

    #[test]
    fn test_triangle_geometry() {
        let shape = Shape { kind: ShapeKind::Triangle, row: 0, col: 0, size: 4 };
        let cells = live_local(&shape);
        assert_eq!(cells.len(), 10);
        assert_eq!(shape.area(), 10);
        assert!(cells.contains(&(0, 0)));
        assert!(!cells.contains(&(0, 1)));
        assert!(cells.contains(&(3, 3)));
    }

    #[test]
    fn test_star_geometry() {
        let shape = Shape { kind: ShapeKind::Star, row: 0, col: 0, size: 5 };
        let cells = live_local(&shape);
        // Plus (9) and diagonals (9) share the center
        assert_eq!(cells.len(), 17);
        assert!(cells.contains(&(2, 0)) && cells.contains(&(0, 2)));
        assert!(cells.contains(&(0, 0)) && cells.contains(&(0, 4)));
        assert!(!cells.contains(&(0, 1)));
        assert_eq!(shape.area(), 25);
    }

    #[test]
    fn test_stamp_outside_grid_is_rejected() {
        let mut grid = Grid::new(5, 5);
        let shape = Shape { kind: ShapeKind::Square, row: 2, col: 0, size: 4 };
        assert!(matches!(shape.stamp(&mut grid), Err(LifeError::OutOfBounds { .. })));
        assert_eq!(grid.live_cells(), 0);
    }

    #[test]
    fn test_stamp_far_off_grid_is_rejected() {
        let mut grid = Grid::new(10, 10);
        for kind in ShapeKind::ALL {
            let below = Shape { kind, row: usize::MAX, col: 0, size: 4 };
            let right = Shape { kind, row: 0, col: usize::MAX - 2, size: 4 };
            assert!(matches!(below.stamp(&mut grid), Err(LifeError::OutOfBounds { .. })));
            assert!(matches!(right.stamp(&mut grid), Err(LifeError::OutOfBounds { .. })));
        }
        assert_eq!(grid.live_cells(), 0);
    }

    #[test]
    fn test_shapes_reach_coverage_target() {
        let config = ShapeConfig::default();
        for seed in 0..20 {
            let (grid, covered) = place_shapes(40, 60, &config, &mut rng(seed)).unwrap();
            assert!(covered >= config.target_area(40, 60));
            // Credited area never undercounts the live cells
            assert!(grid.live_cells() <= covered);
            assert!(grid.live_cells() > 0);
        }
    }

    #[test]
    fn test_shapes_terminate_on_minimum_grid() {
        for seed in 0..200 {
            let grid = random_shapes(4, 4, &mut rng(seed)).unwrap();
            assert_eq!(grid.dimensions(), (4, 4));
            assert!(grid.live_cells() > 0);
        }
    }

    #[test]
    fn test_shapes_on_narrow_grid_stay_in_bounds() {
        for seed in 0..100 {
            let grid = random_shapes(5, 200, &mut rng(seed)).unwrap();
            assert_eq!(grid.dimensions(), (5, 200));
        }
    }

    #[test]
    fn test_degenerate_grid_is_rejected() {
        assert_eq!(
            random_shapes(3, 100, &mut rng(0)),
            Err(LifeError::DegenerateGrid { rows: 3, cols: 100, min_size: 4 })
        );
        assert!(random_shapes(0, 0, &mut rng(0)).is_err());
    }

    #[test]
    fn test_zero_coverage_places_nothing() {
        let config = ShapeConfig { coverage: 0.0, ..ShapeConfig::default() };
        let grid = random_shapes_with(10, 10, &config, &mut rng(9)).unwrap();
        assert_eq!(grid.live_cells(), 0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let inverted = ShapeConfig { min_size: 8, max_size: 8, ..ShapeConfig::default() };
        assert!(matches!(inverted.validate(), Err(LifeError::InvalidShapeConfig(_))));
        let empty = ShapeConfig { min_size: 0, ..ShapeConfig::default() };
        assert!(empty.validate().is_err());
        let over = ShapeConfig { coverage: 1.2, ..ShapeConfig::default() };
        assert!(random_shapes_with(10, 10, &over, &mut rng(0)).is_err());
    }
}
