use std::time::Duration;

use log::{debug, info, warn};
use rand::{SeedableRng, rngs::StdRng};

use super::{SimulationClock, SimulationConfig};
use crate::domain::{self, Cell, Grid, Pattern, Result};

/// Simulation owns the board and the clock that advances it.
/// Every mutation goes through `&mut self`, so a toggle can never
/// interleave with a generation advance.
pub struct Simulation {
    grid: Grid,
    clock: SimulationClock,
    generation: u64,
    config: SimulationConfig,
    rng: StdRng,
}

impl Simulation {
    /// Create a stopped simulation with an all-dead grid
    pub fn new(config: SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        info!(
            "simulation created: {}x{}, tick {:?}",
            config.rows, config.cols, config.tick_interval
        );
        Self {
            grid: Grid::new(config.rows, config.cols),
            clock: SimulationClock::new(config.tick_interval),
            generation: 0,
            config,
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn live_cells(&self) -> usize {
        self.grid.live_cells()
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn start(&mut self) {
        if self.clock.start() {
            info!("simulation started at generation {}", self.generation);
        }
    }

    pub fn stop(&mut self) {
        if self.clock.stop() {
            info!("simulation stopped at generation {}", self.generation);
        }
    }

    pub fn toggle_running(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Advance exactly one generation, regardless of the clock
    pub fn step(&mut self) {
        self.grid = domain::advance(&self.grid);
        self.generation += 1;
        debug!(
            "generation {}: {} live cells",
            self.generation,
            self.grid.live_cells()
        );
    }

    /// Feed frame time to the clock; advances when a tick is due.
    /// Returns whether the grid changed.
    pub fn update(&mut self, delta: Duration) -> bool {
        if self.clock.poll(delta) {
            self.step();
            true
        } else {
            false
        }
    }

    /// Replace the board with a uniform random fill
    pub fn random_fill(&mut self, probability: f64) -> Result<()> {
        let (rows, cols) = self.dimensions();
        let grid = domain::random_fill(rows, cols, probability, &mut self.rng)
            .inspect_err(|err| warn!("random fill rejected: {err}"))?;
        self.replace(grid);
        info!("random fill at {probability}: {} live cells", self.live_cells());
        Ok(())
    }

    /// Replace the board with randomly placed shapes
    pub fn random_shapes(&mut self) -> Result<()> {
        let (rows, cols) = self.dimensions();
        let grid = domain::random_shapes_with(rows, cols, &self.config.shapes, &mut self.rng)
            .inspect_err(|err| warn!("shape placement rejected: {err}"))?;
        self.replace(grid);
        info!("shape placement: {} live cells", self.live_cells());
        Ok(())
    }

    /// Stamp a pattern onto the current board
    pub fn place(&mut self, pattern: &Pattern, row: usize, col: usize) -> Result<()> {
        pattern.place_on(&mut self.grid, row, col)?;
        debug!("placed {} at ({row}, {col})", pattern.name);
        Ok(())
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        let (rows, cols) = self.dimensions();
        self.replace(Grid::new(rows, cols));
        info!("grid cleared");
    }

    /// Flip one cell (manual editing)
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell> {
        let cell = self.grid.toggle(row, col)?;
        debug!("toggled ({row}, {col}) to {cell:?}");
        Ok(cell)
    }

    /// Swap in a fresh all-dead grid of new dimensions.
    /// Any tick pending against the old grid is dropped.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        if self.dimensions() == (rows, cols) {
            return;
        }
        self.config.rows = rows;
        self.config.cols = cols;
        self.replace(Grid::new(rows, cols));
        info!("grid resized to {rows}x{cols}");
    }

    fn replace(&mut self, grid: Grid) {
        self.grid = grid;
        self.generation = 0;
        self.clock.reset();
    }
}
