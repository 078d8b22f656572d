use std::time::Duration;

use crate::domain::ShapeConfig;

/// Half a second between generations
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Everything needed to build a [`super::Simulation`]
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    pub tick_interval: Duration,
    /// Fixed seed for reproducible boards; drawn from the OS when absent
    pub seed: Option<u64>,
    pub shapes: ShapeConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            tick_interval: DEFAULT_TICK_INTERVAL,
            seed: None,
            shapes: ShapeConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
