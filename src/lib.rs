// Domain layer - grid, generation rule and seeding
pub mod domain;

// Application layer - simulation state and clock
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, LifeError, Pattern, ShapeConfig, presets};
pub use application::{Simulation, SimulationClock, SimulationConfig};
