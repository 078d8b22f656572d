mod clock;
mod config;
mod simulation;

pub use clock::{ClockState, SimulationClock};
pub use config::{DEFAULT_TICK_INTERVAL, SimulationConfig};
pub use simulation::Simulation;
