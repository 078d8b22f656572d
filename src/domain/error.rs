//! Errors surfaced by the domain layer to its immediate caller.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("a {rows}x{cols} grid cannot fit a shape of minimum size {min_size}")]
    DegenerateGrid {
        rows: usize,
        cols: usize,
        min_size: usize,
    },
    #[error("fill probability {0} must be between 0.0 and 1.0")]
    InvalidProbability(f64),
    #[error("invalid shape configuration: {0}")]
    InvalidShapeConfig(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;
