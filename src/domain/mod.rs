mod cell;
mod engine;
mod error;
mod grid;
mod neighbors;
mod patterns;
pub mod seeder;

pub use cell::Cell;
pub use engine::{advance, advance_parallel};
pub use error::{LifeError, Result};
pub use grid::Grid;
pub use neighbors::count_live_neighbors;
pub use patterns::{Pattern, presets};
pub use seeder::{
    DENSE_DENSITY, SPARSE_DENSITY, Shape, ShapeConfig, ShapeKind, random_fill, random_shapes,
    random_shapes_with,
};
