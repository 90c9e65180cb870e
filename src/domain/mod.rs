mod cell;
mod engine;
mod error;
mod grid;
mod patterns;
pub mod rules;
pub mod seeder;

pub use cell::Cell;
pub use engine::LifeEngine;
pub use error::LifeError;
pub use grid::{Dimensions, Grid};
pub use patterns::{Pattern, presets};
pub use rules::{apply_rule, neighbor_count, step};
pub use seeder::{SeedMode, fill_defined, fill_pattern, fill_random};
