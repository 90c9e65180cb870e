// Domain layer - Simulation core
pub mod domain;

// Application layer - Pacing and configuration
pub mod application;

// Infrastructure layer - Rendering, input, state dump
pub mod rendering;
pub mod input;
pub mod report;

// Re-exports for convenience
pub use domain::{Cell, Dimensions, Grid, LifeEngine, LifeError, Pattern, SeedMode, presets};
pub use application::{Config, ConfigError, FrameRate, Simulation};
pub use report::StateDump;
