mod config;
mod frame_rate;
mod simulation;

pub use config::{Config, ConfigError};
pub use frame_rate::{FrameRate, caption};
pub use simulation::Simulation;
