use std::path::PathBuf;
use std::sync::OnceLock;

use thiserror::Error;

use crate::application::Simulation;
use crate::domain::{Dimensions, LifeError, SeedMode};

/// Errors raised while reading the command line
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown flag `{0}`")]
    UnknownFlag(String),

    #[error("flag `{0}` needs a value")]
    MissingValue(&'static str),

    #[error("invalid value `{value}` for `{flag}`")]
    InvalidValue { flag: &'static str, value: String },

    #[error("unknown seed mode `{0}` (expected random, defined or a preset name)")]
    UnknownSeedMode(String),

    #[error(transparent)]
    Grid(#[from] LifeError),
}

/// Driver settings. Defaults reproduce the classic 10x10 demo.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub generations_per_second: f32,
    pub seed: SeedMode,
    /// Fixed RNG seed; wall-clock time when absent
    pub rng_seed: Option<u64>,
    /// Pixel size of one cell tile
    pub tile_size: f32,
    pub cell_image: String,
    /// Append every generation as text to this file
    pub dump: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: Self::DEFAULT_ROWS,
            cols: Self::DEFAULT_COLS,
            generations_per_second: Self::DEFAULT_GPS,
            seed: SeedMode::Defined,
            rng_seed: None,
            tile_size: Self::DEFAULT_TILE_SIZE,
            cell_image: "cell.png".to_owned(),
            dump: None,
        }
    }
}

impl Config {
    pub const DEFAULT_ROWS: usize = 10;
    pub const DEFAULT_COLS: usize = 10;
    pub const DEFAULT_GPS: f32 = 10.0;
    pub const DEFAULT_TILE_SIZE: f32 = 12.0;

    pub const USAGE: &'static str = "\
usage: toroidal_life [options]
  --rows N          grid rows (default 10)
  --cols N          grid columns (default 10)
  --gps N           generations per second, 1 to 60 (default 10)
  --seed MODE       random | defined | block | blinker | toad | beacon | glider
  --rng-seed N      fixed seed for the random generator
  --tile N          tile size in pixels (default 12)
  --cell-image PATH tile image (default cell.png)
  --dump PATH       write every generation to PATH as text";

    /// Process-wide configuration parsed once from the command line.
    pub fn get() -> &'static Result<Config, ConfigError> {
        static CONFIG: OnceLock<Result<Config, ConfigError>> = OnceLock::new();
        CONFIG.get_or_init(|| Config::from_args(std::env::args().skip(1)))
    }

    /// Parse `--flag value` / `--flag=value` pairs on top of the defaults.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let (name, inline) = match arg.split_once('=') {
                Some((name, value)) => (name.to_owned(), Some(value.to_owned())),
                None => (arg, None),
            };
            let flag = Flag::lookup(&name)?;
            let value = inline
                .or_else(|| args.next())
                .ok_or(ConfigError::MissingValue(flag.name()))?;
            let name = flag.name();

            match flag {
                Flag::Rows => config.rows = parse(name, &value)?,
                Flag::Cols => config.cols = parse(name, &value)?,
                Flag::Gps => config.generations_per_second = speed(name, &value)?,
                Flag::Seed => {
                    config.seed = value
                        .parse()
                        .map_err(ConfigError::UnknownSeedMode)?;
                }
                Flag::RngSeed => config.rng_seed = Some(parse(name, &value)?),
                Flag::Tile => config.tile_size = positive(name, &value)?,
                Flag::CellImage => config.cell_image = value,
                Flag::Dump => config.dump = Some(PathBuf::from(value)),
            }
        }

        config.dimensions()?;
        Ok(config)
    }

    pub fn dimensions(&self) -> Result<Dimensions, LifeError> {
        Dimensions::new(self.rows, self.cols)
    }

    /// Window size in pixels: one tile per cell
    pub fn window_size(&self) -> (i32, i32) {
        (
            (self.cols as f32 * self.tile_size) as i32,
            (self.rows as f32 * self.tile_size) as i32,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flag {
    Rows,
    Cols,
    Gps,
    Seed,
    RngSeed,
    Tile,
    CellImage,
    Dump,
}

impl Flag {
    const ALL: [Flag; 8] = [
        Flag::Rows,
        Flag::Cols,
        Flag::Gps,
        Flag::Seed,
        Flag::RngSeed,
        Flag::Tile,
        Flag::CellImage,
        Flag::Dump,
    ];

    const fn name(self) -> &'static str {
        match self {
            Flag::Rows => "--rows",
            Flag::Cols => "--cols",
            Flag::Gps => "--gps",
            Flag::Seed => "--seed",
            Flag::RngSeed => "--rng-seed",
            Flag::Tile => "--tile",
            Flag::CellImage => "--cell-image",
            Flag::Dump => "--dump",
        }
    }

    fn lookup(name: &str) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|flag| flag.name() == name)
            .ok_or_else(|| ConfigError::UnknownFlag(name.to_owned()))
    }
}

fn parse<T: std::str::FromStr>(flag: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        flag,
        value: value.to_owned(),
    })
}

fn positive(flag: &'static str, value: &str) -> Result<f32, ConfigError> {
    let parsed: f32 = parse(flag, value)?;
    if parsed.is_finite() && parsed > 0.0 {
        Ok(parsed)
    } else {
        Err(ConfigError::InvalidValue {
            flag,
            value: value.to_owned(),
        })
    }
}

/// A generation rate the speed keys could also reach
fn speed(flag: &'static str, value: &str) -> Result<f32, ConfigError> {
    let parsed = positive(flag, value)?;
    if (Simulation::MIN_SPEED..=Simulation::MAX_SPEED).contains(&parsed) {
        Ok(parsed)
    } else {
        Err(ConfigError::InvalidValue {
            flag,
            value: value.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(Vec::new()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.window_size(), (120, 120));
        assert_eq!(config.seed, SeedMode::Defined);
    }

    #[test]
    fn test_parse_all_flags() {
        let config = Config::from_args(args(&[
            "--rows", "20",
            "--cols=30",
            "--gps", "2.5",
            "--seed", "glider",
            "--rng-seed", "42",
            "--tile", "8",
            "--cell-image", "tile.png",
            "--dump", "out.txt",
        ]))
        .unwrap();
        assert_eq!((config.rows, config.cols), (20, 30));
        assert_eq!(config.generations_per_second, 2.5);
        assert_eq!(config.seed, SeedMode::Pattern(presets::glider()));
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.window_size(), (240, 160));
        assert_eq!(config.cell_image, "tile.png");
        assert_eq!(config.dump, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_gps_stays_within_speed_range() {
        for value in ["0.5", "61", "1e9"] {
            assert_eq!(
                Config::from_args(args(&["--gps", value])),
                Err(ConfigError::InvalidValue { flag: "--gps", value: value.to_owned() })
            );
        }
        let slowest = Config::from_args(args(&["--gps", "1"])).unwrap();
        assert_eq!(slowest.generations_per_second, Simulation::MIN_SPEED);
        let fastest = Config::from_args(args(&["--gps=60"])).unwrap();
        assert_eq!(fastest.generations_per_second, Simulation::MAX_SPEED);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            Config::from_args(args(&["--frobnicate", "1"])),
            Err(ConfigError::UnknownFlag("--frobnicate".to_owned()))
        );
        assert_eq!(
            Config::from_args(args(&["--rows"])),
            Err(ConfigError::MissingValue("--rows"))
        );
        assert_eq!(
            Config::from_args(args(&["--cols", "ten"])),
            Err(ConfigError::InvalidValue { flag: "--cols", value: "ten".to_owned() })
        );
        assert_eq!(
            Config::from_args(args(&["--gps", "0"])),
            Err(ConfigError::InvalidValue { flag: "--gps", value: "0".to_owned() })
        );
        assert_eq!(
            Config::from_args(args(&["--seed", "chaos"])),
            Err(ConfigError::UnknownSeedMode("chaos".to_owned()))
        );
    }

    #[test]
    fn test_rejects_empty_grid() {
        assert_eq!(
            Config::from_args(args(&["--rows", "0"])),
            Err(ConfigError::Grid(LifeError::InvalidDimensions { rows: 0, cols: 10 }))
        );
    }
}
