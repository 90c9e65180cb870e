//! Initial population of a generation buffer.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use tracing::debug;

use super::{Cell, Grid, LifeError, Pattern, presets};

/// How the first generation is populated
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SeedMode {
    /// Each cell independently alive with probability 1/2
    Random,
    /// Even linear indices alive, two centre cells knocked out
    #[default]
    Defined,
    /// A preset pattern centred on an otherwise dead grid
    Pattern(Pattern),
}

impl FromStr for SeedMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(SeedMode::Random),
            "defined" => Ok(SeedMode::Defined),
            other => presets::by_name(other)
                .map(SeedMode::Pattern)
                .ok_or_else(|| s.to_owned()),
        }
    }
}

impl fmt::Display for SeedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedMode::Random => f.write_str("random"),
            SeedMode::Defined => f.write_str("defined"),
            SeedMode::Pattern(p) => f.write_str(p.name),
        }
    }
}

/// Fill every cell with a fair coin flip from `rng`.
///
/// Each drawn value is checked against {0, 1} before it is stored; a value
/// outside that range aborts the fill with `InvalidCellValue`.
pub fn fill_random<R: Rng>(grid: &mut Grid, rng: &mut R) -> Result<(), LifeError> {
    for (index, cell) in grid.cells_mut().iter_mut().enumerate() {
        let value: u8 = rng.random_range(0..2);
        *cell = Cell::from_value(value, index)?;
    }
    debug!(population = grid.population(), "random seed");
    Ok(())
}

/// Symmetric pattern: alive iff the linear index is even, then the middle-row
/// pair at `cols/2` and `cols/2 + 1` is forced dead so the structure collapses.
pub fn fill_defined(grid: &mut Grid) {
    let dims = grid.dimensions();
    let cells = grid.cells_mut();
    for (index, cell) in cells.iter_mut().enumerate() {
        *cell = Cell::from(index % 2 == 0);
    }

    let middle = dims.cols() / 2 + dims.rows() / 2 * dims.cols();
    for index in [middle, middle + 1] {
        // Only a one-column grid can push the second index off the end.
        if let Some(cell) = cells.get_mut(index) {
            *cell = Cell::Dead;
        }
    }
    debug!(population = grid.population(), "defined seed");
}

/// Clear the grid and stamp `pattern` in the middle.
pub fn fill_pattern(grid: &mut Grid, pattern: &Pattern) {
    grid.clear();
    pattern.place_centered(grid);
    debug!(pattern = pattern.name, population = grid.population(), "pattern seed");
}

/// Populate `grid` according to `mode`.
pub fn seed<R: Rng>(grid: &mut Grid, mode: &SeedMode, rng: &mut R) -> Result<(), LifeError> {
    match mode {
        SeedMode::Random => fill_random(grid, rng),
        SeedMode::Defined => {
            fill_defined(grid);
            Ok(())
        }
        SeedMode::Pattern(pattern) => {
            fill_pattern(grid, pattern);
            Ok(())
        }
    }
}
