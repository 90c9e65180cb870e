use super::LifeError;

/// Cell represents the fundamental unit in Conway's Game of Life.
/// Each cell can be either Dead (0) or Alive (1).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Numeric state, as used by neighbor sums and the textual dump
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Checked conversion from a raw value; `index` only labels the error.
    pub fn from_value(value: u8, index: usize) -> Result<Self, LifeError> {
        match value {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Alive),
            _ => Err(LifeError::InvalidCellValue { index, value }),
        }
    }

    /// Next state under B3/S23:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}
