use std::fmt;

use super::{Cell, LifeError};

/// Shape of a toroidal grid. Owns the row-major addressing convention
/// `index = col + row * cols` and the wrap-around rule for neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    /// Both axes must be positive and their product must fit in `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, LifeError> {
        match rows.checked_mul(cols) {
            Some(len) if len > 0 && len <= isize::MAX as usize => Ok(Self { rows, cols }),
            _ => Err(LifeError::InvalidDimensions { rows, cols }),
        }
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells in a buffer of this shape
    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Never true; a `Dimensions` always holds at least one cell.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Convert 2D coordinates to the row-major linear index
    pub const fn index(&self, row: usize, col: usize) -> usize {
        col + row * self.cols
    }

    /// Convert a linear index back to (row, col)
    pub const fn position(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Map a possibly out-of-range coordinate onto the torus, each axis
    /// independently: -1 lands on the last row/col, `rows`/`cols` on 0.
    pub const fn wrap(&self, row: isize, col: isize) -> (usize, usize) {
        (
            row.rem_euclid(self.rows as isize) as usize,
            col.rem_euclid(self.cols as isize) as usize,
        )
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// One generation buffer: `rows * cols` cells in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a grid with all cells dead.
    pub fn new(dims: Dimensions) -> Result<Self, LifeError> {
        let len = dims.len();
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| LifeError::AllocationFailure { cells: len })?;
        cells.resize(len, Cell::Dead);
        Ok(Self { dims, cells })
    }

    /// Build a grid from raw 0/1 values in row-major order.
    pub fn from_values(dims: Dimensions, values: &[u8]) -> Result<Self, LifeError> {
        if values.len() != dims.len() {
            return Err(LifeError::DimensionMismatch {
                expected: dims.len(),
                actual: values.len(),
            });
        }
        let mut grid = Self::new(dims)?;
        for (index, (cell, &value)) in grid.cells.iter_mut().zip(values).enumerate() {
            *cell = Cell::from_value(value, index)?;
        }
        Ok(grid)
    }

    /// Build a grid with exactly the listed (row, col) cells alive.
    /// Every coordinate must lie inside `dims`.
    pub fn with_alive(dims: Dimensions, alive: &[(usize, usize)]) -> Result<Self, LifeError> {
        let mut grid = Self::new(dims)?;
        for &(row, col) in alive {
            if !dims.contains(row, col) {
                return Err(LifeError::OutOfBounds {
                    row,
                    col,
                    rows: dims.rows(),
                    cols: dims.cols(),
                });
            }
            grid.set(row, col, Cell::Alive);
        }
        Ok(grid)
    }

    pub const fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.dims
            .contains(row, col)
            .then(|| self.cells[self.dims.index(row, col)])
    }

    /// Set cell at position; out-of-range coordinates are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if self.dims.contains(row, col) {
            let idx = self.dims.index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Cell at a linear index. Panics if out of range.
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells.iter().enumerate().map(move |(index, &cell)| {
            let (row, col) = self.dims.position(index);
            (row, col, cell)
        })
    }

    /// Positions of live cells, row-major
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
    }
}

/// Textual dump format: one line per row, space-separated `0`/`1` tokens.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.dims.cols) {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.value())?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
