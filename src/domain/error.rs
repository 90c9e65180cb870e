use thiserror::Error;

/// Failures raised by the simulation core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// A raw cell value outside {0, 1}.
    #[error("invalid cell value {value} at index {index}")]
    InvalidCellValue { index: usize, value: u8 },

    /// The generation buffers could not be allocated.
    #[error("failed to allocate a buffer of {cells} cells")]
    AllocationFailure { cells: usize },

    /// A buffer whose length does not match the grid it is paired with.
    #[error("dimension mismatch: expected {expected} cells, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// A coordinate outside the grid it was given for.
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds { row: usize, col: usize, rows: usize, cols: usize },
}
