//! Conway's rule (B3/S23) on a toroidal grid.

use super::{Grid, LifeError};

/// Moore neighborhood as (row, col) offsets: S, SE, E, NE, N, NW, W, SW.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Count live cells among the 8 neighbors of (row, col), wrapping at the edges.
pub fn neighbor_count(current: &Grid, row: usize, col: usize) -> u8 {
    let dims = current.dimensions();
    NEIGHBOR_OFFSETS
        .iter()
        .map(|&(dr, dc)| {
            let (nr, nc) = dims.wrap(row as isize + dr, col as isize + dc);
            current.cell(dims.index(nr, nc)).value()
        })
        .sum()
}

/// Write the next state of (row, col) into `next`. Every outcome is written,
/// so `next` may hold anything beforehand.
pub fn apply_rule(current: &Grid, next: &mut Grid, row: usize, col: usize, live_neighbors: u8) {
    let index = current.dimensions().index(row, col);
    next.cells_mut()[index] = current.cell(index).evolve(live_neighbors);
}

/// Advance one generation from `current` into `next`.
///
/// `current` is only read. Both buffers must share the same dimensions.
pub fn step(current: &Grid, next: &mut Grid) -> Result<(), LifeError> {
    if current.dimensions() != next.dimensions() {
        return Err(LifeError::DimensionMismatch {
            expected: current.dimensions().len(),
            actual: next.dimensions().len(),
        });
    }
    step_unchecked(current, next);
    Ok(())
}

pub(crate) fn step_unchecked(current: &Grid, next: &mut Grid) {
    let dims = current.dimensions();
    for row in 0..dims.rows() {
        for col in 0..dims.cols() {
            let neighbors = neighbor_count(current, row, col);
            apply_rule(current, next, row, col, neighbors);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, Dimensions};

    fn grid(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Grid {
        Grid::with_alive(Dimensions::new(rows, cols).unwrap(), alive).unwrap()
    }

    #[test]
    fn test_interior_neighbors() {
        let g = grid(5, 5, &[(1, 1), (1, 2), (1, 3), (2, 1), (3, 3)]);
        assert_eq!(neighbor_count(&g, 2, 2), 5);
        assert_eq!(neighbor_count(&g, 1, 2), 3);
        assert_eq!(neighbor_count(&g, 4, 0), 0);
    }

    #[test]
    fn test_full_neighborhood() {
        let g = Grid::from_values(Dimensions::new(3, 3).unwrap(), &[1; 9]).unwrap();
        // On a 3x3 torus every other cell is a neighbor exactly once.
        assert_eq!(neighbor_count(&g, 1, 1), 8);
        assert_eq!(neighbor_count(&g, 0, 0), 8);
    }

    #[test]
    fn test_corner_sees_opposite_corner() {
        let (rows, cols) = (6, 7);
        let corners = [(0, 0), (0, cols - 1), (rows - 1, 0), (rows - 1, cols - 1)];
        for &(r, c) in &corners {
            let g = grid(rows, cols, &[(r, c)]);
            // Each corner is a diagonal neighbor of the other three corners.
            for &(or, oc) in corners.iter().filter(|&&p| p != (r, c)) {
                assert_eq!(neighbor_count(&g, or, oc), 1, "corner {:?} from {:?}", (r, c), (or, oc));
            }
        }
    }

    #[test]
    fn test_origin_counts_bottom_right_diagonal() {
        let g = grid(6, 6, &[(5, 5)]);
        assert_eq!(neighbor_count(&g, 0, 0), 1);
    }

    #[test]
    fn test_edges_wrap() {
        // Top edge sees bottom row, left edge sees right column.
        let g = grid(5, 5, &[(4, 2), (2, 4)]);
        assert_eq!(neighbor_count(&g, 0, 2), 1);
        assert_eq!(neighbor_count(&g, 0, 1), 1);
        assert_eq!(neighbor_count(&g, 2, 0), 1);
        assert_eq!(neighbor_count(&g, 3, 0), 1);
        assert_eq!(neighbor_count(&g, 2, 2), 0);

        // Bottom edge sees top row, right edge sees left column.
        let g = grid(5, 5, &[(0, 2), (2, 0)]);
        assert_eq!(neighbor_count(&g, 4, 2), 1);
        assert_eq!(neighbor_count(&g, 4, 1), 1);
        assert_eq!(neighbor_count(&g, 4, 3), 1);
        assert_eq!(neighbor_count(&g, 2, 4), 1);
        assert_eq!(neighbor_count(&g, 3, 4), 1);
        assert_eq!(neighbor_count(&g, 1, 4), 1);
        assert_eq!(neighbor_count(&g, 2, 2), 0);
    }

    #[test]
    fn test_apply_rule_overwrites_stale_next() {
        let current = grid(4, 4, &[(1, 1)]);
        let mut next = Grid::from_values(Dimensions::new(4, 4).unwrap(), &[1; 16]).unwrap();
        apply_rule(&current, &mut next, 0, 0, 0);
        apply_rule(&current, &mut next, 1, 1, 2);
        apply_rule(&current, &mut next, 2, 2, 3);
        apply_rule(&current, &mut next, 3, 3, 4);
        assert_eq!(next.get(0, 0), Some(Cell::Dead));
        assert_eq!(next.get(1, 1), Some(Cell::Alive));
        assert_eq!(next.get(2, 2), Some(Cell::Alive));
        assert_eq!(next.get(3, 3), Some(Cell::Dead));
    }

    #[test]
    fn test_step_rejects_mismatched_buffers() {
        let current = grid(4, 4, &[]);
        let mut next = grid(4, 5, &[]);
        assert_eq!(
            step(&current, &mut next),
            Err(LifeError::DimensionMismatch { expected: 16, actual: 20 })
        );
    }

    #[test]
    fn test_step_leaves_current_untouched() {
        let current = grid(6, 6, &[(2, 1), (2, 2), (2, 3)]);
        let before = current.clone();
        let mut next = grid(6, 6, &[(0, 0), (5, 5)]);
        step(&current, &mut next).unwrap();
        assert_eq!(current, before);
        let live: Vec<_> = next.live_cells().collect();
        assert_eq!(live, vec![(1, 2), (2, 2), (3, 2)]);
    }
}
