use super::{Cell, Grid};

/// A small arrangement of live cells that can be stamped onto a grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<(usize, usize)>, // (row, col) offsets of live cells
}

impl Pattern {
    /// Create a new pattern from live cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|&(r, _)| r).max().unwrap_or(0) + 1;
        let cols = cells.iter().map(|&(_, c)| c).max().unwrap_or(0) + 1;
        Self { name, description, rows, cols, cells }
    }

    /// Stamp the pattern with its top-left corner at (row, col).
    /// Offsets past the edge wrap around the torus.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) {
        let dims = grid.dimensions();
        for &(dr, dc) in &self.cells {
            let (r, c) = dims.wrap((row + dr) as isize, (col + dc) as isize);
            grid.set(r, c, Cell::Alive);
        }
    }

    /// Stamp the pattern centred on the grid.
    pub fn place_centered(&self, grid: &mut Grid) {
        let dims = grid.dimensions();
        let row = dims.rows().saturating_sub(self.rows) / 2;
        let col = dims.cols().saturating_sub(self.cols) / 2;
        self.place_on(grid, row, col);
    }
}

/// Classic small patterns
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("block", "Still life", vec![(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("blinker", "Oscillator (period 2)", vec![(0, 0), (0, 1), (0, 2)])
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Glider - moves one cell diagonally every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Spaceship (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), toad(), beacon(), glider()]
    }

    /// Look up a preset by name, ignoring case
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Dimensions;

    #[test]
    fn test_pattern_bounds() {
        let glider = presets::glider();
        assert_eq!((glider.rows, glider.cols), (3, 3));
        let toad = presets::toad();
        assert_eq!((toad.rows, toad.cols), (2, 4));
    }

    #[test]
    fn test_place_wraps_around_edges() {
        let mut grid = Grid::new(Dimensions::new(4, 4).unwrap()).unwrap();
        presets::block().place_on(&mut grid, 3, 3);
        let live: Vec<_> = grid.live_cells().collect();
        assert_eq!(live, vec![(0, 0), (0, 3), (3, 0), (3, 3)]);
    }

    #[test]
    fn test_place_centered() {
        let mut grid = Grid::new(Dimensions::new(7, 7).unwrap()).unwrap();
        presets::blinker().place_centered(&mut grid);
        let live: Vec<_> = grid.live_cells().collect();
        assert_eq!(live, vec![(3, 2), (3, 3), (3, 4)]);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(presets::by_name("Glider"), Some(presets::glider()));
        assert_eq!(presets::by_name("gosper"), None);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
