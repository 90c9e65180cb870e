use rand::Rng;
use tracing::debug;

use super::rules::step_unchecked;
use super::{Dimensions, Grid, LifeError, SeedMode, seeder};

/// Double-buffered Game of Life engine.
///
/// Both buffers are allocated once and share one `Dimensions`. Each step reads
/// the front buffer, writes the back buffer, then exchanges their roles, so
/// the previous generation becomes scratch space for the next step.
pub struct LifeEngine {
    buffers: [Grid; 2],
    front: usize,
}

impl LifeEngine {
    /// Take ownership of an initial generation and allocate its scratch twin.
    pub fn new(initial: Grid) -> Result<Self, LifeError> {
        let scratch = Grid::new(initial.dimensions())?;
        debug!(dims = %initial.dimensions(), "engine buffers allocated");
        Ok(Self {
            buffers: [initial, scratch],
            front: 0,
        })
    }

    /// Allocate a grid of `dims` and populate it according to `mode`.
    pub fn seeded<R: Rng>(dims: Dimensions, mode: &SeedMode, rng: &mut R) -> Result<Self, LifeError> {
        let mut initial = Grid::new(dims)?;
        seeder::seed(&mut initial, mode, rng)?;
        Self::new(initial)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.current().dimensions()
    }

    /// The authoritative generation
    pub fn current(&self) -> &Grid {
        &self.buffers[self.front]
    }

    pub fn population(&self) -> usize {
        self.current().population()
    }

    /// Advance exactly one generation.
    pub fn step(&mut self) {
        let [a, b] = &mut self.buffers;
        let (current, next) = if self.front == 0 { (&*a, b) } else { (&*b, a) };
        step_unchecked(current, next);
        self.front ^= 1;
    }

    /// Re-populate the current generation in place.
    pub fn reseed<R: Rng>(&mut self, mode: &SeedMode, rng: &mut R) -> Result<(), LifeError> {
        seeder::seed(&mut self.buffers[self.front], mode, rng)
    }
}
