//! Textual state dump: each generation as rows of space-separated `0`/`1`
//! tokens, followed by a blank line.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::application::Simulation;
use crate::domain::Grid;

/// Write one generation in dump format.
pub fn write_generation<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    write!(out, "{grid}")?;
    writeln!(out)
}

/// Appends generations to a writer, usually a file.
pub struct StateDump<W: Write> {
    out: W,
    generations: u64,
    /// Simulation revision last written
    recorded: Option<u64>,
}

impl StateDump<BufWriter<File>> {
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> StateDump<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            generations: 0,
            recorded: None,
        }
    }

    pub fn record(&mut self, grid: &Grid) -> io::Result<()> {
        write_generation(&mut self.out, grid)?;
        self.generations += 1;
        Ok(())
    }

    /// Record the simulation's current generation if it changed since the
    /// last sync. Returns whether a block was written.
    pub fn sync(&mut self, state: &Simulation) -> io::Result<bool> {
        if self.recorded == Some(state.revision) {
            return Ok(false);
        }
        self.record(state.engine.current())?;
        self.recorded = Some(state.revision);
        Ok(true)
    }

    /// Number of generations written so far
    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Flush and hand back the writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
