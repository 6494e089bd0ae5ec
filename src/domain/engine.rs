//! Grid engine: the one-step transition and pattern seeding.
//!
//! Every function here is stateless. The grid belongs to the caller and is
//! only borrowed for the duration of a call.

use rand::Rng;

use super::{Cell, EngineError, Grid, PatternKind};

/// Fill probability used when none is configured
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.2;

/// All-dead grid, the canvas pattern seeds are stamped onto
pub fn empty(size: usize) -> Result<Grid, EngineError> {
    Grid::new(size)
}

/// Random grid using the thread-local generator
pub fn initialize(size: usize, alive_probability: f64) -> Result<Grid, EngineError> {
    initialize_with(size, alive_probability, &mut rand::rng())
}

/// Random grid: every interior cell is alive with `alive_probability`,
/// the border stays dead.
pub fn initialize_with<R: Rng + ?Sized>(
    size: usize,
    alive_probability: f64,
    rng: &mut R,
) -> Result<Grid, EngineError> {
    if !(0.0..=1.0).contains(&alive_probability) {
        return Err(EngineError::InvalidProbability(alive_probability));
    }

    let mut grid = Grid::new(size)?;
    for row in 1..size - 1 {
        for col in 1..size - 1 {
            grid.set(row, col, Cell::from(rng.random_bool(alive_probability)));
        }
    }
    Ok(grid)
}

/// Next generation as a new grid
pub fn step(grid: &Grid) -> Grid {
    grid.evolve()
}

/// Next generation written into a caller-owned scratch buffer
pub fn step_into(grid: &Grid, next: &mut Grid) {
    grid.evolve_into(next);
}

/// Stamp a named pattern with its top-left corner at (row, col).
///
/// On `OutOfBounds` the grid is left untouched.
pub fn stamp_pattern(
    grid: &mut Grid,
    kind: PatternKind,
    row: usize,
    col: usize,
) -> Result<(), EngineError> {
    kind.pattern().place_on(grid, row, col)
}
