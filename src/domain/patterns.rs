use std::fmt;
use std::str::FromStr;

use super::{Cell, EngineError, Grid};

/// A fixed-size template that can be stamped onto the grid.
///
/// Stamping overwrites the whole `height`×`width` rectangle, so the dead
/// cells of the template clear whatever was underneath.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub height: usize,
    pub width: usize,
    pub cells: &'static [(usize, usize)], // (row, col) of alive cells
}

impl Pattern {
    /// Whether the template fits a `size`×`size` grid at (row, col)
    pub fn fits(&self, size: usize, row: usize, col: usize) -> bool {
        let within = |start: usize, extent: usize| start.checked_add(extent).is_some_and(|end| end <= size);
        within(row, self.height) && within(col, self.width)
    }

    /// Place pattern on grid with its top-left corner at (row, col).
    ///
    /// All-or-nothing: a template that would cross the grid edge is rejected
    /// before any cell is written.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) -> Result<(), EngineError> {
        if !self.fits(grid.size(), row, col) {
            return Err(EngineError::OutOfBounds {
                pattern: self.name,
                row,
                col,
                size: grid.size(),
            });
        }

        for dr in 0..self.height {
            for dc in 0..self.width {
                grid.set(row + dr, col + dc, Cell::Dead);
            }
        }
        for &(dr, dc) in self.cells {
            grid.set(row + dr, col + dc, Cell::Alive);
        }
        Ok(())
    }
}

/// The seed patterns selectable by name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Glider,
    Pulsar,
    GosperGun,
}

impl PatternKind {
    pub const fn all() -> [PatternKind; 3] {
        [PatternKind::Glider, PatternKind::Pulsar, PatternKind::GosperGun]
    }

    pub const fn pattern(self) -> Pattern {
        match self {
            PatternKind::Glider => presets::glider(),
            PatternKind::Pulsar => presets::pulsar(),
            PatternKind::GosperGun => presets::gosper_gun(),
        }
    }

    /// Where the pattern is stamped when chosen as the startup seed
    pub const fn default_anchor(self) -> (usize, usize) {
        match self {
            PatternKind::Glider | PatternKind::GosperGun => (1, 1),
            PatternKind::Pulsar => (30, 30),
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern().name)
    }
}

impl FromStr for PatternKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "glider" => Ok(PatternKind::Glider),
            "pulsar" => Ok(PatternKind::Pulsar),
            "gosperGun" | "gosper" | "gosper-gun" | "gosper_gun" => Ok(PatternKind::GosperGun),
            other => Err(EngineError::UnknownPattern(other.to_owned())),
        }
    }
}

/// Classic Game of Life seed patterns
pub mod presets {
    use super::Pattern;

    /// Glider - simplest spaceship, moves one cell down-right every 4 generations
    pub const fn glider() -> Pattern {
        Pattern {
            name: "glider",
            height: 3,
            width: 3,
            cells: &[
                (0, 2),
                (1, 0), (1, 2),
                (2, 1), (2, 2),
            ],
        }
    }

    /// Pulsar - period 3 oscillator, one dead cell of margin on every side
    pub const fn pulsar() -> Pattern {
        Pattern {
            name: "pulsar",
            height: 15,
            width: 15,
            cells: &[
                // Outer arms
                (1, 3), (1, 4), (1, 5), (1, 9), (1, 10), (1, 11),
                (3, 1), (4, 1), (5, 1), (9, 1), (10, 1), (11, 1),
                (3, 13), (4, 13), (5, 13), (9, 13), (10, 13), (11, 13),
                (13, 3), (13, 4), (13, 5), (13, 9), (13, 10), (13, 11),
                // Inner arms
                (3, 6), (4, 6), (5, 6), (3, 8), (4, 8), (5, 8),
                (9, 6), (10, 6), (11, 6), (9, 8), (10, 8), (11, 8),
                (6, 3), (6, 4), (6, 5), (6, 9), (6, 10), (6, 11),
                (8, 3), (8, 4), (8, 5), (8, 9), (8, 10), (8, 11),
            ],
        }
    }

    /// Gosper Glider Gun - emits a glider every 30 generations
    pub const fn gosper_gun() -> Pattern {
        Pattern {
            name: "gosperGun",
            height: 11,
            width: 38,
            cells: &[
                // Left block
                (5, 1), (5, 2),
                (6, 1), (6, 2),

                // Left body
                (3, 13), (3, 14),
                (4, 12), (4, 16),
                (5, 11), (5, 17),
                (6, 11), (6, 15), (6, 17), (6, 18),
                (7, 11), (7, 17),
                (8, 12), (8, 16),
                (9, 13), (9, 14),

                // Right body
                (1, 25),
                (2, 23), (2, 25),
                (3, 21), (3, 22),
                (4, 21), (4, 22),
                (5, 21), (5, 22),
                (6, 23), (6, 25),
                (7, 25),

                // Right block
                (3, 35), (3, 36),
                (4, 35), (4, 36),
            ],
        }
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![glider(), pulsar(), gosper_gun()]
    }
}
