//! Errors raised by the grid engine.

use thiserror::Error;

/// Failures of grid construction and pattern stamping.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Grid is too small to have an interior inside the dead border
    #[error("grid size {size} is too small (minimum {min})")]
    InvalidSize {
        /// Requested dimension
        size: usize,
        /// Smallest accepted dimension
        min: usize,
    },

    /// Fill probability outside `[0, 1]` or not finite
    #[error("alive probability {0} is not within [0, 1]")]
    InvalidProbability(f64),

    /// Pattern template would write outside the grid
    #[error("pattern {pattern} at ({row}, {col}) does not fit a {size}x{size} grid")]
    OutOfBounds {
        /// Name of the rejected pattern
        pattern: &'static str,
        /// Requested top-left row
        row: usize,
        /// Requested top-left column
        col: usize,
        /// Grid dimension
        size: usize,
    },

    /// Name did not match any known pattern
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
}
