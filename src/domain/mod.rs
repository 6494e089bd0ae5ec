mod cell;
mod error;
mod grid;
mod patterns;
pub mod engine;

pub use cell::{Cell, OFF, ON};
pub use error::EngineError;
pub use grid::{Grid, MIN_SIZE};
pub use patterns::{Pattern, PatternKind, presets};
