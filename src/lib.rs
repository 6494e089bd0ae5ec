// Domain layer - grid engine and seed patterns
pub mod domain;

// Application layer - simulation shell, trace window, cadence
pub mod application;

// Command-line configuration
pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, EngineError, Grid, Pattern, PatternKind, engine, presets};
pub use application::{Cadence, Control, FrameSink, Simulation, Snapshot, TraceBuffer};
pub use config::{Args, Seed, SimulationConfig};
