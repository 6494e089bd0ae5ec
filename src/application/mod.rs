mod cadence;
mod control;
mod simulation;
mod trace;

pub use cadence::Cadence;
pub use control::Control;
pub use simulation::{FrameSink, Simulation, Snapshot, seed_grid};
pub use trace::TraceBuffer;
