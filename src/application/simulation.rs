use crate::config::{Seed, SimulationConfig};
use crate::domain::{EngineError, Grid, engine};

use super::{Control, TraceBuffer};

/// Borrowed view of the simulation handed to a display sink each frame
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub grid: &'a Grid,
    pub trace: &'a TraceBuffer,
    pub frame: usize,
    pub generations: u64,
    pub running: bool,
}

/// Anything that can display a snapshot (a window, a test recorder, ...)
pub trait FrameSink {
    fn present(&mut self, snapshot: Snapshot<'_>);
}

/// Simulation orchestrates ticks, controls and the trace window.
///
/// It owns the grid exclusively; the engine borrows it only during a step.
/// All methods expect to be called from a single event loop.
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    scratch: Grid,
    source: Vec<f64>,
    trace: TraceBuffer,
    frame: usize,
    generations: u64,
    running: bool,
    alive_probability: f64,
}

impl Simulation {
    /// Start running at frame 0 with a zero-filled trace of `trace_len`
    pub fn new(grid: Grid, source: Vec<f64>, trace_len: usize) -> Self {
        Self {
            scratch: grid.clone(),
            grid,
            source,
            trace: TraceBuffer::new(trace_len),
            frame: 0,
            generations: 0,
            running: true,
            alive_probability: engine::DEFAULT_ALIVE_PROBABILITY,
        }
    }

    /// Fill probability used when `reset` rebuilds the grid
    pub fn with_alive_probability(mut self, alive_probability: f64) -> Self {
        self.alive_probability = alive_probability;
        self
    }

    /// Validate `config`, seed the grid and build the simulation
    pub fn from_config(config: &SimulationConfig, source: Vec<f64>) -> Result<Self, EngineError> {
        config.validate()?;
        let grid = seed_grid(config)?;
        Ok(Self::new(grid, source, config.trace_len).with_alive_probability(config.alive_probability))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn trace(&self) -> &TraceBuffer {
        &self.trace
    }

    pub const fn frame(&self) -> usize {
        self.frame
    }

    /// Generations computed since construction or the last reset
    pub const fn generations(&self) -> u64 {
        self.generations
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        if !self.running {
            tracing::debug!(frame = self.frame, "simulation started");
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            tracing::debug!(frame = self.frame, "simulation stopped");
        }
        self.running = false;
    }

    /// Jump to `frame` with a fresh random grid and resume running
    pub fn reset(&mut self, frame: usize) -> Result<(), EngineError> {
        let grid = engine::initialize(self.grid.size(), self.alive_probability)?;
        self.trace.rebuild(&self.source, frame);
        self.grid = grid;
        self.frame = frame;
        self.generations = 0;
        self.running = true;
        tracing::info!(frame, population = self.grid.population(), "simulation reset");
        Ok(())
    }

    /// Advance one generation if running; returns whether anything changed
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }

        let sample = self.source.get(self.frame).copied().unwrap_or(0.0);
        self.trace.push(sample);

        engine::step_into(&self.grid, &mut self.scratch);
        std::mem::swap(&mut self.grid, &mut self.scratch);

        self.frame += 1;
        self.generations += 1;
        tracing::trace!(frame = self.frame, population = self.grid.population(), "tick");
        true
    }

    pub fn apply(&mut self, control: Control) -> Result<(), EngineError> {
        match control {
            Control::Start => self.start(),
            Control::Stop => self.stop(),
            Control::Toggle if self.running => self.stop(),
            Control::Toggle => self.start(),
            Control::Reset => self.reset(0)?,
        }
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: &self.grid,
            trace: &self.trace,
            frame: self.frame,
            generations: self.generations,
            running: self.running,
        }
    }

    /// Push the current state to a display sink
    pub fn publish<S: FrameSink + ?Sized>(&self, sink: &mut S) {
        sink.present(self.snapshot());
    }
}

/// Build the startup grid for `config`.
///
/// A pattern that does not fit the grid falls back to a random field.
pub fn seed_grid(config: &SimulationConfig) -> Result<Grid, EngineError> {
    match config.seed {
        Seed::Random => engine::initialize(config.size, config.alive_probability),
        Seed::Pattern(kind) => {
            let mut grid = engine::empty(config.size)?;
            let (row, col) = kind.default_anchor();
            match engine::stamp_pattern(&mut grid, kind, row, col) {
                Ok(()) => {
                    tracing::info!(pattern = %kind, row, col, "seeded grid with pattern");
                    Ok(grid)
                }
                Err(err @ EngineError::OutOfBounds { .. }) => {
                    tracing::warn!(%err, "falling back to random initialization");
                    engine::initialize(config.size, config.alive_probability)
                }
                Err(err) => Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, PatternKind};

    fn ramp(len: usize) -> Vec<f64> {
        (0..len).map(|i| i as f64).collect()
    }

    fn block_grid() -> Grid {
        let mut grid = engine::empty(12).unwrap();
        for (row, col) in [(5, 5), (5, 6), (6, 5), (6, 6)] {
            grid.set(row, col, Cell::Alive);
        }
        grid
    }

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(usize, bool, usize)>,
    }

    impl FrameSink for Recorder {
        fn present(&mut self, snapshot: Snapshot<'_>) {
            self.frames.push((snapshot.frame, snapshot.running, snapshot.grid.population()));
        }
    }

    #[test]
    fn test_new_starts_running_at_frame_zero() {
        let sim = Simulation::new(block_grid(), ramp(10), 4);
        assert!(sim.is_running());
        assert_eq!(sim.frame(), 0);
        assert_eq!(sim.trace().to_vec(), vec![0.0; 4]);
    }

    #[test]
    fn test_tick_steps_grid_and_feeds_trace() {
        let mut grid = engine::empty(12).unwrap();
        for col in 4..7 {
            grid.set(5, col, Cell::Alive);
        }
        let mut sim = Simulation::new(grid.clone(), vec![7.0, 8.0, 9.0], 2);

        assert!(sim.tick());
        assert_eq!(sim.grid(), &engine::step(&grid));
        assert_eq!(sim.trace().to_vec(), vec![0.0, 7.0]);
        assert!(sim.tick());
        assert_eq!(sim.grid(), &grid);
        assert_eq!(sim.trace().to_vec(), vec![7.0, 8.0]);
        assert_eq!(sim.frame(), 2);
        assert_eq!(sim.generations(), 2);
    }

    #[test]
    fn test_tick_past_source_end_pushes_zero() {
        let mut sim = Simulation::new(block_grid(), vec![1.0], 2);
        sim.tick();
        sim.tick();
        assert_eq!(sim.trace().to_vec(), vec![1.0, 0.0]);
    }

    #[test]
    fn test_stopped_tick_is_noop() {
        let mut sim = Simulation::new(block_grid(), ramp(10), 3);
        sim.stop();
        let trace = sim.trace().clone();
        assert!(!sim.tick());
        assert_eq!(sim.frame(), 0);
        assert_eq!(sim.trace(), &trace);
    }

    #[test]
    fn test_stop_twice_then_start() {
        let mut grid = engine::empty(20).unwrap();
        engine::stamp_pattern(&mut grid, PatternKind::Glider, 3, 3).unwrap();
        let mut sim = Simulation::new(grid, ramp(100), 5);
        sim.tick();
        sim.tick();

        sim.stop();
        let at_stop = sim.grid().clone();
        sim.stop();
        assert!(!sim.tick());
        sim.start();

        assert!(sim.is_running());
        assert_eq!(sim.grid(), &at_stop);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut sim = Simulation::new(block_grid(), ramp(10), 3);
        sim.start();
        sim.start();
        assert!(sim.is_running());
        assert_eq!(sim.grid(), &block_grid());
    }

    #[test]
    fn test_reset_rebuilds_trace_window() {
        let source = ramp(60);
        let mut sim = Simulation::new(block_grid(), source.clone(), 10);
        sim.stop();

        sim.reset(50).unwrap();

        assert_eq!(sim.trace().to_vec(), source[40..50].to_vec());
        assert_eq!(sim.frame(), 50);
        assert_eq!(sim.generations(), 0);
        assert!(sim.is_running());
    }

    #[test]
    fn test_reset_zero_pads_early_frames() {
        let source: Vec<f64> = (1..=10).map(f64::from).collect();
        let mut sim = Simulation::new(block_grid(), source, 4);
        sim.reset(2).unwrap();
        assert_eq!(sim.trace().to_vec(), vec![0.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_reset_draws_fresh_random_grid() {
        let mut sim = Simulation::new(block_grid(), ramp(10), 3).with_alive_probability(1.0);
        sim.reset(0).unwrap();
        assert_eq!(sim.grid().size(), 12);
        assert_eq!(sim.grid().population(), 10 * 10);
        assert!(sim.grid().border_is_dead());
    }

    #[test]
    fn test_reset_propagates_bad_probability() {
        let mut sim = Simulation::new(block_grid(), ramp(10), 3).with_alive_probability(2.0);
        assert!(matches!(sim.reset(0), Err(EngineError::InvalidProbability(_))));
        assert_eq!(sim.grid(), &block_grid());
    }

    #[test]
    fn test_apply_controls() {
        let mut sim = Simulation::new(block_grid(), ramp(10), 3);
        sim.apply(Control::Toggle).unwrap();
        assert!(!sim.is_running());
        sim.apply(Control::Toggle).unwrap();
        assert!(sim.is_running());
        sim.apply(Control::Stop).unwrap();
        sim.apply(Control::Start).unwrap();
        assert!(sim.is_running());
        sim.tick();
        sim.apply(Control::Reset).unwrap();
        assert_eq!(sim.frame(), 0);
    }

    #[test]
    fn test_publish_pushes_snapshot() {
        let mut sim = Simulation::new(block_grid(), ramp(10), 3);
        let mut recorder = Recorder::default();
        sim.publish(&mut recorder);
        sim.tick();
        sim.stop();
        sim.publish(&mut recorder);
        assert_eq!(recorder.frames, vec![(0, true, 4), (1, false, 4)]);
    }

    #[test]
    fn test_seed_grid_stamps_pattern_on_empty_grid() {
        let config = SimulationConfig {
            size: 50,
            seed: Seed::Pattern(PatternKind::Pulsar),
            ..Default::default()
        };
        let grid = seed_grid(&config).unwrap();
        assert_eq!(grid.population(), 48);
        assert_eq!(grid.get(31, 33), Some(Cell::Alive));
    }

    #[test]
    fn test_seed_grid_falls_back_when_pattern_does_not_fit() {
        let config = SimulationConfig {
            size: 20,
            seed: Seed::Pattern(PatternKind::Pulsar),
            alive_probability: 1.0,
            ..Default::default()
        };
        let grid = seed_grid(&config).unwrap();
        assert_eq!(grid.population(), 18 * 18);
    }

    #[test]
    fn test_from_config_rejects_invalid_size() {
        let config = SimulationConfig { size: 2, ..Default::default() };
        assert!(matches!(
            Simulation::from_config(&config, Vec::new()),
            Err(EngineError::InvalidSize { .. })
        ));
    }
}
