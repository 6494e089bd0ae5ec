//! Command-line flags and the validated simulation configuration.
//!
//! ```bash
//! # Random 100x100 field
//! life_scope
//!
//! # Gosper gun on a 120x120 field, ticking every 50 ms
//! life_scope --size 120 --gosper --interval 50
//! ```

use std::time::Duration;

use clap::{ArgGroup, Parser};

use crate::domain::{EngineError, MIN_SIZE, PatternKind, engine::DEFAULT_ALIVE_PROBABILITY};

/// Grid dimension used when `--size` is absent or unusable
pub const DEFAULT_SIZE: usize = 100;
/// Smallest `--size` the command line accepts
pub const MIN_CLI_SIZE: usize = 11;
pub const DEFAULT_INTERVAL_MS: u64 = 100;
pub const DEFAULT_TRACE_LEN: usize = 100;

/// How the grid is populated at startup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Seed {
    #[default]
    Random,
    Pattern(PatternKind),
}

/// Everything the simulation needs to start
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub size: usize,
    pub seed: Seed,
    pub interval: Duration,
    /// Trace panel capacity; 0 disables the panel
    pub trace_len: usize,
    pub alive_probability: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: Seed::Random,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            trace_len: DEFAULT_TRACE_LEN,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.size < MIN_SIZE {
            return Err(EngineError::InvalidSize { size: self.size, min: MIN_SIZE });
        }
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(EngineError::InvalidProbability(self.alive_probability));
        }
        Ok(())
    }
}

/// Bordered Game of Life with a scrolling signal trace
#[derive(Parser, Debug)]
#[command(name = "life_scope")]
#[command(about = "Conway's Game of Life on a bordered grid with a scrolling trace")]
#[command(version)]
#[command(group(ArgGroup::new("seed_pattern").args(["glider", "gosper", "pulsar"])))]
pub struct Args {
    /// Grid dimension (at least 11; anything else falls back to 100)
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    pub size: Option<String>,

    /// Seed with a glider
    #[arg(long)]
    pub glider: bool,

    /// Seed with a Gosper glider gun
    #[arg(long)]
    pub gosper: bool,

    /// Seed with a pulsar
    #[arg(long)]
    pub pulsar: bool,

    /// Milliseconds between generations
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS)]
    pub interval: u64,

    /// Number of samples shown in the trace panel (0 hides it)
    #[arg(long, default_value_t = DEFAULT_TRACE_LEN)]
    pub trace_len: usize,

    /// Chance that a cell starts alive in a random field
    #[arg(long, default_value_t = DEFAULT_ALIVE_PROBABILITY)]
    pub alive_probability: f64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn seed(&self) -> Seed {
        if self.glider {
            Seed::Pattern(PatternKind::Glider)
        } else if self.gosper {
            Seed::Pattern(PatternKind::GosperGun)
        } else if self.pulsar {
            Seed::Pattern(PatternKind::Pulsar)
        } else {
            Seed::Random
        }
    }

    pub fn to_config(&self) -> SimulationConfig {
        SimulationConfig {
            size: resolve_size(self.size.as_deref()),
            seed: self.seed(),
            interval: Duration::from_millis(self.interval),
            trace_len: self.trace_len,
            alive_probability: self.alive_probability,
        }
    }
}

/// Parse `--size`, falling back to [`DEFAULT_SIZE`] on anything unusable
pub fn resolve_size(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_SIZE;
    };
    match raw.trim().parse::<usize>() {
        Ok(size) if size >= MIN_CLI_SIZE => size,
        Ok(size) => {
            tracing::warn!(size, min = MIN_CLI_SIZE, "grid size below minimum, using {DEFAULT_SIZE}");
            DEFAULT_SIZE
        }
        Err(err) => {
            tracing::warn!(value = raw, %err, "unparsable grid size, using {DEFAULT_SIZE}");
            DEFAULT_SIZE
        }
    }
}
