use std::time::Duration;

/// Turns per-frame delta times into generation ticks at a fixed interval.
///
/// At most one tick is reported per frame and the accumulator restarts after
/// each tick, so a slow frame drops generations instead of bursting.
#[derive(Clone, Debug, PartialEq)]
pub struct Cadence {
    interval: f32,
    timer: f32,
}

impl Cadence {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.as_secs_f32(),
            timer: 0.0,
        }
    }

    /// Add one frame's elapsed seconds; true when a tick is due
    pub fn advance(&mut self, delta_time: f32) -> bool {
        self.timer += delta_time;
        if self.timer >= self.interval {
            self.timer = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.timer = 0.0;
    }
}
