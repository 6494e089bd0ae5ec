use std::collections::VecDeque;

/// Fixed-capacity FIFO window over an external sample sequence.
///
/// Always holds exactly `capacity` samples: construction and rebuilds pad
/// with zeros, and each push evicts the oldest sample.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceBuffer {
    capacity: usize,
    samples: VecDeque<f64>,
}

impl TraceBuffer {
    /// Zero-filled buffer, the same window a rebuild at frame 0 produces
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            samples: std::iter::repeat_n(0.0, capacity).collect(),
        }
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Append a sample, evicting the oldest when full
    pub fn push(&mut self, value: f64) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    /// Replace contents with `source[end - capacity .. end]`.
    ///
    /// Indices before 0 or past the end of `source` read as 0.
    pub fn rebuild(&mut self, source: &[f64], end: usize) {
        let start = end as isize - self.capacity as isize;
        self.samples.clear();
        self.samples.extend((start..end as isize).map(|idx| {
            usize::try_from(idx)
                .ok()
                .and_then(|idx| source.get(idx).copied())
                .unwrap_or(0.0)
        }));
    }

    /// Samples from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.samples.iter().copied().collect()
    }

    /// (min, max) of the window, `None` when empty
    pub fn range(&self) -> Option<(f64, f64)> {
        self.iter().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(len: usize) -> Vec<f64> {
        (0..len).map(|i| i as f64).collect()
    }

    #[test]
    fn test_new_is_zero_filled() {
        let trace = TraceBuffer::new(4);
        assert_eq!(trace.to_vec(), vec![0.0; 4]);
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut trace = TraceBuffer::new(3);
        for v in [1.0, 2.0, 3.0, 4.0] {
            trace.push(v);
        }
        assert_eq!(trace.to_vec(), vec![2.0, 3.0, 4.0]);
        assert_eq!(trace.len(), 3);
    }

    #[test]
    fn test_zero_capacity_drops_everything() {
        let mut trace = TraceBuffer::new(0);
        trace.push(1.0);
        trace.rebuild(&ramp(10), 5);
        assert!(trace.is_empty());
        assert_eq!(trace.range(), None);
    }

    #[test]
    fn test_rebuild_full_window() {
        let source = ramp(60);
        let mut trace = TraceBuffer::new(10);
        trace.rebuild(&source, 50);
        assert_eq!(trace.to_vec(), source[40..50].to_vec());
    }

    #[test]
    fn test_rebuild_pads_left_with_zeros() {
        let source: Vec<f64> = (1..=20).map(f64::from).collect();
        let mut trace = TraceBuffer::new(5);
        trace.rebuild(&source, 2);
        assert_eq!(trace.to_vec(), vec![0.0, 0.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_rebuild_past_source_end_reads_zero() {
        let source = ramp(3);
        let mut trace = TraceBuffer::new(4);
        trace.rebuild(&source, 5);
        assert_eq!(trace.to_vec(), vec![1.0, 2.0, 0.0, 0.0]);
    }

    #[test]
    fn test_range() {
        let mut trace = TraceBuffer::new(3);
        trace.push(-2.0);
        trace.push(5.0);
        assert_eq!(trace.range(), Some((-2.0, 5.0)));
    }
}
