//! Frame clock turning host timestamps into per-tick deltas
//!
//! Frame-driven hosts hand out absolute timestamps (ms). The first tick has
//! no predecessor, so it yields a zero delta instead of the raw timestamp;
//! later deltas are clamped to `[0, max_delta]` so a stalled frame cannot
//! fast-forward the glow pulses.

use tracing::warn;

#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<f64>, // timestamp of the previous tick
    max_delta: f64,
}

impl FrameClock {
    pub fn new(max_delta: f64) -> Self {
        Self {
            last: None,
            max_delta: max_delta.max(0.0),
        }
    }

    /// Record `timestamp` and return the delta since the previous tick
    pub fn tick(&mut self, timestamp: f64) -> f64 {
        let delta = match self.last {
            None => 0.0,
            Some(prev) => timestamp - prev,
        };
        self.last = Some(timestamp);

        if delta < 0.0 || !delta.is_finite() {
            return 0.0;
        }
        if delta > self.max_delta {
            warn!(delta, max = self.max_delta, "frame delta clamped");
            return self.max_delta;
        }
        delta
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
