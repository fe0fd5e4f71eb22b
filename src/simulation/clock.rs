//! Frame clock helper for drivers
//!
//! Turns raw frame timestamps into the clamped `dt` that `Simulation::tick`
//! expects. Large gaps (tab switches, breakpoints) collapse to `max_dt`.

use crate::core::types::Seconds;

#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt: Seconds,
}

impl FrameClock {
    pub fn new(max_dt: Seconds) -> Self {
        Self { last_ms: None, max_dt }
    }

    /// Feed a frame timestamp in milliseconds; the first frame yields 0
    pub fn frame(&mut self, timestamp_ms: f64) -> Seconds {
        let dt = match self.last_ms {
            Some(last) => ((timestamp_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        clamp_dt(dt, self.max_dt)
    }
}

/// Clamp into `[0, max_dt]`
pub fn clamp_dt(dt: Seconds, max_dt: Seconds) -> Seconds {
    dt.min(max_dt).max(0.0)
}
