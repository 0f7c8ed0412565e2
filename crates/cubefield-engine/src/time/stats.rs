use std::time::{Duration, Instant};

use super::FrameTime;

/// Average frame rate over one reporting interval.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameReport {
    pub frames: u32,
    pub elapsed: Duration,
}

impl FrameReport {
    pub fn fps(&self) -> f32 {
        let secs = self.elapsed.as_secs_f32();
        if secs > 0.0 { self.frames as f32 / secs } else { 0.0 }
    }
}

/// Accumulates frame ticks and yields a `FrameReport` once per interval.
#[derive(Debug, Clone)]
pub struct FrameStats {
    interval: Duration,
    window_start: Option<Instant>,
    frames: u32,
}

impl FrameStats {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            window_start: None,
            frames: 0,
        }
    }

    /// Records one frame. Returns a report when the interval has elapsed.
    pub fn record(&mut self, time: &FrameTime) -> Option<FrameReport> {
        let start = *self.window_start.get_or_insert(time.now);
        self.frames += 1;

        let elapsed = time.now.saturating_duration_since(start);
        if elapsed < self.interval {
            return None;
        }

        let report = FrameReport {
            frames: self.frames,
            elapsed,
        };
        self.window_start = Some(time.now);
        self.frames = 0;
        Some(report)
    }

    /// Drops the current window; the next frame starts a fresh one.
    pub fn reset(&mut self) {
        self.window_start = None;
        self.frames = 0;
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}
