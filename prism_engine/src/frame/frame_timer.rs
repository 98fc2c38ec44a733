/// Frame timing.

use std::time::{Duration, Instant};

/// Longest delta handed to a frame. Longer gaps (debugger pause, window
/// drag) are clamped so motion does not jump.
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// Time information for one frame, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Time since the previous frame
    pub delta: f32,
    /// Time since the first frame, sum of all deltas
    pub total: f32,
}

impl FrameTime {
    pub fn new(delta: f32, total: f32) -> Self {
        Self { delta, total }
    }
}

/// Wall-clock timer producing one `FrameTime` per tick.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    last: Instant,
    total: f32,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            total: 0.0,
        }
    }

    /// Measure the time since the previous tick.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        self.advance(elapsed)
    }

    /// Advance by an explicit duration, clamped to `MAX_FRAME_DELTA`.
    pub fn advance(&mut self, elapsed: Duration) -> FrameTime {
        let delta = elapsed.as_secs_f32().min(MAX_FRAME_DELTA);
        self.total += delta;
        FrameTime::new(delta, self.total)
    }

    pub fn total(&self) -> f32 {
        self.total
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
