//! Frame module: per-frame state machine and timing.

mod frame_driver;
mod frame_timer;

pub use frame_driver::{FrameDriver, FrameOutcome, FramePhase, FrameStats};
pub use frame_timer::{FrameTime, FrameTimer, MAX_FRAME_DELTA};
