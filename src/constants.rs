// Target window tuning
pub const INITIAL_WINDOW_START: f64 = 0.60;
pub const INITIAL_WINDOW_END: f64 = 0.90;
pub const INITIAL_WINDOW_WIDTH: f64 = 0.35;
pub const MIN_WINDOW_WIDTH: f64 = 0.10;
pub const WINDOW_SHRINK_STEP: f64 = 0.01;

// Bar speed tuning. The period is one half-cycle (0.0 -> 1.0) in ms.
pub const INITIAL_BAR_PERIOD_MS: u32 = 2000;
pub const BAR_PERIOD_STEP_MS: u32 = 30;
pub const MIN_BAR_PERIOD_MS: u32 = 200;

// Frame pacing for the render/input loop
pub const FRAME_INTERVAL_MS: u64 = 16;
