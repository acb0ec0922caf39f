//! The oscillating bar position.
//!
//! A triangle wave over [0.0, 1.0]: the position sweeps to one bound over one
//! period, reverses, and sweeps back. The main loop advances it with real
//! elapsed time each frame, passing in the game's current period so a speed-up
//! takes effect immediately without a phase jump. Game logic only ever reads
//! the position.

/// Normalized bar position driven by wall-clock time.
#[derive(Debug, Clone)]
pub struct BarOscillator {
    position: f64,
    rising: bool,
}

impl BarOscillator {
    /// Start at the lower bound, sweeping upward.
    pub fn new() -> Self {
        Self {
            position: 0.0,
            rising: true,
        }
    }

    /// Current position in [0.0, 1.0].
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Whether the bar is currently sweeping toward 1.0.
    pub fn rising(&self) -> bool {
        self.rising
    }

    /// Advance by `dt_ms` of wall-clock time at the given half-cycle period.
    /// Reflects at both bounds, handling overshoot across multiple bounces.
    pub fn advance(&mut self, dt_ms: f64, period_ms: u32) {
        if dt_ms <= 0.0 || period_ms == 0 {
            return;
        }
        let mut delta = dt_ms / period_ms as f64;

        while delta > 0.0 {
            if self.rising {
                let headroom = 1.0 - self.position;
                if delta < headroom {
                    self.position += delta;
                    break;
                }
                delta -= headroom;
                self.position = 1.0;
                self.rising = false;
            } else if delta < self.position {
                self.position -= delta;
                break;
            } else {
                delta -= self.position;
                self.position = 0.0;
                self.rising = true;
            }
        }
    }
}

impl Default for BarOscillator {
    fn default() -> Self {
        Self::new()
    }
}
