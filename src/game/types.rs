//! Game state for the drop minigame.
//!
//! A single record of numeric fields; all transitions happen in
//! `logic::resolve_tap`. There are no discrete modes.

use crate::constants::{
    INITIAL_BAR_PERIOD_MS, INITIAL_WINDOW_END, INITIAL_WINDOW_START, INITIAL_WINDOW_WIDTH,
};

/// Main game state.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Objects successfully dropped.
    pub score: u32,
    /// Lower bound of the target window, in the bar's 0.0-1.0 range.
    pub window_start: f64,
    /// Upper bound of the target window. Always `window_start + window_width`.
    pub window_end: f64,
    /// Width of the target window. Shrinks per hit, floored at 0.10.
    pub window_width: f64,
    /// Half-cycle duration of the oscillating bar in milliseconds.
    /// Shortens per hit, floored at `MIN_BAR_PERIOD_MS`.
    pub bar_period_ms: u32,
}

impl GameState {
    /// Create a fresh game with the starting window and bar speed.
    pub fn new() -> Self {
        Self {
            score: 0,
            window_start: INITIAL_WINDOW_START,
            window_end: INITIAL_WINDOW_END,
            window_width: INITIAL_WINDOW_WIDTH,
            bar_period_ms: INITIAL_BAR_PERIOD_MS,
        }
    }

    /// Whether a bar position lands inside the target window (inclusive bounds).
    pub fn in_window(&self, position: f64) -> bool {
        position >= self.window_start && position <= self.window_end
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let state = GameState::new();
        assert_eq!(state.score, 0);
        assert!((state.window_start - 0.60).abs() < f64::EPSILON);
        assert!((state.window_end - 0.90).abs() < f64::EPSILON);
        assert!((state.window_width - 0.35).abs() < f64::EPSILON);
        assert_eq!(state.bar_period_ms, 2000);
    }

    #[test]
    fn test_new_game_window_is_consistent() {
        let state = GameState::new();
        assert!((state.window_end - state.window_start - state.window_width).abs() < 1e-9);
    }

    #[test]
    fn test_in_window_inclusive_bounds() {
        let state = GameState::new();
        assert!(state.in_window(0.60));
        assert!(state.in_window(0.90));
        assert!(state.in_window(0.75));
        assert!(!state.in_window(0.59));
        assert!(!state.in_window(0.91));
    }
}
