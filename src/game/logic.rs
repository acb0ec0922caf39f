//! Tap resolution for the drop minigame.
//!
//! Decides whether a drop attempt lands inside the target window and, on a
//! hit, advances the difficulty ramp: shrink the window, speed up the bar,
//! and re-roll the window position.

use super::types::GameState;
use crate::constants::{BAR_PERIOD_STEP_MS, MIN_BAR_PERIOD_MS, MIN_WINDOW_WIDTH, WINDOW_SHRINK_STEP};
use rand::Rng;

/// Input actions for the game (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Attempt a drop (Space or Enter).
    Drop,
    /// Leave the game (q or Esc).
    Quit,
    /// Any other key.
    Other,
}

/// Result of a single drop attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The bar was inside the target window; difficulty advanced.
    Hit,
    /// The bar was outside the window; state untouched.
    Miss,
}

/// What the main loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Tap(TapOutcome),
    Quit,
    Ignored,
}

/// Process a key input against the live bar position.
pub fn process_input<R: Rng>(
    state: &mut GameState,
    input: GameInput,
    bar_position: f64,
    rng: &mut R,
) -> InputOutcome {
    match input {
        GameInput::Drop => InputOutcome::Tap(resolve_tap(state, bar_position, rng)),
        GameInput::Quit => InputOutcome::Quit,
        GameInput::Other => InputOutcome::Ignored,
    }
}

/// Resolve a drop attempt at the given bar position.
///
/// A miss leaves the state untouched. A hit, in order: shrinks the window
/// width (floored at `MIN_WINDOW_WIDTH`), increments the score, shortens the
/// bar period (floored at `MIN_BAR_PERIOD_MS`), then places the window at a
/// uniformly random start using the just-updated width.
pub fn resolve_tap<R: Rng>(state: &mut GameState, bar_position: f64, rng: &mut R) -> TapOutcome {
    if !state.in_window(bar_position) {
        return TapOutcome::Miss;
    }

    if state.window_width > MIN_WINDOW_WIDTH {
        state.window_width = (state.window_width - WINDOW_SHRINK_STEP).max(MIN_WINDOW_WIDTH);
    }
    state.score += 1;
    state.bar_period_ms = state
        .bar_period_ms
        .saturating_sub(BAR_PERIOD_STEP_MS)
        .max(MIN_BAR_PERIOD_MS);

    // New window placement. The span is empty only if the width covers the
    // whole bar, in which case the start degenerates to 0.0.
    let span = 1.0 - state.window_width;
    state.window_start = if span > 0.0 {
        rng.gen_range(0.0..span)
    } else {
        0.0
    };
    state.window_end = state.window_start + state.window_width;

    TapOutcome::Hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_hit_inside_window() {
        let mut state = GameState::new();
        let outcome = resolve_tap(&mut state, 0.75, &mut rng());
        assert_eq!(outcome, TapOutcome::Hit);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_hit_advances_difficulty() {
        let mut state = GameState::new();
        resolve_tap(&mut state, 0.75, &mut rng());
        assert!((state.window_width - 0.34).abs() < 1e-9);
        assert_eq!(state.bar_period_ms, 1970);
    }

    #[test]
    fn test_hit_rerolls_window() {
        let mut state = GameState::new();
        resolve_tap(&mut state, 0.75, &mut rng());
        assert!(state.window_start >= 0.0);
        assert!(state.window_start < 1.0 - state.window_width);
        assert!((state.window_end - state.window_start - state.window_width).abs() < 1e-9);
    }

    #[test]
    fn test_miss_is_a_no_op() {
        let mut state = GameState::new();
        let before = state.clone();
        let outcome = resolve_tap(&mut state, 0.50, &mut rng());
        assert_eq!(outcome, TapOutcome::Miss);
        assert_eq!(state, before);
    }

    #[test]
    fn test_boundary_positions_are_hits() {
        let mut state = GameState::new();
        let pos = state.window_start;
        assert_eq!(resolve_tap(&mut state, pos, &mut rng()), TapOutcome::Hit);

        let mut state = GameState::new();
        let pos = state.window_end;
        assert_eq!(resolve_tap(&mut state, pos, &mut rng()), TapOutcome::Hit);
    }

    #[test]
    fn test_width_floor() {
        let mut state = GameState::new();
        let mut r = rng();
        // Enough hits to bottom out the width (0.35 -> 0.10 in 0.01 steps).
        for _ in 0..40 {
            let pos = state.window_start;
            resolve_tap(&mut state, pos, &mut r);
        }
        assert!((state.window_width - MIN_WINDOW_WIDTH).abs() < 1e-9);

        // One more hit keeps the width at the floor but still scores.
        let score_before = state.score;
        let period_before = state.bar_period_ms;
        let pos = state.window_start;
        resolve_tap(&mut state, pos, &mut r);
        assert!((state.window_width - MIN_WINDOW_WIDTH).abs() < 1e-9);
        assert_eq!(state.score, score_before + 1);
        assert!(state.bar_period_ms <= period_before);
    }

    #[test]
    fn test_period_floor() {
        let mut state = GameState::new();
        let mut r = rng();
        // (2000 - 200) / 30 = 60 hits reach the floor.
        for _ in 0..100 {
            let pos = state.window_start;
            resolve_tap(&mut state, pos, &mut r);
        }
        assert_eq!(state.bar_period_ms, MIN_BAR_PERIOD_MS);
    }

    #[test]
    fn test_process_input_drop_taps() {
        let mut state = GameState::new();
        let outcome = process_input(&mut state, GameInput::Drop, 0.75, &mut rng());
        assert_eq!(outcome, InputOutcome::Tap(TapOutcome::Hit));
    }

    #[test]
    fn test_process_input_quit_and_other() {
        let mut state = GameState::new();
        let before = state.clone();
        assert_eq!(
            process_input(&mut state, GameInput::Quit, 0.75, &mut rng()),
            InputOutcome::Quit
        );
        assert_eq!(
            process_input(&mut state, GameInput::Other, 0.75, &mut rng()),
            InputOutcome::Ignored
        );
        assert_eq!(state, before);
    }
}
