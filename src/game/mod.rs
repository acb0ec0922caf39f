//! Core game logic: state record, tap resolution, and the bar oscillator.

pub mod logic;
pub mod oscillator;
pub mod types;

#[allow(unused_imports)]
pub use logic::{process_input, resolve_tap, GameInput, InputOutcome, TapOutcome};
pub use oscillator::BarOscillator;
pub use types::GameState;
