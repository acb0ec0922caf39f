mod cat_sprite;
pub mod game_common;
pub mod game_scene;

use crate::game::{BarOscillator, GameState};
use ratatui::Frame;

/// Draw the full UI for one frame.
pub fn draw_ui(frame: &mut Frame, state: &GameState, bar: &BarOscillator) {
    let area = frame.size();
    game_scene::render_game(frame, area, state, bar);
}
