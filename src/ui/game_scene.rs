//! UI rendering for the drop game scene.

use crate::game::{BarOscillator, GameState};
use crate::ui::cat_sprite::SPRITE_CAT;
use crate::ui::game_common::{create_game_layout, render_status_bar, GameLayout};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Maximum bar width in columns.
const BAR_MAX_WIDTH: u16 = 60;

/// Render the game scene.
pub fn render_game(frame: &mut Frame, area: Rect, state: &GameState, bar: &BarOscillator) {
    let GameLayout {
        content,
        status_bar,
    } = create_game_layout(frame, area, " Derrubar ", Color::Cyan);

    let cat_height = SPRITE_CAT.height as u16;
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // instruction
            Constraint::Length(2), // score row
            Constraint::Length(cat_height + 1),
            Constraint::Length(2), // bar + target overlay
            Constraint::Min(0),
        ])
        .split(content);

    render_instruction(frame, v_chunks[0]);
    render_score(frame, v_chunks[1], state);
    render_cat(frame, v_chunks[2]);
    render_bar(frame, v_chunks[3], state, bar);
    render_status(frame, status_bar, state);
}

fn render_instruction(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new("Ajude o gato a derrubar os objetos no momento certo!")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    frame.render_widget(text, area);
}

/// Score label plus the red counter badge.
fn render_score(frame: &mut Frame, area: Rect, state: &GameState) {
    let line = Line::from(vec![
        Span::styled("Objetos derrubados: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(" {} ", state.score),
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_cat(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = SPRITE_CAT
        .art
        .lines()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Yellow))))
        .collect();
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// The oscillating bar with the target window highlighted over it.
fn render_bar(frame: &mut Frame, area: Rect, state: &GameState, bar: &BarOscillator) {
    let width = area.width.min(BAR_MAX_WIDTH) as usize;
    if width < 2 || area.height == 0 {
        return;
    }

    let position = bar.position();
    let mut spans = Vec::with_capacity(width);
    for col in 0..width {
        // Normalized position of this column's center.
        let x = (col as f64 + 0.5) / width as f64;
        let filled = x <= position;
        let in_target = x >= state.window_start && x <= state.window_end;

        let symbol = if filled { "█" } else { "░" };
        let mut style = Style::default().fg(if filled {
            Color::Cyan
        } else {
            Color::DarkGray
        });
        if in_target {
            // Target window reads as a red band behind the bar fill.
            style = style.bg(Color::Red);
        }
        spans.push(Span::styled(symbol, style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_status(frame: &mut Frame, area: Rect, state: &GameState) {
    render_status_bar(
        frame,
        area,
        &format!("Pontos: {}", state.score),
        Color::Green,
        &[("[Space]", "Derrubar"), ("[Q/Esc]", "Sair")],
    );
}
