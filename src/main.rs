mod build_info;
mod constants;
mod game;
mod ui;

use constants::FRAME_INTERVAL_MS;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use game::{process_input, BarOscillator, GameInput, GameState, InputOutcome};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "derrubar {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Derrubar - Terminal Drop-Timing Minigame\n");
                println!("Usage: derrubar [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'derrubar --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game(&mut terminal);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

/// Run the frame loop until the player quits.
fn run_game(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut state = GameState::new();
    let mut bar = BarOscillator::new();
    let mut rng = rand::thread_rng();
    let mut last_frame = Instant::now();

    loop {
        // Advance the bar by real elapsed time at the current period.
        let dt_ms = last_frame.elapsed().as_secs_f64() * 1000.0;
        last_frame = Instant::now();
        bar.advance(dt_ms, state.bar_period_ms);

        // Draw UI
        terminal.draw(|frame| {
            ui::draw_ui(frame, &state, &bar);
        })?;

        // Poll for input (non-blocking, frame-paced)
        if event::poll(Duration::from_millis(FRAME_INTERVAL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Release {
                    continue;
                }
                let input = match key_event.code {
                    KeyCode::Char(' ') | KeyCode::Enter => GameInput::Drop,
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameInput::Quit,
                    _ => GameInput::Other,
                };

                match process_input(&mut state, input, bar.position(), &mut rng) {
                    InputOutcome::Quit => break,
                    InputOutcome::Tap(_) | InputOutcome::Ignored => {}
                }
            }
        }
    }

    Ok(())
}
