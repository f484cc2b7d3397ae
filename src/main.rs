//! BLOCKFALL - a terminal falling-block puzzle game

mod board;
mod game;
mod input;
mod piece;
mod rng;
mod score;
mod settings;
mod tetromino;
mod ui;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use game::{Action, Game, GameState};
use input::InputMap;
use ratatui::{backend::CrosstermBackend, Terminal};
use settings::Settings;
use std::{
    io::{self, stdout},
    time::{Duration, Instant},
};

/// Poll timeout; ticks faster than the gravity gate are no-ops
const TICK: Duration = Duration::from_millis(50);

/// Scoped raw-mode/alternate-screen acquisition. Dropping the guard restores
/// the terminal on every exit path, including panics.
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn main() -> io::Result<()> {
    // Session id keeps log files from concurrent games apart
    let session_id: u32 = rand::random();
    let log_dir = std::env::temp_dir().join("blockfall");
    let _ = std::fs::create_dir_all(&log_dir);

    // Log to a file, never to the terminal the game draws on
    let file_appender =
        tracing_appender::rolling::never(&log_dir, format!("{:08x}.log", session_id));
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("blockfall=debug".parse().unwrap()),
        )
        .with_ansi(false)
        .init();

    tracing::info!("blockfall starting up, session={:08x}", session_id);

    let settings = Settings::load();
    let input = InputMap::from_settings(&settings);

    let guard = TerminalGuard::acquire()?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run(&mut terminal, &settings, &input);

    // Restore the terminal before printing the farewell
    drop(guard);

    let game = result?;
    println!("Thanks for playing BLOCKFALL!");
    println!("Final Score: {}", game.score.points);
    println!("Level: {} | Lines: {}", game.score.level, game.score.lines);

    Ok(())
}

/// Event loop: one cooperative poll multiplexes key input and the gravity
/// timer, so every engine mutation happens on this thread in order.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    settings: &Settings,
    input: &InputMap,
) -> io::Result<Game> {
    let mut game = Game::new();
    let mut last_drop = Instant::now();

    loop {
        terminal.draw(|frame| ui::render_game(frame, &game, settings))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match input.action(key) {
                    Some(Action::Quit) => return Ok(game),
                    Some(action @ (Action::SoftDrop | Action::HardDrop)) => {
                        game.process_action(action);
                        last_drop = Instant::now();
                    }
                    Some(action) => game.process_action(action),
                    None => {}
                }
            }
        }

        match game.state {
            GameState::Playing => {
                if last_drop.elapsed() >= game.score.gravity_interval() {
                    game.soft_drop();
                    last_drop = Instant::now();
                }
            }
            // Re-arm the gate so resuming never pays an instant drop
            GameState::Paused => last_drop = Instant::now(),
            GameState::GameOver => {}
        }
    }
}
