use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs::File,
    io::{stdout, Stdout},
    sync::Mutex,
    time::Instant,
};
use tracing_subscriber::EnvFilter;

use blockfall::config::{Args, Config};
use blockfall::game::Game;
use blockfall::input::handle_input;
use blockfall::ui::{ui, CellFrame};

type Term = Terminal<CrosstermBackend<Stdout>>;

fn init_tracing(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("blockfall=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::from(Args::parse());
    init_tracing(&config)?;

    let mut game = match config.seed {
        Some(seed) => Game::with_seed(seed, config.edges),
        None => Game::from_entropy(config.edges),
    };
    tracing::info!(seed = ?config.seed, edges = ?config.edges, frame = ?config.frame_interval, "starting");

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    let result = run_in_terminal(&mut game, &config);

    // Cleanup, even if setup or the loop failed
    let restored = first_error([
        terminal::disable_raw_mode().context("failed to disable raw mode"),
        execute!(stdout(), LeaveAlternateScreen, cursor::Show)
            .context("failed to leave alternate screen"),
    ]);

    tracing::info!("stopped");
    first_error([result, restored])
}

/// The first failure among steps that have all already run.
fn first_error<const N: usize>(results: [Result<()>; N]) -> Result<()> {
    results.into_iter().fold(Ok(()), |acc, r| acc.and(r))
}

fn run_in_terminal(game: &mut Game, config: &Config) -> Result<()> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    run(&mut terminal, game, config)
}

fn run(terminal: &mut Term, game: &mut Game, config: &Config) -> Result<()> {
    let mut cells = CellFrame::new();
    let mut next_frame = Instant::now() + config.frame_interval;

    game.draw(&mut cells);
    terminal.draw(|f| ui(f, &cells))?;

    loop {
        let timeout = next_frame.saturating_duration_since(Instant::now());

        if event::poll(timeout)? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                if kind == KeyEventKind::Press && matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
                    return Ok(());
                }
                if handle_input(game, code, kind).is_some() {
                    game.draw(&mut cells);
                    terminal.draw(|f| ui(f, &cells))?;
                }
            }
        }

        // Frame: gravity tick, then render
        if Instant::now() >= next_frame {
            game.update();
            game.draw(&mut cells);
            terminal.draw(|f| ui(f, &cells))?;
            next_frame = Instant::now() + config.frame_interval;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_error_keeps_the_earliest_failure() {
        let result = first_error([
            Ok(()),
            Err(anyhow::anyhow!("raw mode")),
            Err(anyhow::anyhow!("alternate screen")),
        ]);
        assert_eq!(result.unwrap_err().to_string(), "raw mode");
        assert!(first_error([Ok(()), Ok(())]).is_ok());
    }
}
