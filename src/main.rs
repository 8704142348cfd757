//! TrendCast - terminal stock-prediction demo
//!
//! A fixture-backed walk through markets, BUY/SELL/HOLD signals with
//! confidence scores, alerts, and prediction history. All data is mocked;
//! see the About screen.

mod alerts;
mod api;
mod app;
mod chat;
mod components;
mod currency;
mod history;
mod keyboard;
mod market;
mod metrics;
mod navigation;
mod settings;
mod stocks;
mod theme;
mod tests;

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::settings::Settings;

const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    setup_logger();

    let settings = Settings::load();
    let mut app = App::new(&settings);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| components::render(frame, app))?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
        if last_tick.elapsed() >= TICK_RATE {
            app.tick(Instant::now());
            last_tick = Instant::now();
        }
        if app.should_quit {
            return Ok(());
        }
    }
}

/// Log to a file; the terminal owns stdout
fn setup_logger() {
    let Some(cache_dir) = dirs::cache_dir() else {
        return;
    };
    let dir = cache_dir.join("trendcast");
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("trendcast.log"))
    else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .compact()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .init();
}
