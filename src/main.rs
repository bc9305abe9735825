use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use bookfind::api::{BookApiClient, spawn_worker};
use bookfind::app::{App, MouseCapture};
use bookfind::config;
use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event;

/// Search books with suggestions as you type
#[derive(Parser, Debug)]
#[command(name = "bookfind", version, about)]
struct Args {
    /// Base URL of the book API [default: http://localhost:3001]
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Milliseconds to wait after the last keystroke before searching
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Path to config file [default: <config dir>/bookfind/config.toml]
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    bookfind::logging::init();

    let config = config::load_config(args.config.as_deref())?
        .with_overrides(args.base_url, args.debounce_ms)
        .validated()?;
    log::debug!("Using API at {}", config.api.base_url);

    let client = BookApiClient::new(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_secs),
    )?;
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let worker = spawn_worker(client, request_rx, response_tx)?;
    let app = App::new(&config, request_tx, response_rx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = run(terminal, app);
    ratatui::restore();

    // The app owned every request sender, so the worker loop has ended
    if worker.join().is_err() {
        log::debug!("API worker panicked");
    }

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    let _mouse = MouseCapture::acquire(io::stdout())?;

    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            let event = event::read()?;
            app.handle_event(event, Instant::now());
        }
        app.tick(Instant::now());
    }

    app.deactivate();
    Ok(())
}
