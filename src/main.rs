//! flixtui - Netflix-styled terminal browser for TV shows
//!
//! # Usage
//!
//! ```bash
//! flixtui
//! flixtui --debounce-ms 150 --verbose
//! RUST_LOG=flixtui=trace flixtui --log-file /tmp/flixtui.log
//! ```

use std::fs::{File, OpenOptions};
use std::io::{stdout, Stdout};
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};

use flixtui::api::TvMazeClient;
use flixtui::app::App;
use flixtui::cli::Cli;
use flixtui::config::Config;
use flixtui::fetch::{CatalogEvent, Fetcher};
use flixtui::ui;

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config();

    if let Some(path) = config.log_file() {
        if let Err(e) = init_logging(&path, cli.log_directive()) {
            eprintln!("flixtui: logging disabled, cannot write {}: {}", path.display(), e);
        }
    }
    info!(api_url = config.api_url(), "starting flixtui");

    run_tui(&config).await
}

/// Log to a file, since stdout belongs to the TUI
fn init_logging(path: &Path, directive: &str) -> std::io::Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let file = open_log_file(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(filter)
        .init();
    Ok(())
}

/// Open `path` for appending, creating missing parent directories
fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(config: &Config) -> Result<()> {
    let client = TvMazeClient::with_options(
        config.api_url(),
        config.feed_query(),
        config.request_timeout(),
    );
    let (fetcher, events) = Fetcher::new(client);

    let mut terminal = init_terminal()?;
    let mut app = App::with_debounce(Instant::now(), config.suggest_debounce());

    let result = run_event_loop(&mut terminal, &mut app, &fetcher, events).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        warn!(error = %e, "event loop ended with error");
    }
    result
}

/// Main event loop - handles input, advances timers, applies fetch results
async fn run_event_loop(
    terminal: &mut Tui,
    app: &mut App,
    fetcher: &Fetcher<TvMazeClient>,
    mut events: UnboundedReceiver<CatalogEvent>,
) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    while app.running {
        // Render current state
        terminal.draw(|frame| ui::render_ui(frame, app))?;

        // Poll for events with timeout so timers keep moving
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    app.handle_key_at(key, Instant::now());
                }
            }
        }

        app.tick(Instant::now());

        // Apply every fetch that finished since the last pass
        while let Ok(event) = events.try_recv() {
            app.apply(event);
        }

        fetcher.dispatch_all(app.drain_requests());
    }

    info!("shutting down");
    Ok(())
}
