//! Compmap TUI — three-panel terminal explorer with vim-style navigation.
//!
//! Panels:
//! 1. Components — grid of main components, filterable
//! 2. Shared subcomponents — bar chart with keyboard focus
//! 3. Details — components using the chosen subcomponent
//!
//! Usage: `compmap-tui [CONFIG.toml]`. Without an argument the config is read
//! from `<config dir>/compmap/config.toml`, falling back to defaults.

use std::fs::{self, File};
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use tracing::info;
use tracing_subscriber::EnvFilter;

use compmap_core::ExplorerConfig;
use compmap_tui::{input, ui, worker, AppState};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    let app_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("compmap");
    init_logging(&app_dir.join("compmap.log"))?;

    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| app_dir.join("config.toml"));
    let config = ExplorerConfig::load_or_default(&config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;
    info!(config = %config_path.display(), mapping = %config.mapping, "starting");

    let (tx, rx) = mpsc::channel();
    let links = config.doc_links();
    let loader = worker::spawn_loader(config, tx).context("spawning loader thread")?;
    let mut app = AppState::new(links, Some(rx));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    // A loader still blocked on the network is abandoned rather than joined.
    if loader.is_finished() {
        let _ = loader.join();
    }
    info!("exit");

    result
}

/// Log to a file; the terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let file = File::create(path).with_context(|| format!("opening log {}", path.display()))?;
    let filter = EnvFilter::try_from_env("COMPMAP_LOG")
        .unwrap_or_else(|_| EnvFilter::new("compmap_core=info,compmap_tui=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Pick up the dataset once the loader is done (non-blocking)
        app.poll_loader();

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let screen = Rect::new(0, 0, size.width, size.height);
                    input::handle_mouse(app, mouse, screen);
                }
                _ => {}
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
