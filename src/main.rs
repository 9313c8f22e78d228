mod app;
mod config;
mod data;
mod event;
mod logging;
mod model;
mod notify;
mod ui;

use std::io;
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{
    self as ct_event, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent,
    KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::app::{App, Settings};
use crate::config::Config;
use crate::data::file_store::HttpFileStore;
use crate::event::AppEvent;
use crate::notify::LogNotifier;

#[derive(Parser)]
#[command(
    name = "txtview",
    version,
    about = "Browse, preview, download and delete files on a remote text file store"
)]
struct Cli {
    /// File store endpoint, e.g. http://localhost:5000/api/v1/file
    #[arg(long)]
    base_url: Option<String>,

    /// Config file [default: ./.txtview.toml when present]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs here instead of the configured/default location
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Delete without asking first
    #[arg(long)]
    no_confirm: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;

    let mut cfg = config::load_config(cli.config.as_deref(), &cwd)?;
    if let Some(url) = cli.base_url {
        cfg.set_base_url(url);
    }
    if let Some(path) = cli.log_file {
        cfg.set_log_file(path);
    }
    if cli.no_confirm {
        cfg.set_confirm_delete(false);
    }

    logging::init(&cfg.log_file(), cfg.log_level())?;
    tracing::info!(base_url = cfg.base_url(), "starting txtview");

    run_tui(&cfg)
}

fn run_tui(cfg: &Config) -> Result<()> {
    let store = HttpFileStore::new(cfg.base_url(), cfg.request_timeout())
        .context("building HTTP client")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "txtview exited with an error");
        eprintln!("Error: {:#}", e);
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: &Config,
    store: HttpFileStore,
) -> Result<()> {
    let base_url = store.base_url().to_string();
    let mut app = App::new(
        Arc::new(store),
        Box::new(LogNotifier),
        Settings::from_config(cfg),
        base_url,
    );

    // Create event channel before the first load so loaders can send results
    let (tx, rx) = mpsc::channel::<AppEvent>();
    app.event_tx = Some(tx);

    app.load_file_list();

    let tick_rate = Duration::from_millis(cfg.tick_rate());
    let mut last_tick = Instant::now();

    loop {
        // Draw only when dirty
        if app.dirty {
            terminal.draw(|f| ui::draw(f, &app))?;
            app.dirty = false;
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        if ct_event::poll(timeout)? {
            match ct_event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key(&mut app, key);
                    app.mark_dirty();
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    handle_mouse(&mut app, mouse, area);
                    app.mark_dirty();
                }
                Event::Resize(_, _) => app.mark_dirty(),
                _ => {}
            }
        }

        // Results from background requests
        while let Ok(evt) = rx.try_recv() {
            app.handle_event(evt);
            app.mark_dirty();
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
            app.on_tick();
        }

        if app.should_quit {
            tracing::info!("quit");
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keybindings (always active)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = !app.show_help;
            return;
        }
        KeyCode::Esc if app.show_help => {
            app.show_help = false;
            return;
        }
        _ => {}
    }

    // Don't process other keys when help is showing
    if app.show_help {
        return;
    }

    // Delete confirmation dialog
    if app.delete_target.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
            _ => {}
        }
        return;
    }

    // Content viewer
    if app.view.is_modal_open() {
        handle_modal_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Panes
        KeyCode::Tab | KeyCode::BackTab => app.switch_pane(),
        KeyCode::Char('h') | KeyCode::Left => app.pane = app::Pane::Files,
        KeyCode::Char('l') | KeyCode::Right => app.pane = app::Pane::Details,

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.navigate_down(),
        KeyCode::Char('k') | KeyCode::Up => app.navigate_up(),
        KeyCode::Char('g') | KeyCode::Home => app.jump_top(),
        KeyCode::Char('G') | KeyCode::End => app.jump_bottom(),
        KeyCode::PageDown => app.scroll_preview(10),
        KeyCode::PageUp => app.scroll_preview(-10),

        // Actions
        KeyCode::Enter => app.open_modal(),
        KeyCode::Char('v') | KeyCode::Char(' ') => app.toggle_preview(),
        KeyCode::Char('d') => app.download(),
        KeyCode::Char('x') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('r') => app.refresh(),

        _ => {}
    }
}

fn handle_modal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => app.close_modal(),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_modal(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_modal(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_modal(10),
        KeyCode::PageUp => app.scroll_modal(-10),
        KeyCode::Char('g') | KeyCode::Home => app.modal_scroll = 0,
        KeyCode::Char('G') | KeyCode::End => app.scroll_modal(isize::MAX),
        KeyCode::Char('d') => app.download(),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let regions = ui::layout::regions(area);
            app.click(mouse.column, mouse.row, &regions, Instant::now());
        }
        MouseEventKind::ScrollDown => app.wheel(1),
        MouseEventKind::ScrollUp => app.wheel(-1),
        _ => {}
    }
}
