mod app;
mod config;
mod logging;
mod nav;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::*;
use crate::logging::ActivityLogger;
use crate::nav::router::Router;
use crate::nav::{Destination, NavRequest};
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;

    logging::init_tracing(&cfg.logging)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Build the routing table: every destination the application can reach,
/// injected into the router up front.
fn build_router() -> Router<ScreenState> {
    let mut router = Router::new();
    router.route(Destination::Home, || ScreenState::Home(HomeScreen::new()));
    router.route(Destination::ProductList, || {
        ScreenState::ProductList(ProductListScreen::new())
    });
    router.route(Destination::QrScanner, || {
        ScreenState::Scanner(ScannerScreen::new())
    });
    router
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut router = build_router();
    router.dispatch(NavRequest::to(Destination::Home))?;

    // The configured start screen lands on top of home, so back-navigation
    // still reaches the landing screen.
    match Destination::from_symbolic_name(&cfg.start_screen) {
        Some(Destination::Home) => {}
        Some(dest) => router.dispatch(NavRequest::to(dest))?,
        None => {
            tracing::warn!(name = %cfg.start_screen, "unknown start_screen, using home");
        }
    }

    let mut state = AppState::new(cfg.clone(), router);
    let mut activity_logger = ActivityLogger::new(&cfg.logging);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    let tick_rate = std::time::Duration::from_millis(cfg.ui.tick_rate_ms.max(10));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::Navigate(request) => {
                    let from = state
                        .router
                        .current()
                        .map(|s| s.destination().symbolic_name())
                        .unwrap_or_default();
                    match state.router.dispatch(request) {
                        Ok(()) => {
                            activity_logger.log_navigation(from, request.symbolic_name());
                            tracing::debug!(from, to = request.symbolic_name(), "navigated");
                        }
                        Err(e) => {
                            // Unhandled by the dispatcher itself: surface
                            // through the status line and diagnostics.
                            tracing::warn!(error = %e, "dispatch failed");
                            state.set_status(format!("Navigation failed: {}", e));
                        }
                    }
                    state.dirty = true;
                }
                Action::NavigateBack => {
                    let from = state
                        .router
                        .current()
                        .map(|s| s.destination().symbolic_name())
                        .unwrap_or_default();
                    if state.router.back() {
                        let to = state
                            .router
                            .current()
                            .map(|s| s.destination().symbolic_name())
                            .unwrap_or_default();
                        activity_logger.log_navigation(from, to);
                        state.dirty = true;
                    }
                }
                Action::LogActivity { screen, detail } => {
                    activity_logger.log_event(screen, &detail);
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
