// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, resize, redraw ticks, animation ticks)
// - Layered key dispatch into App

pub mod app;
pub mod components;
pub mod layout;
pub mod modal;
pub mod views;

use crate::advisory::{FileFlagStore, FlagStore, MemoryFlagStore};
use crate::animator::AnimationTick;
use crate::config::Config;
use crate::controller::ActiveView;
use crate::logging::LogBuffer;
use crate::model::Catalog;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done (also when the loop returns an error).
pub async fn run_tui(config: Config, catalog: Arc<Catalog>, log_buffer: LogBuffer) -> Result<()> {
    let flag_store: Box<dyn FlagStore> = match &config.state_file {
        Some(path) => {
            let store = FileFlagStore::new(path);
            tracing::debug!(path = %store.path().display(), "Advisory state file");
            Box::new(store)
        }
        None => {
            tracing::warn!("No state directory, advisory dismissal won't persist");
            Box::new(MemoryFlagStore::default())
        }
    };

    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
    let mut app = App::new(&config, catalog, log_buffer, tick_tx, flag_store);

    let (columns, _) = terminal::size().context("Failed to read terminal size")?;
    app.on_resize(columns);

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    tracing::info!(view = app.view().as_str(), "TUI started");

    let result = run_event_loop(
        &mut terminal,
        &mut app,
        &mut tick_rx,
        Duration::from_millis(config.tick_rate_ms),
    )
    .await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Terminal input (keys, resize)
/// 2. Redraw ticks (toast expiry, uptime, pulsing)
/// 3. Animation ticks from the step timer
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick_rx: &mut mpsc::UnboundedReceiver<AnimationTick>,
    tick_rate: Duration,
) -> Result<()> {
    let mut redraw = tokio::time::interval(tick_rate);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Resize(columns, _)) => app.on_resize(columns),
                        _ => {}
                    }
                }
            } => {}

            _ = redraw.tick() => {
                app.tick_animation();
            }

            Some(tick) = tick_rx.recv() => {
                app.on_animation_tick(tick);
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!("TUI exiting");
    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Advisory → Global → View-specific
pub(crate) fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: Advisory banner actions while it is showing
    if handle_advisory_keys(app, &key_event) {
        return;
    }

    // Layer 3: Global keys (work regardless of view)
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 4: View-specific keys
    match app.view() {
        ActiveView::Dashboard => {}
        ActiveView::Architectures => handle_architecture_keys(app, key_event.code),
        ActiveView::Comparison => handle_comparison_keys(app, key_event.code),
        ActiveView::UseCases => handle_use_case_keys(app, key_event.code),
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(modal) = app.modal else {
        return false;
    };

    match modal.handle_input(key_event.code) {
        ModalAction::None => true,
        ModalAction::Close => {
            app.modal = None;
            true
        }
        ModalAction::CloseDetail(control) => {
            app.close_detail(control);
            true
        }
        ModalAction::Passthrough => false,
    }
}

fn handle_advisory_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if !app.advisory.is_visible() {
        return false;
    }
    match key_event.code {
        KeyCode::Char('g') => {
            app.set_view(ActiveView::Architectures);
            true
        }
        KeyCode::Char('D') => {
            app.dismiss_advisory();
            true
        }
        _ => false,
    }
}

/// Handle global keys - returns true if handled
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true
        }
        KeyCode::F(1) => app.set_view(ActiveView::Dashboard),
        KeyCode::F(2) => app.set_view(ActiveView::Architectures),
        KeyCode::F(3) => app.set_view(ActiveView::Comparison),
        KeyCode::F(4) => app.set_view(ActiveView::UseCases),
        KeyCode::Tab => app.next_view(),
        KeyCode::BackTab => app.prev_view(),
        KeyCode::Char('?') => app.modal = Some(Modal::Help),
        KeyCode::Char('T') => app.cycle_theme(),
        KeyCode::Char('L') => app.toggle_logs(),
        _ => return false,
    }
    true
}

fn handle_architecture_keys(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('t') => app.select_system("traditional"),
        KeyCode::Char('b') => app.select_system("blockchain"),
        KeyCode::Char('h') => app.select_system("hybrid"),
        KeyCode::Left => app.cycle_selector(false),
        KeyCode::Right => app.cycle_selector(true),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_animation(),
        _ => {}
    }
}

fn handle_comparison_keys(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('a') => app.select_system(crate::controller::COMPARISON),
        KeyCode::Char('t') => app.select_system("traditional"),
        KeyCode::Char('b') => app.select_system("blockchain"),
        KeyCode::Char('h') => app.select_system("hybrid"),
        KeyCode::Left => app.cycle_selector(false),
        KeyCode::Right => app.cycle_selector(true),
        _ => {}
    }
}

fn handle_use_case_keys(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => app.move_card_cursor(-1),
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => app.move_card_cursor(1),
        KeyCode::Enter => app.open_card_under_cursor(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::test_app;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[tokio::test]
    async fn function_keys_switch_views() {
        let mut app = test_app();
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.view(), ActiveView::Architectures);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view(), ActiveView::Comparison);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.view(), ActiveView::Dashboard);
    }

    #[tokio::test]
    async fn space_toggles_animation_on_architectures() {
        let mut app = test_app();
        press(&mut app, KeyCode::F(2));
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Char(' '));
        assert!(app.controller.animation().enabled);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.controller.animation().enabled);
    }

    #[tokio::test]
    async fn detail_modal_absorbs_keys_until_closed() {
        let mut app = test_app();
        press(&mut app, KeyCode::F(4));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.modal, Some(Modal::UseCaseDetail));

        // View switching is blocked while the overlay is up
        press(&mut app, KeyCode::F(1));
        assert_eq!(app.view(), ActiveView::UseCases);

        press(&mut app, KeyCode::Esc);
        assert!(app.modal.is_none());
        assert!(!app.controller.overlay().is_open());
        assert_eq!(app.controller.active_system(), "healthcare");
    }

    #[tokio::test]
    async fn advisory_keys_only_apply_while_visible() {
        let mut app = test_app();
        app.on_resize(200);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.view(), ActiveView::Dashboard);

        app.on_resize(60);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.view(), ActiveView::Architectures);

        press(&mut app, KeyCode::Char('D'));
        assert!(!app.advisory.is_visible());
    }

    #[tokio::test]
    async fn quit_works_from_help() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.modal, Some(Modal::Help));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn release_events_are_ignored() {
        let mut app = test_app();
        let mut release = KeyEvent::new(KeyCode::F(3), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        handle_key_event(&mut app, release);
        assert_eq!(app.view(), ActiveView::Dashboard);
    }
}
