// Views module - screen-level rendering logic
//
// Each view is one panel of the lens:
// - Dashboard: overview cards, adoption and incident trends, benchmarks
// - Architectures: animated flow diagram for one system
// - Comparison: capability radar with strengths and weaknesses
// - Use cases: sector cards, analysis and recommendations
//
// This module builds the shell (nav, advisory, logs, status) and dispatches
// the content slot to the active view.

mod architectures;
mod comparison;
mod dashboard;
mod modal;
mod use_cases;

use super::app::App;
use crate::controller::ActiveView;
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;
use ratatui::Frame;

const NAV_HEIGHT: u16 = 3;
const ADVISORY_HEIGHT: u16 = 4;
const LOGS_HEIGHT: u16 = 8;
const STATUS_HEIGHT: u16 = 2;

/// Shell slots, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Nav,
    Advisory,
    Content,
    Logs,
    Status,
}

fn shell_slots(app: &App) -> Vec<(Slot, Constraint)> {
    let mut slots = vec![(Slot::Nav, Constraint::Length(NAV_HEIGHT))];
    if app.advisory.is_visible() {
        slots.push((Slot::Advisory, Constraint::Length(ADVISORY_HEIGHT)));
    }
    slots.push((Slot::Content, Constraint::Min(10)));
    if app.show_logs {
        slots.push((Slot::Logs, Constraint::Length(LOGS_HEIGHT)));
    }
    slots.push((Slot::Status, Constraint::Length(STATUS_HEIGHT)));
    slots
}

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to entire frame (respects use_theme_background toggle)
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let slots = shell_slots(app);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(slots.iter().map(|(_, c)| *c))
        .split(f.area());

    let mut content_area: Option<Rect> = None;
    for ((slot, _), area) in slots.iter().zip(chunks.iter()) {
        match slot {
            Slot::Nav => components::render_nav(f, *area, app),
            Slot::Advisory => components::render_advisory(f, *area, app),
            Slot::Logs => components::render_logs_panel(f, *area, app),
            Slot::Status => components::render_status(f, *area, app),
            Slot::Content => content_area = Some(*area),
        }
    }

    if let Some(area) = content_area {
        match app.view() {
            ActiveView::Dashboard => dashboard::render(f, area, app),
            ActiveView::Architectures => architectures::render(f, area, app),
            ActiveView::Comparison => comparison::render(f, area, app),
            ActiveView::UseCases => use_cases::render(f, area, app),
        }
    }

    // Modal overlay (on top of everything)
    if let Some(modal_state) = app.modal {
        modal::render(f, &modal_state, app);
    }

    // Toast notification (on top of modal too)
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    app.clear_expired_toast();
}

/// Selector row shared by the architectures and comparison panels:
/// `[t] Traditional  [b] Blockchain ...` with the active option highlighted
fn selector_line<'a>(options: &[(&'a str, &'a str, &'a str)], active: &str, app: &App) -> Line<'a> {
    let theme = &app.theme;
    let mut spans = vec![Span::raw(" ")];
    for (key, id, label) in options {
        let style = if *id == active {
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.foreground)
        };
        spans.push(Span::styled(format!("[{}]", key), Style::default().fg(theme.warning)));
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

/// Section heading used inside panels
fn heading(text: &str, app: &App) -> Line<'static> {
    Line::styled(
        text.to_string(),
        Style::default()
            .fg(app.theme.title)
            .add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
pub(crate) fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    use ratatui::{backend::TestBackend, Terminal};

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|c| c.symbol())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::test_app;

    #[tokio::test]
    async fn shell_shows_nav_and_status() {
        let mut app = test_app();
        let screen = render_to_string(&mut app, 160, 50);
        assert!(screen.contains("Identity Systems Lens"));
        assert!(screen.contains("F2 System Architectures"));
        assert!(screen.contains("View: Dashboard"));
    }

    #[tokio::test]
    async fn advisory_slot_follows_visibility() {
        let mut app = test_app();
        app.on_resize(60);
        let slots: Vec<Slot> = shell_slots(&app).into_iter().map(|(s, _)| s).collect();
        assert!(slots.contains(&Slot::Advisory));

        let screen = render_to_string(&mut app, 160, 50);
        assert!(screen.contains("Screen Size"));

        app.dismiss_advisory();
        let slots: Vec<Slot> = shell_slots(&app).into_iter().map(|(s, _)| s).collect();
        assert!(!slots.contains(&Slot::Advisory));
    }

    #[tokio::test]
    async fn logs_slot_toggles() {
        let mut app = test_app();
        app.toggle_logs();
        let screen = render_to_string(&mut app, 160, 50);
        assert!(screen.contains("System Logs"));
    }
}
