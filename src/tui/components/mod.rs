// Components module - reusable UI building blocks
//
// Shell components are rendered in every view:
// - Nav bar: app name and panel tabs
// - Advisory banner: small-screen notice (when applicable)
// - Logs panel: captured tracing output (toggle with L)
// - Status bar: view, selection, animation step, uptime
//
// Canvas painters (diagram, radar) are shared by the panel views.

pub mod advisory_banner;
pub mod diagram_canvas;
pub mod formatters;
pub mod logs_panel;
pub mod nav_bar;
pub mod radar_canvas;
pub mod status_bar;
pub mod toast;

pub use toast::Toast;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the nav bar (convenience wrapper)
pub fn render_nav(f: &mut Frame, area: Rect, app: &App) {
    nav_bar::render(f, area, app);
}

/// Render the advisory banner (convenience wrapper)
pub fn render_advisory(f: &mut Frame, area: Rect, app: &App) {
    advisory_banner::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}

/// Render the logs panel (convenience wrapper)
pub fn render_logs_panel(f: &mut Frame, area: Rect, app: &App) {
    logs_panel::render(f, area, app);
}

// Re-export formatters for shared use
pub use formatters::{format_compact_number, score_bar, truncate_to_width};
