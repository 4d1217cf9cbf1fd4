//! Logs panel component
//!
//! Shows the newest captured log entries, color coded by level. The panel is
//! read-only and always follows the tail of the buffer.

use crate::logging::{LogEntry, LogLevel};
use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

fn log_level_style(level: LogLevel, theme: &Theme) -> Style {
    let color = match level {
        LogLevel::Error => theme.log_error,
        LogLevel::Warn => theme.log_warn,
        LogLevel::Info => theme.log_info,
        LogLevel::Debug | LogLevel::Trace => theme.log_debug,
    };
    Style::default().fg(color)
}

/// Last path segment of a tracing target (`identity_lens::controller` -> `controller`)
fn short_target(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "{} {:<5} {:<10} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        short_target(&entry.target),
        entry.message
    )
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    // Border rows don't hold entries
    let capacity = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.recent(capacity);

    let items: Vec<ListItem> = if app.log_buffer.is_empty() {
        vec![ListItem::new(" No log entries yet").style(Style::default().fg(theme.muted))]
    } else {
        entries
            .iter()
            .map(|entry| {
                ListItem::new(format_log_entry(entry)).style(log_level_style(entry.level, theme))
            })
            .collect()
    };

    let title = format!(" System Logs ({}) ", app.log_buffer.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(title),
    );

    f.render_widget(list, area);
}
