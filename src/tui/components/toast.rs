//! Transient notices
//!
//! A toast is a one-line notice pinned above the status bar's right end. Info
//! notices (theme changes) fade quickly; warnings (rejected actions, failed
//! writes) stay up longer and carry a marker in the warning color.
//!
//! Timing uses tokio's clock so paused-time tests can step past expiry.

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Duration;
use tokio::time::Instant;
use unicode_width::UnicodeWidthStr;

/// Rows kept clear below the toast (status bar)
const STATUS_CLEARANCE: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Warning,
}

impl ToastKind {
    fn lifetime(self) -> Duration {
        match self {
            ToastKind::Info => Duration::from_secs(2),
            ToastKind::Warning => Duration::from_secs(4),
        }
    }

    fn marker(self) -> &'static str {
        match self {
            ToastKind::Info => "",
            ToastKind::Warning => "! ",
        }
    }

    fn accent(self, theme: &Theme) -> Color {
        match self {
            ToastKind::Info => theme.highlight,
            ToastKind::Warning => theme.warning,
        }
    }
}

#[derive(Debug)]
pub struct Toast {
    kind: ToastKind,
    pub message: String,
    shown_at: Instant,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, message)
    }

    fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.kind.lifetime()
    }

    /// Box for the toast inside `screen`: sized to the text, right-aligned,
    /// one cell in from the edge and clear of the status bar
    fn placement(&self, screen: Rect) -> Rect {
        let text_width = self.kind.marker().width() + self.message.width();
        let width = (text_width as u16)
            .saturating_add(4)
            .min(screen.width.saturating_sub(2));
        let height = 3.min(screen.height);
        Rect::new(
            screen.right().saturating_sub(width + 1),
            screen.bottom().saturating_sub(height + STATUS_CLEARANCE),
            width,
            height,
        )
    }

    pub fn render(&self, f: &mut Frame, screen: Rect, theme: &Theme) {
        let area = self.placement(screen);
        let accent = self.kind.accent(theme);

        let line = Line::from(vec![
            Span::styled(self.kind.marker(), Style::default().fg(accent)),
            Span::styled(self.message.as_str(), Style::default().fg(theme.foreground)),
        ]);
        let notice = Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(accent))
                .style(Style::default().bg(theme.background)),
        );

        f.render_widget(Clear, area);
        f.render_widget(notice, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time;

    #[tokio::test(start_paused = true)]
    async fn warnings_outlive_info() {
        let info = Toast::info("Theme: Daylight");
        let warning = Toast::warning("Could not save preference");

        time::advance(Duration::from_millis(2100)).await;
        assert!(info.is_expired());
        assert!(!warning.is_expired());

        time::advance(Duration::from_secs(2)).await;
        assert!(warning.is_expired());
    }

    #[tokio::test]
    async fn placement_hugs_the_bottom_right() {
        let toast = Toast::info("Theme: Indigo");
        let area = toast.placement(Rect::new(0, 0, 100, 40));
        assert_eq!(area, Rect::new(82, 35, 17, 3));
    }

    #[tokio::test]
    async fn placement_shrinks_to_tiny_screens() {
        let toast = Toast::warning("Select an architecture first (t/b/h)");
        let area = toast.placement(Rect::new(0, 0, 20, 2));
        assert_eq!(area.width, 18);
        assert_eq!(area.height, 2);
        assert!(area.right() <= 20);
    }
}
