// Advisory banner component
//
// Shown under the nav bar while the terminal is narrower than the advisory
// threshold and the user has not dismissed it.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const ADVISORY_MESSAGE: &str =
    "For the best experience viewing simulations and flow animations, please use a larger screen device.";

pub const ADVISORY_HINT: &str = "Press [g] for System Architectures to explore interactive visualizations.";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let key = Style::default()
        .fg(theme.warning)
        .add_modifier(Modifier::BOLD);

    let text = vec![
        Line::styled(ADVISORY_MESSAGE, Style::default().fg(theme.foreground)),
        Line::from(vec![
            Span::styled(ADVISORY_HINT, Style::default().fg(theme.muted)),
            Span::raw("  "),
            Span::styled("[D]", key),
            Span::styled(" dismiss", Style::default().fg(theme.muted)),
        ]),
    ];

    let banner = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.warning))
            .title(" Screen Size "),
    );

    f.render_widget(banner, area);
}
