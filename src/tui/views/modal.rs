// Modal overlay rendering
//
// Modals are rendered on top of the main content:
// - Help modal: keyboard shortcuts and current theme
// - Use-case detail: the scenario behind a card, with its two close controls

use crate::tui::app::App;
use crate::tui::components::score_bar;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub const DETAIL_NOTE: &str = "Close this window to view detailed metrics and analysis below.";

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::UseCaseDetail => render_detail(f, app),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Detail overlay width: 70% of the screen, at least 60 columns
fn detail_width(screen_width: u16) -> u16 {
    (screen_width / 10 * 7).max(60)
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    // Styles
    let key_style = Style::default().fg(app.theme.warning);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Panels", header_style)),
        kb("F1-F4", "Dashboard / Architectures / Comparison / Use Cases"),
        kb("Tab", "Next panel (Shift+Tab: previous)"),
        Line::raw(""),
        Line::from(Span::styled("  Architectures & Comparison", header_style)),
        kb("t / b / h", "Traditional / Blockchain / Hybrid"),
        kb("a", "All systems (comparison)"),
        kb("←/→", "Cycle selector"),
        kb("Space", "Animate flow / stop"),
        Line::raw(""),
        Line::from(Span::styled("  Use Cases", header_style)),
        kb("↑/↓, j/k", "Move card cursor"),
        kb("Enter", "Open use-case detail"),
        kb("Esc, x", "Close detail"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("g / D", "Small-screen notice: go / dismiss"),
        kb("T", "Cycle theme"),
        kb("L", "Toggle logs"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name.as_str(), key_style),
        ]),
    ]);

    let width = 72;
    let height = 28;
    let area = centered_rect(width, height, f.area());

    // Clear the area behind the modal
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

/// Render the use-case detail overlay
///
/// Header carries the `Esc` close control, the body ends with the `x` one.
/// Nothing is drawn once the overlay has been closed.
fn render_detail(f: &mut Frame, app: &App) {
    let Some(use_case) = app.controller.overlay().content() else {
        return;
    };
    let theme = &app.theme;
    let color = theme.series(use_case.system_type);
    let text_style = Style::default().fg(theme.foreground);
    let header_style = Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", use_case.system_type.label()),
                Style::default()
                    .fg(theme.background)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Implementation", Style::default().fg(theme.muted)),
        ]),
        Line::raw(""),
        Line::styled(use_case.description.clone(), text_style),
        Line::raw(""),
        Line::styled("Key Challenges", header_style),
    ];
    lines.extend(
        use_case
            .challenges
            .iter()
            .map(|c| Line::styled(format!("  ! {}", c), text_style)),
    );
    lines.push(Line::raw(""));
    lines.push(Line::styled("Benefits", header_style));
    lines.extend(
        use_case
            .benefits
            .iter()
            .map(|b| Line::styled(format!("  ✓ {}", b), text_style)),
    );
    lines.push(Line::raw(""));
    lines.push(Line::styled("Metrics", header_style));
    lines.extend(use_case.metrics.iter().map(|m| {
        Line::from(vec![
            Span::styled(format!("  {:<18}", m.display_name()), text_style),
            Span::styled(score_bar(m.score, 20), Style::default().fg(color)),
            Span::styled(format!(" {:>3}", m.score), text_style),
        ])
    }));
    lines.push(Line::raw(""));
    lines.push(Line::styled(DETAIL_NOTE, Style::default().fg(theme.muted)));
    lines.push(Line::from(vec![
        Span::styled("[x]", Style::default().fg(theme.warning)),
        Span::styled(" Close", text_style),
    ]));

    let frame_area = f.area();
    let width = detail_width(frame_area.width);
    let height = (lines.len() as u16 + 4).min(frame_area.height);
    let area = centered_rect(width, height, frame_area);

    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .border_type(theme.border_type)
                .title(Line::styled(
                    format!(" {} ", use_case.name),
                    Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
                ))
                .title_top(Line::from(" [Esc] ✕ ").right_aligned()),
        );

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ActiveView;
    use crate::overlay::CloseControl;
    use crate::tui::app::test_app;
    use crate::tui::views::render_to_string;

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(20, 4, area), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect(80, 40, area), Rect::new(0, 0, 40, 10));
    }

    #[tokio::test]
    async fn help_lists_bindings() {
        let mut app = test_app();
        app.modal = Some(Modal::Help);
        let screen = render_to_string(&mut app, 120, 40);
        assert!(screen.contains("Animate flow / stop"));
        assert!(screen.contains("Press ? or Esc to close"));
    }

    #[tokio::test]
    async fn detail_shows_use_case_until_closed() {
        let mut app = test_app();
        app.set_view(ActiveView::UseCases);
        app.move_card_cursor(1);
        app.open_card_under_cursor();

        let screen = render_to_string(&mut app, 160, 60);
        assert!(screen.contains("Financial Services KYC"));
        assert!(screen.contains("[Esc] ✕"));
        assert!(screen.contains(DETAIL_NOTE));

        app.close_detail(CloseControl::Header);
        let screen = render_to_string(&mut app, 160, 60);
        assert!(!screen.contains(DETAIL_NOTE));
    }

    #[tokio::test]
    async fn detail_fits_very_wide_terminals() {
        let mut app = test_app();
        app.set_view(ActiveView::UseCases);
        app.open_card_under_cursor();

        let screen = render_to_string(&mut app, 1000, 60);
        assert!(screen.contains("Healthcare Identity Management"));
        assert!(screen.contains(DETAIL_NOTE));
    }

    #[test]
    fn detail_width_scales_without_overflow() {
        assert_eq!(detail_width(40), 60);
        assert_eq!(detail_width(200), 140);
        assert_eq!(detail_width(1000), 700);
        assert_eq!(detail_width(u16::MAX), 45_871);
    }
}
