// Use cases view
//
// One card per sector scenario (cursor with ↑/↓, Enter opens the detail),
// the analysis of the selected use case, and implementation recommendations.

use super::heading;
use crate::dataset::RECOMMENDATIONS;
use crate::model::UseCase;
use crate::theme::Theme;
use crate::tui::app::App;
use crate::tui::components::truncate_to_width;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let use_cases = app.controller.catalog().use_cases();
    let cards_height = if bp.card_columns() == 3 {
        9
    } else {
        use_cases.len() as u16 * 2 + 2
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(cards_height),
            Constraint::Min(12),
            Constraint::Length(RECOMMENDATIONS.len() as u16 * 2 + 2),
        ])
        .split(area);

    if bp.card_columns() == 3 {
        render_cards(f, rows[0], app);
    } else {
        render_card_list(f, rows[0], app);
    }
    render_analysis(f, rows[1], app, bp);
    render_recommendations(f, rows[2], app);
}

// ─── Cards ───────────────────────────────────────────────────

fn badge(use_case: &UseCase, theme: &Theme) -> Span<'static> {
    Span::styled(
        format!(" {} ", use_case.system_type.label()),
        Style::default()
            .fg(theme.background)
            .bg(theme.series(use_case.system_type))
            .add_modifier(Modifier::BOLD),
    )
}

/// `S 88  P 92  ...` metric initials with their scores
pub(crate) fn metric_strip(use_case: &UseCase) -> String {
    use_case
        .metrics
        .iter()
        .map(|m| format!("{} {}", m.initial(), m.score))
        .collect::<Vec<_>>()
        .join("  ")
}

fn card_border(app: &App, index: usize, use_case: &UseCase) -> Style {
    if index == app.card_cursor {
        Style::default().fg(app.theme.highlight)
    } else if use_case.id == app.controller.active_system() {
        Style::default().fg(app.theme.series(use_case.system_type))
    } else {
        Style::default().fg(app.theme.border)
    }
}

fn render_cards(f: &mut Frame, area: Rect, app: &App) {
    let use_cases = app.controller.catalog().use_cases();
    if use_cases.is_empty() {
        return;
    }
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, use_cases.len() as u32);
            use_cases.len()
        ])
        .split(area);

    for (i, (use_case, col)) in use_cases.iter().zip(cols.iter()).enumerate() {
        let lines = vec![
            Line::from(badge(use_case, &app.theme)),
            Line::styled(
                use_case.description.clone(),
                Style::default().fg(app.theme.foreground),
            ),
            Line::raw(""),
            Line::styled(metric_strip(use_case), Style::default().fg(app.theme.muted)),
        ];
        let cursor = if i == app.card_cursor { "▸ " } else { "" };
        let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(card_border(app, i, use_case))
                .title(Line::styled(
                    format!(" {}{} ", cursor, use_case.name),
                    Style::default()
                        .fg(app.theme.title)
                        .add_modifier(Modifier::BOLD),
                ))
                .title_bottom(Line::from(" Enter: details ").right_aligned()),
        );
        f.render_widget(card, *col);
    }
}

/// Narrow terminals: one line per card plus its metric strip
fn render_card_list(f: &mut Frame, area: Rect, app: &App) {
    let width = area.width.saturating_sub(4) as usize;
    let mut lines = Vec::new();
    for (i, use_case) in app.controller.catalog().use_cases().iter().enumerate() {
        let style = if i == app.card_cursor {
            Style::default()
                .fg(app.theme.selection_fg)
                .bg(app.theme.selection)
        } else {
            Style::default().fg(app.theme.foreground)
        };
        lines.push(Line::from(vec![
            badge(use_case, &app.theme),
            Span::styled(
                format!(" {}", truncate_to_width(&use_case.name, width.saturating_sub(14))),
                style,
            ),
        ]));
        lines.push(Line::styled(
            format!("  {}", metric_strip(use_case)),
            Style::default().fg(app.theme.muted),
        ));
    }
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border))
                .title(" Use Cases "),
        ),
        area,
    );
}

// ─── Analysis ────────────────────────────────────────────────

fn bullet_list(title: &str, items: &[String], marker: Span<'static>, app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![heading(title, app)];
    for item in items {
        lines.push(Line::from(vec![
            marker.clone(),
            Span::styled(item.clone(), Style::default().fg(app.theme.foreground)),
        ]));
    }
    lines
}

fn render_analysis(f: &mut Frame, area: Rect, app: &App, bp: Breakpoint) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let Some(use_case) = app.controller.selected_use_case() else {
        let hint = Paragraph::new(Line::styled(
            " Select a use case (↑/↓, Enter) to see its analysis.",
            Style::default().fg(app.theme.muted),
        ))
        .block(block.title(" Analysis "));
        f.render_widget(hint, area);
        return;
    };

    let inner = block.inner(area);
    f.render_widget(
        block.title(Line::styled(
            format!(" Analysis: {} ", use_case.name),
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )),
        area,
    );

    let direction = if bp.at_least(Breakpoint::Wide) {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let parts = Layout::default()
        .direction(direction)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(inner);

    let challenges = bullet_list(
        "Key Challenges",
        &use_case.challenges,
        Span::styled(" ! ", Style::default().fg(app.theme.warning)),
        app,
    );
    let benefits = bullet_list(
        "Benefits",
        &use_case.benefits,
        Span::styled(" ✓ ", Style::default().fg(app.theme.positive)),
        app,
    );
    f.render_widget(Paragraph::new(challenges).wrap(Wrap { trim: true }), parts[0]);
    f.render_widget(Paragraph::new(benefits).wrap(Wrap { trim: true }), parts[1]);
    render_metrics_chart(f, parts[2], use_case, &app.theme);
}

/// Vertical bars, one per metric, all in the use case's system color
fn render_metrics_chart(f: &mut Frame, area: Rect, use_case: &UseCase, theme: &Theme) {
    let count = use_case.metrics.len().max(1) as u16;
    let bar_width = (area.width.saturating_sub(2) / count).saturating_sub(1).clamp(3, 12);
    let color = theme.series(use_case.system_type);

    let bars: Vec<Bar> = use_case
        .metrics
        .iter()
        .map(|m| {
            let label = truncate_to_width(&m.display_name(), bar_width as usize);
            Bar::default()
                .value(u64::from(m.score))
                .label(Line::from(label))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(theme.background).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border))
                .title(" Metrics "),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(100);
    f.render_widget(chart, area);
}

// ─── Recommendations ─────────────────────────────────────────

fn render_recommendations(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut lines = Vec::new();
    for rec in RECOMMENDATIONS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", rec.sector),
                Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
            ),
            Span::styled(rec.approach, Style::default().fg(theme.highlight)),
        ]));
        lines.push(Line::styled(
            format!("  {}", rec.rationale),
            Style::default().fg(theme.muted),
        ));
    }
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(" Implementation Recommendations "),
        ),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ActiveView;
    use crate::tui::app::test_app;
    use crate::tui::views::render_to_string;

    #[tokio::test]
    async fn metric_strip_uses_initials() {
        let app = test_app();
        let healthcare = app.controller.catalog().use_case("healthcare").unwrap();
        assert_eq!(metric_strip(healthcare), "S 88  P 92  S 74  I 85  C 65");
    }

    #[tokio::test]
    async fn cards_and_recommendations_render() {
        let mut app = test_app();
        app.set_view(ActiveView::UseCases);
        let screen = render_to_string(&mut app, 160, 60);
        assert!(screen.contains("Healthcare Identity Management"));
        assert!(screen.contains("Financial Services KYC"));
        assert!(screen.contains("Implementation Recommendations"));
        assert!(screen.contains("Select a use case"));
    }

    #[tokio::test]
    async fn selected_use_case_shows_analysis() {
        let mut app = test_app();
        app.set_view(ActiveView::UseCases);
        app.select_system("finance");
        let screen = render_to_string(&mut app, 160, 60);
        assert!(screen.contains("Analysis: Financial Services KYC"));
        assert!(screen.contains("Key Challenges"));
        assert!(screen.contains("Benefits"));
        assert!(screen.contains("Metrics"));
    }
}
