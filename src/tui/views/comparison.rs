// Comparison view
//
// Radar of the eight capability categories for the selected systems, next to
// a strengths/weaknesses summary per system.

use super::selector_line;
use crate::controller::COMPARISON;
use crate::dataset::{SystemSummary, SYSTEM_SUMMARIES};
use crate::model::SystemKind;
use crate::theme::Theme;
use crate::tui::app::App;
use crate::tui::components::radar_canvas;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const SELECTOR: [(&str, &str, &str); 4] = [
    ("a", COMPARISON, "All Systems"),
    ("t", "traditional", "Traditional"),
    ("b", "blockchain", "Blockchain"),
    ("h", "hybrid", "Hybrid"),
];

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let series = app.controller.radar_series();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(10),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(selector_line(&SELECTOR, app.controller.active_system(), app)),
        rows[0],
    );
    f.render_widget(
        Paragraph::new(radar_canvas::legend(&series, &app.theme)),
        rows[1],
    );

    let bp = Breakpoint::from_width(area.width);
    let (radar_area, summary_area) = if bp.at_least(Breakpoint::Wide) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[2]);
        (cols[0], cols[1])
    } else {
        let stack = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[2]);
        (stack[0], stack[1])
    };

    radar_canvas::render(f, radar_area, &series, &app.theme);
    render_summaries(f, summary_area, &series, &app.theme);
}

fn summary_lines(summary: &SystemSummary, selected: bool, theme: &Theme) -> Vec<Line<'static>> {
    let name_style = if selected {
        Style::default()
            .fg(theme.series(summary.system))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted)
    };
    let text_style = Style::default().fg(if selected { theme.foreground } else { theme.muted });

    let mut lines = vec![Line::styled(
        format!("{} Identity", summary.system.label()),
        name_style,
    )];
    for s in summary.strengths {
        lines.push(Line::from(vec![
            Span::styled("  + ", Style::default().fg(theme.positive)),
            Span::styled(*s, text_style),
        ]));
    }
    for w in summary.weaknesses {
        lines.push(Line::from(vec![
            Span::styled("  − ", Style::default().fg(theme.negative)),
            Span::styled(*w, text_style),
        ]));
    }
    lines.push(Line::raw(""));
    lines
}

fn render_summaries(f: &mut Frame, area: Rect, series: &[SystemKind], theme: &Theme) {
    let lines: Vec<Line> = SYSTEM_SUMMARIES
        .iter()
        .flat_map(|s| summary_lines(s, series.contains(&s.system), theme))
        .collect();

    let p = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(" Strengths & Weaknesses "),
    );
    f.render_widget(p, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ActiveView;
    use crate::tui::app::test_app;
    use crate::tui::views::render_to_string;

    #[test]
    fn unselected_summaries_are_muted() {
        let theme = Theme::indigo();
        let summary = &SYSTEM_SUMMARIES[0];
        let muted = summary_lines(summary, false, &theme);
        assert_eq!(muted[0].style.fg, Some(theme.muted));

        let shown = summary_lines(summary, true, &theme);
        assert_eq!(shown[0].style.fg, Some(theme.traditional));
        // name, 4 strengths, 3 weaknesses, spacer
        assert_eq!(shown.len(), 9);
    }

    #[tokio::test]
    async fn renders_radar_and_summaries() {
        let mut app = test_app();
        app.set_view(ActiveView::Comparison);
        let screen = render_to_string(&mut app, 160, 60);
        assert!(screen.contains("[a] All Systems"));
        assert!(screen.contains("Capability Radar"));
        assert!(screen.contains("Strengths & Weaknesses"));
        assert!(screen.contains("Self-sovereign identity control"));
        assert!(screen.contains("Integration complexity"));
    }
}
