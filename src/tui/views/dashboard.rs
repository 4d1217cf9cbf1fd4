// Dashboard view
//
// Overview cards across the top, trend charts and the benchmark bars below.
// On wide terminals the charts sit left of the benchmarks, otherwise
// everything stacks.

use crate::dataset::{
    stacked_adoption, OverviewCard, ADOPTION_FORECAST, BENCHMARKS, OVERVIEW_CARDS,
    SECURITY_INCIDENTS,
};
use crate::model::SystemKind;
use crate::theme::Theme;
use crate::tui::app::App;
use crate::tui::components::format_compact_number;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap,
    },
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let card_height = if bp.card_columns() == 3 { 5 } else { 11 };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(card_height), Constraint::Min(8)])
        .split(area);

    render_cards(f, rows[0], bp, &app.theme);

    if bp.at_least(Breakpoint::Wide) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]);
        let charts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(cols[0]);
        render_adoption(f, charts[0], &app.theme);
        render_incidents(f, charts[1], &app.theme);
        render_benchmarks(f, cols[1], &app.theme);
    } else {
        let stack = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Percentage(30),
                Constraint::Percentage(40),
            ])
            .split(rows[1]);
        render_adoption(f, stack[0], &app.theme);
        render_incidents(f, stack[1], &app.theme);
        render_benchmarks(f, stack[2], &app.theme);
    }
}

// ─── Overview cards ──────────────────────────────────────────

fn card_lines(card: &OverviewCard, theme: &Theme) -> Vec<Line<'static>> {
    let (arrow, color) = if card.favorable {
        ("▲", theme.positive)
    } else {
        ("▼", theme.negative)
    };
    vec![
        Line::styled(card.baseline, Style::default().fg(theme.muted)),
        Line::styled(
            format!("{} {}", arrow, card.delta),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]
}

fn render_cards(f: &mut Frame, area: Rect, bp: Breakpoint, theme: &Theme) {
    let block = |title: &'static str| {
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(Line::styled(
                format!(" {} ", title),
                Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
            ))
    };

    if bp.card_columns() == 3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(area);
        for (card, col) in OVERVIEW_CARDS.iter().zip(cols.iter()) {
            let p = Paragraph::new(card_lines(card, theme))
                .wrap(Wrap { trim: true })
                .block(block(card.title));
            f.render_widget(p, *col);
        }
        return;
    }

    // Narrow: one bordered box, card title then its two lines
    let mut lines = Vec::new();
    for card in OVERVIEW_CARDS {
        lines.push(Line::styled(
            card.title,
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ));
        for mut line in card_lines(card, theme) {
            line.spans.insert(0, "  ".into());
            lines.push(line);
        }
    }
    f.render_widget(Paragraph::new(lines).block(block("Overview")), area);
}

// ─── Trend charts ────────────────────────────────────────────

fn axis_labels(from: u16, to: u16) -> Vec<Line<'static>> {
    vec![
        Line::from(from.to_string()),
        Line::from(((from + to) / 2).to_string()),
        Line::from(to.to_string()),
    ]
}

fn chart_block(title: &'static str, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .title(title)
}

/// Stacked area as cumulative lines: each line is the top edge of its layer
fn render_adoption(f: &mut Frame, area: Rect, theme: &Theme) {
    let stacked = stacked_adoption();
    let layers: Vec<Vec<(f64, f64)>> = (0..3)
        .map(|layer| stacked.iter().map(|(year, tops)| (*year, tops[layer])).collect())
        .collect();

    let datasets: Vec<Dataset> = SystemKind::ALL
        .iter()
        .zip(layers.iter())
        .map(|(kind, data)| {
            Dataset::default()
                .name(kind.label())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.series(*kind)))
                .data(data)
        })
        .collect();

    let (first, last) = year_span(ADOPTION_FORECAST.iter().map(|p| p.year));
    let chart = Chart::new(datasets)
        .block(chart_block(" Adoption Forecast (% share, stacked) ", theme))
        .style(Style::default().fg(theme.foreground))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(theme.muted))
                .bounds([f64::from(first), f64::from(last)])
                .labels(axis_labels(first, last)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(theme.muted))
                .bounds([0.0, 100.0])
                .labels(["0", "50", "100"]),
        );

    f.render_widget(chart, area);
}

fn render_incidents(f: &mut Frame, area: Rect, theme: &Theme) {
    let series: Vec<Vec<(f64, f64)>> = SystemKind::ALL
        .iter()
        .map(|kind| {
            SECURITY_INCIDENTS
                .iter()
                .map(|p| (f64::from(p.year), p.incidents.get(*kind)))
                .collect()
        })
        .collect();

    let peak = SECURITY_INCIDENTS
        .iter()
        .flat_map(|p| SystemKind::ALL.map(|k| p.incidents.get(k)))
        .fold(0.0, f64::max);
    // Round the ceiling up to the next 50
    let ceiling = ((peak / 50.0).ceil() * 50.0).max(50.0);

    let datasets: Vec<Dataset> = SystemKind::ALL
        .iter()
        .zip(series.iter())
        .map(|(kind, data)| {
            Dataset::default()
                .name(kind.label())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.series(*kind)))
                .data(data)
        })
        .collect();

    let (first, last) = year_span(SECURITY_INCIDENTS.iter().map(|p| p.year));
    let chart = Chart::new(datasets)
        .block(chart_block(" Security Incidents per Year ", theme))
        .style(Style::default().fg(theme.foreground))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(theme.muted))
                .bounds([f64::from(first), f64::from(last)])
                .labels(axis_labels(first, last)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(theme.muted))
                .bounds([0.0, ceiling])
                .labels([
                    "0".to_string(),
                    format!("{:.0}", ceiling / 2.0),
                    format!("{:.0}", ceiling),
                ]),
        );

    f.render_widget(chart, area);
}

fn year_span(years: impl Iterator<Item = u16>) -> (u16, u16) {
    years.fold((u16::MAX, 0), |(lo, hi), y| (lo.min(y), hi.max(y)))
}

// ─── Benchmarks ──────────────────────────────────────────────

/// Bar length relative to the largest value of the same metric (0-100).
/// Units differ between metrics, so they are never compared to each other.
pub(crate) fn scaled(value: f64, metric_max: f64) -> u64 {
    if metric_max <= 0.0 {
        return 0;
    }
    (value / metric_max * 100.0).round() as u64
}

fn render_benchmarks(f: &mut Frame, area: Rect, theme: &Theme) {
    let groups: Vec<BarGroup> = BENCHMARKS
        .iter()
        .map(|bench| {
            let max = SystemKind::ALL
                .iter()
                .map(|k| bench.values.get(*k))
                .fold(0.0, f64::max);
            let bars: Vec<Bar> = SystemKind::ALL
                .iter()
                .map(|kind| {
                    let value = bench.values.get(*kind);
                    Bar::default()
                        .value(scaled(value, max))
                        .text_value(format!("{} {}", kind.label(), format_compact_number(value)))
                        .style(Style::default().fg(theme.series(*kind)))
                        .value_style(
                            Style::default()
                                .fg(theme.background)
                                .bg(theme.series(*kind)),
                        )
                })
                .collect();
            BarGroup::default()
                .label(Line::styled(
                    bench.metric,
                    Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
                ))
                .bars(&bars)
        })
        .collect();

    let mut chart = BarChart::default()
        .block(chart_block(" Performance Benchmarks ", theme))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .group_gap(1)
        .max(100);
    for group in groups {
        chart = chart.data(group);
    }

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::test_app;
    use crate::tui::views::render_to_string;

    #[test]
    fn benchmark_scaling_is_per_metric() {
        assert_eq!(scaled(10_000.0, 10_000.0), 100);
        assert_eq!(scaled(100.0, 10_000.0), 1);
        assert_eq!(scaled(45.0, 187.0), 24);
        assert_eq!(scaled(5.0, 0.0), 0);
    }

    #[test]
    fn year_span_covers_series() {
        assert_eq!(
            year_span(ADOPTION_FORECAST.iter().map(|p| p.year)),
            (2022, 2028)
        );
    }

    #[tokio::test]
    async fn renders_cards_and_charts() {
        let mut app = test_app();
        let screen = render_to_string(&mut app, 160, 60);
        assert!(screen.contains("Security Comparison"));
        assert!(screen.contains("Performance Metrics"));
        assert!(screen.contains("Implementation Cost"));
        assert!(screen.contains("Adoption Forecast"));
        assert!(screen.contains("Security Incidents"));
        assert!(screen.contains("Performance Benchmarks"));
        assert!(screen.contains("Blockchain: +30% improvement"));
    }

    #[tokio::test]
    async fn narrow_layout_stacks_cards() {
        let mut app = test_app();
        let screen = render_to_string(&mut app, 80, 60);
        assert!(screen.contains("Overview"));
        assert!(screen.contains("Implementation Cost"));
    }
}
