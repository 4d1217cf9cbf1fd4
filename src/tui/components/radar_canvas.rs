// Radar chart component
//
// ratatui has no polar chart, so the radar is painted on a Canvas: one spoke
// per category, grid rings at quarter intervals, and a closed polygon per
// selected system. Spoke 0 points straight up, the rest follow clockwise.

use crate::dataset::RADAR_CATEGORIES;
use crate::model::SystemKind;
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders,
    },
    Frame,
};
use std::f64::consts::{FRAC_PI_2, TAU};

const GRID_RINGS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];
const LABEL_RADIUS: f64 = 1.12;
const X_EXTENT: f64 = 1.9;
const Y_EXTENT: f64 = 1.25;

/// Position of `radius` along spoke `index` of `count`
pub fn vertex(index: usize, count: usize, radius: f64) -> (f64, f64) {
    let angle = FRAC_PI_2 - TAU * index as f64 / count as f64;
    (radius * angle.cos(), radius * angle.sin())
}

/// Closed outline through one point per spoke
fn ring(radii: &[f64]) -> Vec<((f64, f64), (f64, f64))> {
    let n = radii.len();
    (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            (vertex(i, n, radii[i]), vertex(j, n, radii[j]))
        })
        .collect()
}

/// Render the radar for `series` (empty renders just the grid)
pub fn render(f: &mut Frame, area: Rect, series: &[SystemKind], theme: &Theme) {
    let count = RADAR_CATEGORIES.len();
    // Canvas units per terminal column, to center labels left of their spoke
    let unit_per_col = (2.0 * X_EXTENT) / f64::from(area.width.saturating_sub(2).max(1));

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(" Capability Radar "),
        )
        .marker(Marker::Braille)
        .background_color(theme.background)
        .x_bounds([-X_EXTENT, X_EXTENT])
        .y_bounds([-Y_EXTENT, Y_EXTENT])
        .paint(|ctx| {
            for r in GRID_RINGS {
                for ((x1, y1), (x2, y2)) in ring(&vec![r; count]) {
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: theme.flow_pending,
                    });
                }
            }
            for i in 0..count {
                let (x2, y2) = vertex(i, count, 1.0);
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2,
                    y2,
                    color: theme.flow_pending,
                });
            }

            ctx.layer();

            for kind in series {
                let radii: Vec<f64> = RADAR_CATEGORIES
                    .iter()
                    .map(|c| c.scores.get(*kind) / 100.0)
                    .collect();
                for ((x1, y1), (x2, y2)) in ring(&radii) {
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: theme.series(*kind),
                    });
                }
            }

            ctx.layer();

            for (i, category) in RADAR_CATEGORIES.iter().enumerate() {
                let (x, y) = vertex(i, count, LABEL_RADIUS);
                let width = category.category.chars().count() as f64 * unit_per_col;
                // Right-hand labels start at the spoke, left-hand ones end there
                let x = if x.abs() < 0.05 {
                    x - width / 2.0
                } else if x < 0.0 {
                    x - width
                } else {
                    x
                };
                ctx.print(
                    x.max(-X_EXTENT),
                    y,
                    Span::styled(category.category, Style::default().fg(theme.muted)),
                );
            }
        });

    f.render_widget(canvas, area);
}

/// One-line legend naming each drawn series in its color
pub fn legend(series: &[SystemKind], theme: &Theme) -> ratatui::text::Line<'static> {
    let mut spans = Vec::new();
    for kind in series {
        spans.push(Span::styled(
            "■ ",
            Style::default().fg(theme.series(*kind)),
        ));
        spans.push(Span::styled(
            format!("{}  ", kind.label()),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ));
    }
    ratatui::text::Line::from(spans)
}
