//! Architecture diagram painter
//!
//! Draws a [`DiagramLayout`] on a ratatui `Canvas`. The layout is already
//! resolved (positions, flow states); this module only decides strokes:
//!
//! - pending flows: one thin solid stroke in the neutral color
//! - completed flows: two parallel strokes in the secondary color
//! - the active flow: three dashed strokes whose dashes march with the redraw
//!   frame, alternating color for a pulse, plus a particle on each endpoint
//!
//! Canvas x runs over percent of the virtual width, canvas y over authored
//! units flipped so that authored `y = 0` is the top edge.

use crate::diagram::{DiagramLayout, FlowLine, FlowState, Point};
use crate::model::VIRTUAL_CANVAS_WIDTH;
use crate::theme::Theme;
use crate::tui::components::formatters::truncate_to_width;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Circle, Context, Line as CanvasLine, Rectangle},
        Block, Borders,
    },
    Frame,
};

/// Authored units per percent of canvas width
const UNITS_PER_PERCENT: f64 = VIRTUAL_CANVAS_WIDTH / 100.0;

/// Dash pattern in authored units (on, off)
const DASH_ON: f64 = 10.0;
const DASH_OFF: f64 = 6.0;
/// How far the dash pattern moves per redraw frame
const DASH_STEP: f64 = 4.0;

/// Padding below the lowest node
const BOTTOM_MARGIN: f64 = 20.0;

/// Visible canvas extent for a layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_max: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn of(layout: &DiagramLayout) -> Self {
        let right = layout
            .nodes
            .iter()
            .map(|n| n.left_percent + n.width / UNITS_PER_PERCENT)
            .fold(100.0, f64::max);
        Self {
            x_max: right + 2.0,
            y_max: layout.content_height() + BOTTOM_MARGIN,
        }
    }

    /// Authored y (top-down) to canvas y (bottom-up)
    fn flip(&self, y: f64) -> f64 {
        self.y_max - y
    }
}

/// Split a line into dash segments. `phase` shifts the pattern along the line
/// (in authored units), which makes dashes appear to travel from source to
/// target as it grows.
pub fn dash_segments(from: Point, to: Point, phase: f64) -> Vec<(Point, Point)> {
    let dx = (to.x - from.x) * UNITS_PER_PERCENT;
    let dy = to.y - from.y;
    let length = dx.hypot(dy);
    if length <= f64::EPSILON {
        return Vec::new();
    }

    let period = DASH_ON + DASH_OFF;
    let at = |d: f64| Point {
        x: from.x + (to.x - from.x) * d / length,
        y: from.y + (to.y - from.y) * d / length,
    };

    let mut segments = Vec::new();
    // Start one period early so a partial dash can lead in at the source
    let mut start = phase.rem_euclid(period) - period;
    while start < length {
        let a = start.max(0.0);
        let b = (start + DASH_ON).min(length);
        if b > a {
            segments.push((at(a), at(b)));
        }
        start += period;
    }
    segments
}

/// Offsets (in stroke units) of the parallel strokes for a flow state
fn stroke_offsets(state: FlowState) -> &'static [f64] {
    match state.weight() {
        1 => &[0.0],
        2 => &[0.0, 1.0],
        _ => &[-1.0, 0.0, 1.0],
    }
}

/// Shift a stroke sideways: vertically for mostly-horizontal lines,
/// horizontally otherwise
fn offset_stroke(from: Point, to: Point, k: f64) -> (Point, Point) {
    let dx = (to.x - from.x) * UNITS_PER_PERCENT;
    let dy = to.y - from.y;
    if dx.abs() >= dy.abs() {
        let d = k * 2.0;
        (
            Point { x: from.x, y: from.y + d },
            Point { x: to.x, y: to.y + d },
        )
    } else {
        let d = k * 0.35;
        (
            Point { x: from.x + d, y: from.y },
            Point { x: to.x + d, y: to.y },
        )
    }
}

fn flow_color(flow: &FlowLine, theme: &Theme, frame: usize) -> Color {
    match flow.state {
        FlowState::Pending => theme.flow_pending,
        FlowState::Completed => theme.flow_completed,
        FlowState::Active if flow.state.pulsing() && (frame / 2) % 2 == 1 => theme.highlight,
        FlowState::Active => theme.flow_active,
    }
}

fn paint_flow(ctx: &mut Context, flow: &FlowLine, bounds: Bounds, theme: &Theme, frame: usize) {
    let color = flow_color(flow, theme, frame);

    for &k in stroke_offsets(flow.state) {
        let (from, to) = offset_stroke(flow.from, flow.to, k);
        let segments = if flow.state.dashed() {
            dash_segments(from, to, frame as f64 * DASH_STEP)
        } else {
            vec![(from, to)]
        };
        for (a, b) in segments {
            ctx.draw(&CanvasLine {
                x1: a.x,
                y1: bounds.flip(a.y),
                x2: b.x,
                y2: bounds.flip(b.y),
                color,
            });
        }
    }

    if flow.state.has_particles() {
        for p in [flow.from, flow.to] {
            ctx.draw(&Circle {
                x: p.x,
                y: bounds.flip(p.y),
                radius: 1.2,
                color: theme.flow_active,
            });
        }
    }
}

/// Render the diagram into `area`
///
/// `frame` is the redraw counter; it only affects the active flow.
pub fn render(
    f: &mut Frame,
    area: Rect,
    layout: &DiagramLayout,
    theme: &Theme,
    frame: usize,
    show_flow_labels: bool,
) {
    let bounds = Bounds::of(layout);
    // Terminal columns per percent of canvas width, for label truncation
    let inner_width = area.width.saturating_sub(2) as f64;
    let cols_per_percent = inner_width / bounds.x_max;

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(format!(" {} ", layout.caption)),
        )
        .marker(Marker::Braille)
        .background_color(theme.background)
        .x_bounds([0.0, bounds.x_max])
        .y_bounds([0.0, bounds.y_max])
        .paint(|ctx| {
            // Nodes
            for node in &layout.nodes {
                let color = if node.highlighted {
                    theme.highlight
                } else {
                    theme.node(node.category)
                };
                let width = node.width / UNITS_PER_PERCENT;
                ctx.draw(&Rectangle {
                    x: node.left_percent,
                    y: bounds.flip(node.top + node.height),
                    width,
                    height: node.height,
                    color,
                });
                if node.highlighted {
                    ctx.draw(&Rectangle {
                        x: node.left_percent + 0.4,
                        y: bounds.flip(node.top + node.height) + 3.0,
                        width: (width - 0.8).max(0.0),
                        height: (node.height - 6.0).max(0.0),
                        color,
                    });
                }
            }

            // Flows, pending first so the active flow ends up on top
            let mut flows: Vec<&FlowLine> = layout.flows.iter().collect();
            flows.sort_by_key(|f| f.state.weight());
            for flow in flows {
                paint_flow(ctx, flow, bounds, theme, frame);
            }

            // Text goes on its own layer above the strokes
            ctx.layer();

            for node in &layout.nodes {
                let budget = ((node.width / UNITS_PER_PERCENT) * cols_per_percent) as usize;
                let label = truncate_to_width(&node.label, budget.saturating_sub(2).max(1));
                let mut style = Style::default().fg(theme.foreground);
                if node.highlighted {
                    style = style.add_modifier(Modifier::BOLD).fg(theme.highlight);
                }
                ctx.print(
                    node.left_percent + 1.0 / cols_per_percent.max(0.1),
                    bounds.flip(node.top + node.height / 2.0),
                    Span::styled(label, style),
                );
            }

            for flow in &layout.flows {
                let active = flow.state == FlowState::Active;
                if !show_flow_labels && !active {
                    continue;
                }
                let style = if active {
                    Style::default()
                        .fg(theme.flow_active)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.muted)
                };
                ctx.print(
                    flow.label_at.x,
                    bounds.flip(flow.label_at.y),
                    Span::styled(flow.label.clone(), style),
                );
            }
        });

    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::AnimationState;
    use crate::diagram;
    use crate::model::Catalog;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn dashes_cover_the_line_with_gaps() {
        let from = Point { x: 0.0, y: 0.0 };
        let to = Point { x: 0.0, y: 100.0 };
        let segments = dash_segments(from, to, 0.0);
        // 100 units / 16-unit period
        assert_eq!(segments.len(), 7);
        assert_eq!(segments[0].0, from);
        assert_eq!(segments[0].1, Point { x: 0.0, y: 10.0 });
        assert_eq!(segments[1].0, Point { x: 0.0, y: 16.0 });
        assert_eq!(segments.last().unwrap().1, Point { x: 0.0, y: 100.0 });
    }

    #[test]
    fn phase_moves_the_dashes() {
        let from = Point { x: 0.0, y: 0.0 };
        let to = Point { x: 0.0, y: 100.0 };
        let shifted = dash_segments(from, to, 4.0);
        assert_eq!(shifted[0].1, Point { x: 0.0, y: 14.0 });
        assert!(dash_segments(from, from, 0.0).is_empty());
    }

    #[test]
    fn bounds_fit_every_node() {
        let catalog = Catalog::builtin().unwrap();
        let layout = diagram::layout(
            catalog.architecture("traditional").unwrap(),
            AnimationState::STATIC,
        );
        let bounds = Bounds::of(&layout);
        // Central Database: x=520, width=120 -> right edge at 106.67%
        assert!(bounds.x_max > 106.6);
        assert_eq!(bounds.y_max, 240.0 + BOTTOM_MARGIN);
    }

    #[test]
    fn renders_node_labels() {
        let catalog = Catalog::builtin().unwrap();
        let layout = diagram::layout(
            catalog.architecture("blockchain").unwrap(),
            AnimationState::at_step(1),
        );
        let theme = Theme::terminal();

        let mut terminal = Terminal::new(TestBackend::new(140, 24)).unwrap();
        terminal
            .draw(|f| render(f, f.area(), &layout, &theme, 0, true))
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("Step 2/6"));
        assert!(content.contains("User"));
        assert!(content.contains("Blockchain Network"));
        assert!(content.contains("2. Register DID"));
    }
}
