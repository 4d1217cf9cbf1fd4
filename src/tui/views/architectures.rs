// Architectures view
//
// Selector, title with step caption, the diagram canvas and, while animating,
// a row of progress chips. Key characteristics and the component legend sit
// below the canvas.

use super::{heading, selector_line};
use crate::advisory::SMALL_SCREEN_THRESHOLD;
use crate::diagram::{DiagramLayout, FlowState, ProgressChip};
use crate::model::{NodeCategory, SystemKind};
use crate::theme::Theme;
use crate::tui::app::App;
use crate::tui::components::diagram_canvas;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const NARROW_TIP: &str = "Tip: For the best experience with animated visualizations, try viewing on a larger screen or rotate your device to landscape mode.";

fn selector(app: &App) -> Line<'static> {
    let options: Vec<(&str, &str, &str)> = SystemKind::ALL
        .iter()
        .map(|k| (&k.id()[..1], k.id(), k.label()))
        .collect();
    selector_line(&options, app.controller.active_system(), app)
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(layout) = app.controller.diagram() else {
        render_unselected(f, area, app);
        return;
    };
    let Some(architecture) = app.controller.catalog().architecture(app.controller.active_system())
    else {
        return;
    };

    let bp = Breakpoint::from_width(area.width);
    let narrow = app.advisory.width_px() < SMALL_SCREEN_THRESHOLD;
    let chips_height = if layout.chips.is_empty() { 0 } else { 3 };
    let details_height = architecture.key_points.len().max(NodeCategory::ALL.len()) as u16 + 3;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(12),
            Constraint::Length(chips_height),
            Constraint::Length(details_height),
            Constraint::Length(if narrow { 2 } else { 0 }),
        ])
        .split(area);

    f.render_widget(Paragraph::new(selector(app)), rows[0]);
    f.render_widget(Paragraph::new(title_line(&layout, &app.theme)), rows[1]);
    f.render_widget(
        Paragraph::new(architecture.description.as_str())
            .style(Style::default().fg(app.theme.muted))
            .wrap(Wrap { trim: true }),
        rows[2],
    );

    diagram_canvas::render(
        f,
        rows[3],
        &layout,
        &app.theme,
        app.animation_frame,
        bp.at_least(Breakpoint::Wide),
    );

    if !layout.chips.is_empty() {
        render_chips(f, rows[4], &layout.chips, &app.theme);
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[5]);
    render_key_points(f, cols[0], &architecture.key_points, app);
    render_legend(f, cols[1], &app.theme);

    if narrow {
        f.render_widget(
            Paragraph::new(NARROW_TIP)
                .style(Style::default().fg(app.theme.warning))
                .wrap(Wrap { trim: true }),
            rows[6],
        );
    }
}

fn render_unselected(f: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        selector(app),
        Line::raw(""),
        Line::styled(
            " Choose an architecture to view its diagram.",
            Style::default().fg(app.theme.muted),
        ),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn title_line(layout: &DiagramLayout, theme: &Theme) -> Line<'static> {
    let hint = if layout.animation.enabled {
        "Stop Animation"
    } else {
        "Animate Flow"
    };
    Line::from(vec![
        Span::styled(
            format!(" {} ", layout.title),
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("│ {} ", layout.caption),
            Style::default().fg(theme.foreground),
        ),
        Span::styled("│ Space: ", Style::default().fg(theme.muted)),
        Span::styled(hint, Style::default().fg(theme.warning)),
    ])
}

/// Chip text and style for one flow step
pub(crate) fn chip_span(chip: &ProgressChip, theme: &Theme) -> Span<'static> {
    match chip.state {
        FlowState::Completed => Span::styled(
            format!(" ✓ {} ", chip.label),
            Style::default().fg(theme.flow_completed),
        ),
        FlowState::Active => Span::styled(
            format!(" ▶ {} ", chip.label),
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.flow_active)
                .add_modifier(Modifier::BOLD),
        ),
        FlowState::Pending => Span::styled(
            format!(" · {} ", chip.label),
            Style::default().fg(theme.flow_pending),
        ),
    }
}

fn render_chips(f: &mut Frame, area: Rect, chips: &[ProgressChip], theme: &Theme) {
    let spans: Vec<Span> = chips.iter().map(|c| chip_span(c, theme)).collect();
    let p = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border))
                .title(" Progress "),
        );
    f.render_widget(p, area);
}

fn render_key_points(f: &mut Frame, area: Rect, points: &[String], app: &App) {
    let mut lines = vec![heading("Key Characteristics", app)];
    lines.extend(points.iter().map(|p| {
        Line::from(vec![
            Span::styled(" • ", Style::default().fg(app.theme.highlight)),
            Span::styled(p.clone(), Style::default().fg(app.theme.foreground)),
        ])
    }));
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(app.theme.border))),
        area,
    );
}

fn render_legend(f: &mut Frame, area: Rect, theme: &Theme) {
    let mut lines: Vec<Line> = NodeCategory::ALL
        .iter()
        .map(|c| {
            Line::from(vec![
                Span::styled(" ■ ", Style::default().fg(theme.node(*c))),
                Span::styled(c.label(), Style::default().fg(theme.foreground)),
            ])
        })
        .collect();
    lines.insert(
        0,
        Line::styled(
            "Components",
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ),
    );
    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(theme.border))),
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
    async fn static_view_shows_animate_hint() {
        let mut app = test_app();
        app.set_view(ActiveView::Architectures);
        app.select_system("traditional");
        app.on_resize(200);

        let screen = render_to_string(&mut app, 160, 60);
        assert!(screen.contains("Traditional Identity System"));
        assert!(screen.contains("Static View"));
        assert!(screen.contains("Animate Flow"));
        assert!(screen.contains("Key Characteristics"));
        assert!(screen.contains("Components"));
        assert!(!screen.contains("Progress"));
        assert!(!screen.contains("Tip: For the best"));
    }

    #[tokio::test]
    async fn animating_shows_chips_and_stop_hint() {
        let mut app = test_app();
        app.set_view(ActiveView::Architectures);
        app.select_system("hybrid");
        app.toggle_animation();

        let screen = render_to_string(&mut app, 160, 60);
        assert!(screen.contains("Step 1/8"));
        assert!(screen.contains("Stop Animation"));
        assert!(screen.contains("▶ Controls"));
        assert!(screen.contains("a. Check DID"));
    }

    #[tokio::test]
    async fn narrow_width_shows_tip() {
        let mut app = test_app();
        app.set_view(ActiveView::Architectures);
        app.select_system("blockchain");
        app.on_resize(80);

        let screen = render_to_string(&mut app, 160, 60);
        assert!(screen.contains("Tip: For the best"));
    }

    #[tokio::test]
    async fn comparison_selection_prompts_for_architecture() {
        let mut app = test_app();
        app.set_view(ActiveView::Architectures);
        let screen = render_to_string(&mut app, 120, 40);
        assert!(screen.contains("Choose an architecture"));
    }

    #[test]
    fn chips_mark_their_state() {
        let theme = Theme::indigo();
        let chip = ProgressChip {
            label: "Register DID".to_string(),
            state: FlowState::Completed,
        };
        assert_eq!(chip_span(&chip, &theme).content, " ✓ Register DID ");
    }
}
