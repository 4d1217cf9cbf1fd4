// Status bar component
//
// Footer line: active panel, selection, animation caption, theme, uptime.
// Wide terminals also carry the project name and its research attribution
// on the top border.

use crate::diagram::strip_step_number;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const PROJECT_TITLE: &str = "Identity Systems Visualizer";
pub const ATTRIBUTION: &str = "developed from thesis research results";

/// Caption for the status bar's animation slot: the step counter, plus the
/// name of the flow under the cursor while animating
fn animation_caption(app: &App) -> String {
    let Some(layout) = app.controller.diagram() else {
        return "·".to_string();
    };
    if !layout.animation.enabled {
        return layout.caption;
    }
    match layout.active_flow() {
        Some(flow) => format!("▶ {}: {}", layout.caption, strip_step_number(&flow.label)),
        None => format!("▶ {}", layout.caption),
    }
}

fn attribution_line(app: &App) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {} ", PROJECT_TITLE),
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· {} ", ATTRIBUTION),
            Style::default().fg(app.theme.muted),
        ),
    ])
    .right_aligned()
}

/// Adapts to terminal width:
/// - Wide: labels, theme, key hints and the attribution
/// - Narrow: values only
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let view = app.view().title();
    let system = app.controller.active_system();
    let caption = animation_caption(app);
    let wide = bp.at_least(Breakpoint::Wide);

    let status_text = if wide {
        format!(
            " {} │ View: {} │ Selection: {} │ {} │ Theme: {} │ L logs · ? help · q quit",
            app.uptime(),
            view,
            system,
            caption,
            app.theme.name,
        )
    } else {
        format!(" {} │ {} │ {} │ {}", app.uptime(), view, system, caption)
    };

    let mut block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(app.theme.border));
    if wide {
        block = block.title_top(attribution_line(app));
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(block);

    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ActiveView;
    use crate::tui::app::test_app;
    use crate::tui::views::render_to_string;

    #[tokio::test]
    async fn caption_names_the_active_flow() {
        let mut app = test_app();
        app.set_view(ActiveView::Architectures);
        app.select_system("blockchain");
        assert_eq!(animation_caption(&app), "Static View");

        app.toggle_animation();
        assert_eq!(animation_caption(&app), "▶ Step 1/6: Controls");
    }

    #[tokio::test]
    async fn caption_placeholder_without_diagram() {
        let app = test_app();
        assert_eq!(animation_caption(&app), "·");
    }

    #[tokio::test]
    async fn wide_footer_carries_attribution() {
        let mut app = test_app();
        let screen = render_to_string(&mut app, 200, 50);
        assert!(screen.contains(PROJECT_TITLE));
        assert!(screen.contains(ATTRIBUTION));

        let screen = render_to_string(&mut app, 80, 50);
        assert!(!screen.contains(ATTRIBUTION));
    }
}
