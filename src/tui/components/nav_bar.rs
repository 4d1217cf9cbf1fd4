// Nav bar component
//
// App name plus one tab per panel; the active panel is highlighted.

use crate::controller::ActiveView;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Tab labels, shortened on narrow terminals
fn tab_label(view: ActiveView, bp: Breakpoint) -> String {
    let key = view.index() + 1;
    if bp.at_least(Breakpoint::Wide) {
        format!("F{} {}", key, view.title())
    } else {
        let short = match view {
            ActiveView::Dashboard => "Dash",
            ActiveView::Architectures => "Arch",
            ActiveView::Comparison => "Compare",
            ActiveView::UseCases => "Cases",
        };
        format!("F{} {}", key, short)
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let titles: Vec<String> = ActiveView::ALL
        .iter()
        .map(|v| tab_label(*v, bp))
        .collect();

    let title = if bp.at_least(Breakpoint::Normal) {
        " ◆ Identity Systems Lens "
    } else {
        " ◆ "
    };

    let tabs = Tabs::new(titles)
        .select(app.view().index())
        .style(Style::default().fg(theme.muted))
        .highlight_style(
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("│")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(Line::styled(
                    title,
                    Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
                ))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(tabs, area);
}
