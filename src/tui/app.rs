// Application state for the TUI
//
// App owns everything the event loop mutates: the view controller (domain
// state), the advisory, modal/toast chrome and the theme. Views only ever see
// `&App`.

use crate::advisory::{FlagStore, ScreenAdvisory};
use crate::animator::AnimationTick;
use crate::config::Config;
use crate::controller::{ActiveView, ViewController, COMPARISON};
use crate::logging::LogBuffer;
use crate::model::{Catalog, SystemKind};
use crate::overlay::CloseControl;
use crate::theme::{Theme, ThemeConfig};
use crate::tui::components::Toast;
use crate::tui::modal::Modal;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Selector order on the comparison panel
const COMPARISON_SELECTOR: [&str; 4] = [COMPARISON, "traditional", "blockchain", "hybrid"];

pub struct App {
    /// Domain state: selection, animator, detail overlay
    pub controller: ViewController,
    /// Small-screen banner
    pub advisory: ScreenAdvisory,
    /// Active modal (help or use-case detail)
    pub modal: Option<Modal>,
    pub theme: Theme,
    theme_config: ThemeConfig,
    /// Captured tracing output for the logs panel
    pub log_buffer: LogBuffer,
    pub show_logs: bool,
    /// Highlighted card on the use-cases panel
    pub card_cursor: usize,
    pub toast: Option<Toast>,
    start_time: Instant,
    /// Redraw counter, drives pulsing in the diagram
    pub animation_frame: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        config: &Config,
        catalog: Arc<Catalog>,
        log_buffer: LogBuffer,
        ticks: mpsc::UnboundedSender<AnimationTick>,
        flag_store: Box<dyn FlagStore>,
    ) -> Self {
        let theme_config = ThemeConfig {
            use_theme_background: config.use_theme_background,
        };
        let mut controller = ViewController::new(catalog, ticks);
        controller.select_view(config.start_view);

        Self {
            controller,
            advisory: ScreenAdvisory::new(flag_store, &config.advisory),
            modal: None,
            theme: Theme::by_name_with_config(&config.theme, &theme_config),
            theme_config,
            log_buffer,
            show_logs: false,
            card_cursor: 0,
            toast: None,
            start_time: Instant::now(),
            animation_frame: 0,
            should_quit: false,
        }
    }

    pub fn view(&self) -> ActiveView {
        self.controller.active_view()
    }

    /// Called on every redraw tick
    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn on_animation_tick(&mut self, tick: AnimationTick) {
        self.controller.on_animation_tick(tick);
    }

    pub fn on_resize(&mut self, columns: u16) {
        self.advisory.on_resize(columns);
    }

    /// Format uptime as HH:MM:SS
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        format!(
            "{:02}:{:02}:{:02}",
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        )
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    // ─── Navigation ──────────────────────────────────────────

    pub fn set_view(&mut self, view: ActiveView) {
        self.controller.select_view(view);
        if view == ActiveView::UseCases {
            self.sync_card_cursor();
        }
    }

    pub fn next_view(&mut self) {
        self.set_view(self.view().next());
    }

    pub fn prev_view(&mut self) {
        self.set_view(self.view().prev());
    }

    pub fn select_system(&mut self, id: &str) {
        self.controller.select_system(id);
    }

    /// ←/→ on the architectures or comparison selector
    pub fn cycle_selector(&mut self, forward: bool) {
        let options: Vec<&str> = match self.view() {
            ActiveView::Architectures => SystemKind::ALL.iter().map(|k| k.id()).collect(),
            ActiveView::Comparison => COMPARISON_SELECTOR.to_vec(),
            _ => return,
        };
        let current = options
            .iter()
            .position(|id| *id == self.controller.active_system());
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(i), false) => (i + options.len() - 1) % options.len(),
        };
        self.select_system(options[next]);
    }

    pub fn toggle_animation(&mut self) {
        if self.controller.diagram().is_none() {
            self.show_toast(Toast::warning("Select an architecture first (t/b/h)"));
            return;
        }
        self.controller.toggle_animation();
    }

    // ─── Use cases ───────────────────────────────────────────

    pub fn move_card_cursor(&mut self, delta: isize) {
        let count = self.controller.catalog().use_cases().len();
        if count == 0 {
            return;
        }
        let next = (self.card_cursor as isize + delta).rem_euclid(count as isize);
        self.card_cursor = next as usize;
    }

    /// Keep the cursor on the selected use case when entering the panel
    fn sync_card_cursor(&mut self) {
        let active = self.controller.active_system();
        if let Some(idx) = self
            .controller
            .catalog()
            .use_cases()
            .iter()
            .position(|uc| uc.id == active)
        {
            self.card_cursor = idx;
        }
    }

    pub fn open_card_under_cursor(&mut self) {
        let Some(id) = self
            .controller
            .catalog()
            .use_cases()
            .get(self.card_cursor)
            .map(|uc| uc.id.clone())
        else {
            return;
        };
        if self.controller.open_use_case(&id) {
            self.modal = Some(Modal::UseCaseDetail);
        }
    }

    pub fn close_detail(&mut self, control: CloseControl) {
        self.controller.close_detail(control);
        self.modal = None;
    }

    // ─── Chrome ──────────────────────────────────────────────

    pub fn cycle_theme(&mut self) {
        let next = Theme::next_name(&self.theme.name);
        self.theme = Theme::by_name_with_config(next, &self.theme_config);
        tracing::info!(theme = next, "Theme changed");
        self.show_toast(Toast::info(format!("Theme: {}", next)));
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    pub fn dismiss_advisory(&mut self) {
        if let Err(e) = self.advisory.dismiss() {
            tracing::warn!(error = %e, "Could not persist advisory dismissal");
            self.show_toast(Toast::warning("Could not save preference"));
        }
    }
}

/// App with in-memory state and default config, for view and input tests.
/// Must run inside a tokio runtime (the animator spawns its timer there).
#[cfg(test)]
pub(crate) fn test_app() -> App {
    let (tx, _rx) = mpsc::unbounded_channel();
    let catalog = Arc::new(Catalog::builtin().expect("builtin catalog"));
    App::new(
        &Config::default(),
        catalog,
        LogBuffer::new(),
        tx,
        Box::new(crate::advisory::MemoryFlagStore::default()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn comparison_selector_cycles_through_all() {
        let mut app = test_app();
        app.set_view(ActiveView::Comparison);
        app.cycle_selector(true);
        assert_eq!(app.controller.active_system(), "traditional");
        app.cycle_selector(false);
        app.cycle_selector(false);
        assert_eq!(app.controller.active_system(), "hybrid");
    }

    #[tokio::test]
    async fn architecture_selector_skips_comparison() {
        let mut app = test_app();
        app.set_view(ActiveView::Architectures);
        app.cycle_selector(true);
        assert_eq!(app.controller.active_system(), "traditional");
        app.cycle_selector(false);
        assert_eq!(app.controller.active_system(), "hybrid");
    }

    #[tokio::test]
    async fn enter_on_card_opens_detail() {
        let mut app = test_app();
        app.set_view(ActiveView::UseCases);
        app.move_card_cursor(1);
        app.open_card_under_cursor();

        assert_eq!(app.modal, Some(Modal::UseCaseDetail));
        assert_eq!(app.controller.active_system(), "finance");

        app.close_detail(CloseControl::Body);
        assert!(app.modal.is_none());
        assert!(!app.controller.overlay().is_open());
    }

    #[tokio::test]
    async fn card_cursor_wraps() {
        let mut app = test_app();
        app.move_card_cursor(-1);
        assert_eq!(app.card_cursor, 2);
        app.move_card_cursor(1);
        assert_eq!(app.card_cursor, 0);
    }

    #[tokio::test]
    async fn theme_cycles() {
        let mut app = test_app();
        assert_eq!(app.theme.name, "Indigo");
        app.cycle_theme();
        assert_eq!(app.theme.name, "Terminal");
        assert!(app.toast.is_some());
    }

    #[tokio::test]
    async fn animating_without_architecture_warns() {
        let mut app = test_app();
        app.toggle_animation();
        let message = app.toast.as_ref().map(|t| t.message.as_str());
        assert_eq!(message, Some("Select an architecture first (t/b/h)"));
    }
}
