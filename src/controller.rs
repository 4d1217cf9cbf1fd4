//! View controller: selection state plus the rules that tie the animator and
//! the detail overlay to it.
//!
//! The TUI owns exactly one controller and passes it to views by shared
//! reference. Every mutation goes through a method here so the cross-panel
//! rules hold no matter which key triggered them:
//!
//! - selecting a different system rewinds the animator
//! - leaving the architectures panel stops the animator
//! - opening a use case selects it and shows its overlay in one step

use crate::animator::{AnimationTick, FlowAnimator};
use crate::diagram::{self, DiagramLayout};
use crate::model::{Catalog, SystemKind, UseCase};
use crate::overlay::{CloseControl, DetailOverlay};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Pseudo-system id meaning "all three systems"
pub const COMPARISON: &str = "comparison";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Architectures,
    Comparison,
    UseCases,
}

impl ActiveView {
    pub const ALL: [ActiveView; 4] = [
        ActiveView::Dashboard,
        ActiveView::Architectures,
        ActiveView::Comparison,
        ActiveView::UseCases,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActiveView::Dashboard => "dashboard",
            ActiveView::Architectures => "architectures",
            ActiveView::Comparison => "comparison",
            ActiveView::UseCases => "usecases",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ActiveView::Dashboard => "Dashboard",
            ActiveView::Architectures => "System Architectures",
            ActiveView::Comparison => "Comparison",
            ActiveView::UseCases => "Use Cases",
        }
    }

    /// Parse a config value; unknown names yield `None`
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s || (s == "use_cases" && *v == ActiveView::UseCases))
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which panel is shown and what it is focused on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub active_view: ActiveView,
    /// Architecture id, [`COMPARISON`], or a use-case id
    pub active_system: String,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            active_view: ActiveView::Dashboard,
            active_system: COMPARISON.to_string(),
        }
    }
}

pub struct ViewController {
    catalog: Arc<Catalog>,
    selection: SelectionState,
    animator: FlowAnimator,
    overlay: DetailOverlay,
}

impl ViewController {
    pub fn new(catalog: Arc<Catalog>, ticks: mpsc::UnboundedSender<AnimationTick>) -> Self {
        Self {
            catalog,
            selection: SelectionState::default(),
            animator: FlowAnimator::new(ticks),
            overlay: DetailOverlay::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_view(&self) -> ActiveView {
        self.selection.active_view
    }

    pub fn active_system(&self) -> &str {
        &self.selection.active_system
    }

    #[cfg(test)]
    pub fn animation(&self) -> crate::animator::AnimationState {
        self.animator.state()
    }

    pub fn overlay(&self) -> &DetailOverlay {
        &self.overlay
    }

    pub fn select_view(&mut self, view: ActiveView) {
        if view == self.selection.active_view {
            return;
        }
        if self.selection.active_view == ActiveView::Architectures {
            // Diagram is torn down with the panel
            self.animator.stop();
        }
        tracing::debug!(from = self.selection.active_view.as_str(), to = view.as_str(), "View changed");
        self.selection.active_view = view;
    }

    pub fn select_system(&mut self, id: &str) {
        if id == self.selection.active_system {
            return;
        }
        let flow_count = self
            .catalog
            .architecture(id)
            .map(|a| a.flows.len())
            .unwrap_or(0);
        self.selection.active_system = id.to_string();
        self.animator.retarget(flow_count);
        tracing::debug!(system = id, flows = flow_count, "System selected");
    }

    /// Returns the new `enabled` value
    pub fn toggle_animation(&mut self) -> bool {
        self.animator.toggle()
    }

    pub fn on_animation_tick(&mut self, tick: AnimationTick) -> bool {
        self.animator.on_animation_tick(tick)
    }

    /// Select a use case and show its detail overlay. Unknown ids change
    /// nothing. Returns whether the overlay opened.
    pub fn open_use_case(&mut self, id: &str) -> bool {
        let Some(use_case) = self.catalog.use_case(id).cloned() else {
            tracing::warn!(id, "Unknown use case");
            return false;
        };
        self.select_system(id);
        self.overlay.open(use_case);
        true
    }

    pub fn close_detail(&mut self, control: CloseControl) {
        if self.overlay.is_open() {
            tracing::debug!(?control, "Detail overlay closed");
        }
        self.overlay.close();
    }

    /// Layout for the architectures panel; `None` unless an architecture is
    /// selected
    pub fn diagram(&self) -> Option<DiagramLayout> {
        self.catalog
            .architecture(&self.selection.active_system)
            .map(|a| diagram::layout(a, self.animator.state()))
    }

    /// Systems plotted on the radar chart
    pub fn radar_series(&self) -> Vec<SystemKind> {
        let system = self.selection.active_system.as_str();
        if system == COMPARISON {
            SystemKind::ALL.to_vec()
        } else {
            SystemKind::from_id(system).into_iter().collect()
        }
    }

    /// Use case driving the analysis panel
    pub fn selected_use_case(&self) -> Option<&UseCase> {
        self.catalog.use_case(&self.selection.active_system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::{AnimationState, STEP_PERIOD};
    use crate::diagram::FlowState;
    use tokio::time;

    fn controller() -> (ViewController, mpsc::UnboundedReceiver<AnimationTick>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let catalog = Arc::new(Catalog::builtin().unwrap());
        (ViewController::new(catalog, tx), rx)
    }

    #[test]
    fn defaults_to_dashboard_and_comparison() {
        let selection = SelectionState::default();
        assert_eq!(selection.active_view, ActiveView::Dashboard);
        assert_eq!(selection.active_system, COMPARISON);
    }

    #[test]
    fn view_cycling_wraps() {
        assert_eq!(ActiveView::UseCases.next(), ActiveView::Dashboard);
        assert_eq!(ActiveView::Dashboard.prev(), ActiveView::UseCases);
        assert_eq!(ActiveView::parse("UseCases"), Some(ActiveView::UseCases));
        assert_eq!(ActiveView::parse("nope"), None);
    }

    #[tokio::test]
    async fn blockchain_diagram_matches_catalog() {
        let (mut controller, _rx) = controller();
        controller.select_view(ActiveView::Architectures);
        controller.select_system("blockchain");

        let layout = controller.diagram().unwrap();
        let ids: Vec<&str> = layout.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["user", "wallet", "verifier", "blockchain", "issuer"]);
        let labels: Vec<&str> = layout.flows.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "1. Controls",
                "2. Register DID",
                "3. Issue Credential",
                "4. Present Proof",
                "5. Verify Credential",
                "6. Confirm Validity",
            ]
        );
    }

    #[tokio::test]
    async fn comparison_has_no_diagram() {
        let (controller, _rx) = controller();
        assert!(controller.diagram().is_none());
        assert_eq!(controller.radar_series(), SystemKind::ALL.to_vec());
    }

    #[tokio::test]
    async fn radar_follows_selection() {
        let (mut controller, _rx) = controller();
        controller.select_system("hybrid");
        assert_eq!(controller.radar_series(), vec![SystemKind::Hybrid]);
        controller.select_system("finance");
        assert!(controller.radar_series().is_empty());
    }

    #[tokio::test]
    async fn opening_a_use_case_selects_and_shows_it() {
        let (mut controller, _rx) = controller();
        controller.select_view(ActiveView::UseCases);
        assert!(controller.open_use_case("finance"));

        assert_eq!(controller.active_system(), "finance");
        assert!(controller.overlay().is_open());
        assert_eq!(
            controller.overlay().content().unwrap().name,
            "Financial Services KYC"
        );
        assert_eq!(controller.selected_use_case().unwrap().id, "finance");
    }

    #[tokio::test]
    async fn either_close_control_closes() {
        let (mut controller, _rx) = controller();
        for control in [CloseControl::Header, CloseControl::Body] {
            controller.open_use_case("healthcare");
            controller.close_detail(control);
            assert!(!controller.overlay().is_open());
            assert!(controller.overlay().content().is_none());
        }
    }

    #[tokio::test]
    async fn unknown_use_case_changes_nothing() {
        let (mut controller, _rx) = controller();
        assert!(!controller.open_use_case("retail"));
        assert_eq!(controller.active_system(), COMPARISON);
        assert!(!controller.overlay().is_open());
    }

    #[tokio::test(start_paused = true)]
    async fn switching_architecture_while_running_rewinds() {
        let (mut controller, mut rx) = controller();
        controller.select_view(ActiveView::Architectures);
        controller.select_system("traditional");
        controller.toggle_animation();

        for _ in 0..3 {
            let tick = rx.recv().await.unwrap();
            controller.on_animation_tick(tick);
        }
        assert_eq!(controller.animation().current_step, 3);

        controller.select_system("hybrid");
        assert_eq!(controller.animation(), AnimationState::at_step(0));

        // Anything queued by the old timer is ignored
        while let Ok(tick) = rx.try_recv() {
            assert!(!controller.on_animation_tick(tick));
        }

        let tick = rx.recv().await.unwrap();
        assert!(controller.on_animation_tick(tick));
        let layout = controller.diagram().unwrap();
        assert_eq!(layout.caption, "Step 2/8");
        assert_eq!(layout.flows[1].state, FlowState::Active);
    }

    #[tokio::test(start_paused = true)]
    async fn leaving_architectures_stops_animation() {
        let (mut controller, mut rx) = controller();
        controller.select_view(ActiveView::Architectures);
        controller.select_system("blockchain");
        controller.toggle_animation();
        let tick = rx.recv().await.unwrap();
        controller.on_animation_tick(tick);

        controller.select_view(ActiveView::Comparison);
        assert_eq!(controller.animation(), AnimationState::STATIC);

        time::sleep(STEP_PERIOD * 2).await;
        while let Ok(tick) = rx.try_recv() {
            assert!(!controller.on_animation_tick(tick));
        }
    }
}
