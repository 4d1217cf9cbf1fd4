//! Architecture diagram layout.
//!
//! [`layout`] is a pure projection of an [`Architecture`] and an
//! [`AnimationState`] into positioned boxes and flow lines. It knows nothing
//! about terminals; `tui::components::diagram_canvas` paints the result and
//! the `diagram` CLI command serializes it.
//!
//! Coordinates: `x` values are percentages of the canvas width (0-100 for
//! nodes authored inside the 600-unit virtual canvas), `y` values stay in the
//! authored absolute units.

use crate::animator::AnimationState;
use crate::model::{Architecture, ArchitectureNode, NodeCategory, VIRTUAL_CANVAS_WIDTH};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Visual state of a flow relative to the animation cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowState {
    Pending,
    Active,
    Completed,
}

impl FlowState {
    fn classify(index: usize, animation: AnimationState) -> Self {
        if !animation.enabled || index > animation.current_step {
            FlowState::Pending
        } else if index == animation.current_step {
            FlowState::Active
        } else {
            FlowState::Completed
        }
    }

    /// Stroke weight: 1 thin, 2 medium, 3 thick
    pub fn weight(self) -> u8 {
        match self {
            FlowState::Pending => 1,
            FlowState::Completed => 2,
            FlowState::Active => 3,
        }
    }

    pub fn dashed(self) -> bool {
        matches!(self, FlowState::Active)
    }

    pub fn pulsing(self) -> bool {
        matches!(self, FlowState::Active)
    }

    /// Marker particles sit on both endpoints of the active flow
    pub fn has_particles(self) -> bool {
        matches!(self, FlowState::Active)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeBox {
    pub id: String,
    pub label: String,
    pub category: NodeCategory,
    pub left_percent: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowLine {
    /// Position in the architecture's flow sequence
    pub index: usize,
    pub id: String,
    pub label: String,
    pub from: Point,
    pub to: Point,
    pub label_at: Point,
    pub state: FlowState,
}

/// Step indicator entry shown under the diagram while animating
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressChip {
    pub label: String,
    pub state: FlowState,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramLayout {
    pub title: String,
    pub caption: String,
    pub animation: AnimationState,
    pub nodes: Vec<NodeBox>,
    pub flows: Vec<FlowLine>,
    /// Empty while the diagram is static
    pub chips: Vec<ProgressChip>,
}

impl DiagramLayout {
    /// The flow currently under the cursor, if any
    pub fn active_flow(&self) -> Option<&FlowLine> {
        self.flows.iter().find(|f| f.state == FlowState::Active)
    }

    /// Largest `top + height` among the nodes, for sizing the canvas
    pub fn content_height(&self) -> f64 {
        self.nodes
            .iter()
            .map(|n| n.top + n.height)
            .fold(0.0, f64::max)
    }
}

/// `x / 600 * 100`
pub fn left_percent(x: f64) -> f64 {
    x / VIRTUAL_CANVAS_WIDTH * 100.0
}

/// Anchor a flow line attaches to: the node's left edge at half its height
fn anchor(node: &ArchitectureNode) -> Point {
    Point {
        x: left_percent(node.x),
        y: node.y + node.height / 2.0,
    }
}

/// `"Step {n}/{count}"` while animating, `"Static View"` otherwise
pub fn step_caption(animation: AnimationState, flow_count: usize) -> String {
    if animation.enabled {
        format!("Step {}/{}", animation.current_step + 1, flow_count)
    } else {
        "Static View".to_string()
    }
}

fn step_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+\.?\s?").expect("step number pattern is valid"))
}

/// "1. Request Access" -> "Request Access"; "5a. Check DID" keeps its suffix
pub fn strip_step_number(label: &str) -> String {
    step_number().replace(label, "").into_owned()
}

/// Project an architecture into a drawable layout
pub fn layout(architecture: &Architecture, animation: AnimationState) -> DiagramLayout {
    let active = animation
        .enabled
        .then(|| architecture.flows.get(animation.current_step))
        .flatten();

    let nodes = architecture
        .nodes
        .iter()
        .map(|node| NodeBox {
            id: node.id.clone(),
            label: node.display_name.clone(),
            category: node.category,
            left_percent: left_percent(node.x),
            top: node.y,
            width: node.width,
            height: node.height,
            highlighted: active.is_some_and(|flow| flow.from == node.id || flow.to == node.id),
        })
        .collect();

    let flows = architecture
        .flows
        .iter()
        .enumerate()
        .filter_map(|(index, flow)| {
            let (Some(src), Some(dst)) = (architecture.node(&flow.from), architecture.node(&flow.to))
            else {
                tracing::debug!(flow = %flow.id, "Skipping flow with unresolved endpoint");
                return None;
            };
            Some(FlowLine {
                index,
                id: flow.id.clone(),
                label: flow.label.clone(),
                from: anchor(src),
                to: anchor(dst),
                label_at: Point {
                    x: (left_percent(src.x) + left_percent(dst.x)) / 2.0,
                    y: (src.y + dst.y) / 2.0,
                },
                state: FlowState::classify(index, animation),
            })
        })
        .collect();

    let chips = if animation.enabled {
        architecture
            .flows
            .iter()
            .enumerate()
            .map(|(index, flow)| ProgressChip {
                label: strip_step_number(&flow.label),
                state: FlowState::classify(index, animation),
            })
            .collect()
    } else {
        Vec::new()
    };

    DiagramLayout {
        title: architecture.name.clone(),
        caption: step_caption(animation, architecture.flows.len()),
        animation,
        nodes,
        flows,
        chips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArchitectureFlow, Catalog, SystemKind};

    fn blockchain() -> Architecture {
        Catalog::builtin()
            .unwrap()
            .architecture("blockchain")
            .unwrap()
            .clone()
    }

    #[test]
    fn static_view_has_every_flow_pending() {
        let layout = layout(&blockchain(), AnimationState::STATIC);
        assert_eq!(layout.caption, "Static View");
        assert!(layout.flows.iter().all(|f| f.state == FlowState::Pending));
        assert!(layout.nodes.iter().all(|n| !n.highlighted));
        assert!(layout.chips.is_empty());
    }

    #[test]
    fn states_partition_around_the_cursor() {
        let architecture = blockchain();
        for step in 0..architecture.flows.len() {
            let layout = layout(&architecture, AnimationState::at_step(step));
            for flow in &layout.flows {
                let expected = match flow.index.cmp(&step) {
                    std::cmp::Ordering::Less => FlowState::Completed,
                    std::cmp::Ordering::Equal => FlowState::Active,
                    std::cmp::Ordering::Greater => FlowState::Pending,
                };
                assert_eq!(flow.state, expected, "step {step}, flow {}", flow.index);
            }
            assert_eq!(layout.caption, format!("Step {}/6", step + 1));
        }
    }

    #[test]
    fn active_flow_highlights_both_endpoints() {
        // f3: issuer -> wallet
        let layout = layout(&blockchain(), AnimationState::at_step(2));
        let highlighted: Vec<&str> = layout
            .nodes
            .iter()
            .filter(|n| n.highlighted)
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(highlighted, vec!["wallet", "issuer"]);
        assert_eq!(layout.active_flow().unwrap().id, "f3");
    }

    #[test]
    fn geometry_follows_the_virtual_canvas() {
        let layout = layout(&blockchain(), AnimationState::STATIC);
        let wallet = layout.nodes.iter().find(|n| n.id == "wallet").unwrap();
        assert_eq!(wallet.left_percent, 25.0);

        // f1: user (x=20, y=50, h=60) -> wallet (x=150, y=50, h=60)
        let f1 = &layout.flows[0];
        assert!((f1.from.x - 20.0 / 6.0).abs() < 1e-9);
        assert_eq!(f1.from.y, 80.0);
        assert_eq!(f1.to, Point { x: 25.0, y: 80.0 });
        assert!((f1.label_at.x - (20.0 / 6.0 + 25.0) / 2.0).abs() < 1e-9);
        assert_eq!(f1.label_at.y, 50.0);
    }

    #[test]
    fn unresolved_flows_are_skipped() {
        let mut architecture = blockchain();
        architecture.flows.insert(
            1,
            ArchitectureFlow {
                id: "ghost".to_string(),
                from: "wallet".to_string(),
                to: "nowhere".to_string(),
                label: "2. Lost".to_string(),
            },
        );
        let layout = layout(&architecture, AnimationState::at_step(1));
        assert_eq!(layout.flows.len(), 6);
        assert!(layout.flows.iter().all(|f| f.id != "ghost"));
        // The skipped flow still owns its step; nothing else is active
        assert!(layout.active_flow().is_none());
    }

    #[test]
    fn chips_strip_step_numbers() {
        let catalog = Catalog::builtin().unwrap();
        let hybrid = catalog.architecture_of(SystemKind::Hybrid).unwrap();
        let layout = layout(hybrid, AnimationState::at_step(0));
        let labels: Vec<&str> = layout.chips.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels[0], "Controls");
        assert_eq!(labels[4], "a. Check DID");
        assert_eq!(labels[7], "Manages");
        assert_eq!(layout.chips[0].state, FlowState::Active);
    }

    #[test]
    fn strip_handles_labels_without_numbers() {
        assert_eq!(strip_step_number("12 Foo"), "Foo");
        assert_eq!(strip_step_number("3.Bar"), "Bar");
        assert_eq!(strip_step_number("Manages"), "Manages");
    }

    #[test]
    fn layout_serializes_to_json() {
        let layout = layout(&blockchain(), AnimationState::at_step(0));
        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["flows"][0]["state"], "active");
        assert_eq!(json["nodes"][3]["category"], "network");
    }
}
