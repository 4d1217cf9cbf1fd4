//! Architecture model: the three identity architectures and the use cases
//! mapped onto them.
//!
//! Everything here is immutable after [`Catalog::builtin`] returns. The catalog
//! is parsed from the TOML document embedded in the binary and validated once;
//! a broken catalog is a build-time authoring mistake, so startup fails fast
//! instead of rendering a diagram with arrows pointing nowhere.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use thiserror::Error;

/// Embedded catalog source (architectures + use cases)
const CATALOG_TOML: &str = include_str!("catalog.toml");

/// Width of the virtual canvas node coordinates are authored against
pub const VIRTUAL_CANVAS_WIDTH: f64 = 600.0;

// ─────────────────────────────────────────────────────────────────────────────
// Enumerations
// ─────────────────────────────────────────────────────────────────────────────

/// The three identity system families being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemKind {
    Traditional,
    Blockchain,
    Hybrid,
}

impl SystemKind {
    pub const ALL: [SystemKind; 3] = [
        SystemKind::Traditional,
        SystemKind::Blockchain,
        SystemKind::Hybrid,
    ];

    /// Catalog id ("traditional", "blockchain", "hybrid")
    pub fn id(self) -> &'static str {
        match self {
            SystemKind::Traditional => "traditional",
            SystemKind::Blockchain => "blockchain",
            SystemKind::Hybrid => "hybrid",
        }
    }

    /// Short display name used on selectors and legends
    pub fn label(self) -> &'static str {
        match self {
            SystemKind::Traditional => "Traditional",
            SystemKind::Blockchain => "Blockchain",
            SystemKind::Hybrid => "Hybrid",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

impl fmt::Display for SystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Role a node plays in an architecture diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    Actor,
    Interface,
    Service,
    Storage,
    Network,
}

impl NodeCategory {
    pub const ALL: [NodeCategory; 5] = [
        NodeCategory::Actor,
        NodeCategory::Interface,
        NodeCategory::Service,
        NodeCategory::Storage,
        NodeCategory::Network,
    ];

    /// Capitalized name for the component legend
    pub fn label(self) -> &'static str {
        match self {
            NodeCategory::Actor => "Actor",
            NodeCategory::Interface => "Interface",
            NodeCategory::Service => "Service",
            NodeCategory::Storage => "Storage",
            NodeCategory::Network => "Network",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

/// A positioned box in an architecture diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureNode {
    pub id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    pub category: NodeCategory,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One labeled, directed step of an architecture's interaction sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureFlow {
    pub id: String,
    pub from: String,
    pub to: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Architecture {
    pub id: SystemKind,
    pub name: String,
    pub description: String,
    pub nodes: Vec<ArchitectureNode>,
    pub flows: Vec<ArchitectureFlow>,
    pub key_points: Vec<String>,
}

impl Architecture {
    pub fn node(&self, id: &str) -> Option<&ArchitectureNode> {
        self.nodes.iter().find(|node| node.id == id)
    }
}

/// A named metric score (0-100) attached to a use case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    /// Raw key as authored, e.g. "costEfficiency"
    pub name: String,
    pub score: u8,
}

impl Metric {
    /// "costEfficiency" -> "Cost Efficiency"
    pub fn display_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len() + 4);
        for (i, ch) in self.name.chars().enumerate() {
            if i == 0 {
                out.extend(ch.to_uppercase());
            } else if ch.is_uppercase() {
                out.push(' ');
                out.push(ch);
            } else {
                out.push(ch);
            }
        }
        out
    }

    /// Single-letter badge used on use-case cards
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UseCase {
    pub id: String,
    pub name: String,
    pub system_type: SystemKind,
    pub description: String,
    pub challenges: Vec<String>,
    pub benefits: Vec<String>,
    pub metrics: Vec<Metric>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog
// ─────────────────────────────────────────────────────────────────────────────

/// Reasons an authored catalog is rejected at load time
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("catalog is not valid TOML: {0}")]
    Parse(String),

    #[error("architecture '{0}' is defined more than once")]
    DuplicateArchitecture(SystemKind),

    #[error("architecture '{architecture}' defines node '{node}' more than once")]
    DuplicateNode {
        architecture: SystemKind,
        node: String,
    },

    #[error("flow '{flow}' in '{architecture}' references unknown node '{node}'")]
    DanglingFlow {
        architecture: SystemKind,
        flow: String,
        node: String,
    },

    #[error("use case '{0}' is defined more than once")]
    DuplicateUseCase(String),

    #[error("use case '{use_case}' scores '{metric}' at {score}, expected 0-100")]
    MetricOutOfRange {
        use_case: String,
        metric: String,
        score: u32,
    },
}

/// Immutable id -> record lookup for architectures and use cases
#[derive(Debug, Clone)]
pub struct Catalog {
    architectures: HashMap<SystemKind, Architecture>,
    use_cases: Vec<UseCase>,
    use_case_index: HashMap<String, usize>,
}

/// On-disk shape of the catalog document
#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    architectures: Vec<Architecture>,
    #[serde(default)]
    use_cases: Vec<RawUseCase>,
}

#[derive(Debug, Deserialize)]
struct RawUseCase {
    id: String,
    name: String,
    system_type: SystemKind,
    description: String,
    #[serde(default)]
    challenges: Vec<String>,
    #[serde(default)]
    benefits: Vec<String>,
    #[serde(default)]
    metrics: Vec<RawMetric>,
}

#[derive(Debug, Deserialize)]
struct RawMetric {
    name: String,
    score: u32,
}

impl Catalog {
    /// Load the catalog compiled into the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml(CATALOG_TOML)
    }

    /// Parse and validate a catalog document
    pub fn from_toml(source: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog =
            toml::from_str(source).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let use_cases = raw
            .use_cases
            .into_iter()
            .map(RawUseCase::validate)
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_parts(raw.architectures, use_cases)
    }

    /// Build a catalog from records, enforcing referential integrity
    pub fn from_parts(
        architectures: Vec<Architecture>,
        use_cases: Vec<UseCase>,
    ) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(architectures.len());
        for architecture in architectures {
            validate_architecture(&architecture)?;
            let id = architecture.id;
            if by_id.insert(id, architecture).is_some() {
                return Err(CatalogError::DuplicateArchitecture(id));
            }
        }

        let mut use_case_index = HashMap::with_capacity(use_cases.len());
        for (idx, use_case) in use_cases.iter().enumerate() {
            if use_case_index.insert(use_case.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateUseCase(use_case.id.clone()));
            }
        }

        Ok(Self {
            architectures: by_id,
            use_cases,
            use_case_index,
        })
    }

    /// Look up an architecture by its string id; `None` for anything else
    /// ("comparison", use-case ids, typos)
    pub fn architecture(&self, id: &str) -> Option<&Architecture> {
        SystemKind::from_id(id).and_then(|kind| self.architecture_of(kind))
    }

    pub fn architecture_of(&self, kind: SystemKind) -> Option<&Architecture> {
        self.architectures.get(&kind)
    }

    /// Architectures in canonical order (traditional, blockchain, hybrid)
    pub fn architectures(&self) -> impl Iterator<Item = &Architecture> {
        SystemKind::ALL
            .into_iter()
            .filter_map(|kind| self.architecture_of(kind))
    }

    pub fn use_case(&self, id: &str) -> Option<&UseCase> {
        self.use_case_index
            .get(id)
            .and_then(|&idx| self.use_cases.get(idx))
    }

    /// Use cases in authored order
    pub fn use_cases(&self) -> &[UseCase] {
        &self.use_cases
    }
}

fn validate_architecture(architecture: &Architecture) -> Result<(), CatalogError> {
    let mut node_ids = HashSet::with_capacity(architecture.nodes.len());
    for node in &architecture.nodes {
        if !node_ids.insert(node.id.as_str()) {
            return Err(CatalogError::DuplicateNode {
                architecture: architecture.id,
                node: node.id.clone(),
            });
        }
    }

    for flow in &architecture.flows {
        for endpoint in [&flow.from, &flow.to] {
            if !node_ids.contains(endpoint.as_str()) {
                return Err(CatalogError::DanglingFlow {
                    architecture: architecture.id,
                    flow: flow.id.clone(),
                    node: endpoint.clone(),
                });
            }
        }
    }

    Ok(())
}

impl RawUseCase {
    fn validate(self) -> Result<UseCase, CatalogError> {
        let metrics = self
            .metrics
            .into_iter()
            .map(|metric| match u8::try_from(metric.score) {
                Ok(score) if score <= 100 => Ok(Metric {
                    name: metric.name,
                    score,
                }),
                _ => Err(CatalogError::MetricOutOfRange {
                    use_case: self.id.clone(),
                    metric: metric.name,
                    score: metric.score,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(UseCase {
            id: self.id,
            name: self.name,
            system_type: self.system_type,
            description: self.description,
            challenges: self.challenges,
            benefits: self.benefits,
            metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().expect("embedded catalog must validate");
        assert_eq!(catalog.architectures().count(), 3);
        assert_eq!(catalog.use_cases().len(), 3);
    }

    #[test]
    fn every_flow_endpoint_resolves() {
        let catalog = Catalog::builtin().unwrap();
        for architecture in catalog.architectures() {
            for flow in &architecture.flows {
                assert!(
                    architecture.node(&flow.from).is_some(),
                    "{}: {} has unknown source {}",
                    architecture.id,
                    flow.id,
                    flow.from
                );
                assert!(
                    architecture.node(&flow.to).is_some(),
                    "{}: {} has unknown target {}",
                    architecture.id,
                    flow.id,
                    flow.to
                );
            }
        }
    }

    #[test]
    fn architecture_sizes_match_authored_data() {
        let catalog = Catalog::builtin().unwrap();
        let sizes: Vec<(usize, usize)> = catalog
            .architectures()
            .map(|a| (a.nodes.len(), a.flows.len()))
            .collect();
        assert_eq!(sizes, vec![(5, 7), (5, 6), (7, 8)]);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.architecture("comparison").is_none());
        assert!(catalog.architecture("finance").is_none());
        assert!(catalog.use_case("blockchain").is_none());
        assert!(catalog.use_case("").is_none());
    }

    #[test]
    fn use_case_lookup_by_id() {
        let catalog = Catalog::builtin().unwrap();
        let finance = catalog.use_case("finance").unwrap();
        assert_eq!(finance.name, "Financial Services KYC");
        assert_eq!(finance.system_type, SystemKind::Traditional);
        assert_eq!(finance.metrics.len(), 5);
        assert_eq!(finance.metrics[4].name, "costEfficiency");
        assert_eq!(finance.metrics[4].score, 75);
    }

    #[test]
    fn dangling_flow_is_rejected() {
        let source = r#"
[[architectures]]
id = "traditional"
name = "Broken"
description = ""
key_points = []
nodes = [{ id = "user", name = "User", category = "actor", x = 0, y = 0, width = 10, height = 10 }]
flows = [{ id = "f1", from = "user", to = "ghost", label = "1. Nowhere" }]
"#;
        let err = Catalog::from_toml(source).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DanglingFlow {
                architecture: SystemKind::Traditional,
                flow: "f1".to_string(),
                node: "ghost".to_string(),
            }
        );
    }

    #[test]
    fn duplicate_node_is_rejected() {
        let source = r#"
[[architectures]]
id = "hybrid"
name = "Dup"
description = ""
key_points = []
nodes = [
    { id = "a", name = "A", category = "actor", x = 0, y = 0, width = 10, height = 10 },
    { id = "a", name = "A again", category = "service", x = 0, y = 0, width = 10, height = 10 },
]
flows = []
"#;
        assert!(matches!(
            Catalog::from_toml(source),
            Err(CatalogError::DuplicateNode { .. })
        ));
    }

    #[test]
    fn metric_out_of_range_is_rejected() {
        let source = r#"
[[use_cases]]
id = "x"
name = "X"
system_type = "hybrid"
description = ""
metrics = [{ name = "security", score = 101 }]
"#;
        assert!(matches!(
            Catalog::from_toml(source),
            Err(CatalogError::MetricOutOfRange { score: 101, .. })
        ));
    }

    #[test]
    fn metric_display_names() {
        let metric = Metric {
            name: "costEfficiency".to_string(),
            score: 50,
        };
        assert_eq!(metric.display_name(), "Cost Efficiency");
        assert_eq!(metric.initial(), 'C');
    }
}
