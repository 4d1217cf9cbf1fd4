//! Static sample data behind the dashboard and comparison panels.
//!
//! All figures are illustrative and hand-authored. Nothing here is computed
//! and nothing mutates it.

use crate::model::SystemKind;
use serde::Serialize;

/// One value per identity system family
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SystemTriple<T> {
    pub traditional: T,
    pub blockchain: T,
    pub hybrid: T,
}

impl<T: Copy> SystemTriple<T> {
    pub const fn new(traditional: T, blockchain: T, hybrid: T) -> Self {
        Self {
            traditional,
            blockchain,
            hybrid,
        }
    }

    pub fn get(&self, kind: SystemKind) -> T {
        match kind {
            SystemKind::Traditional => self.traditional,
            SystemKind::Blockchain => self.blockchain,
            SystemKind::Hybrid => self.hybrid,
        }
    }
}

/// Performance benchmark row (units vary per metric)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Benchmark {
    pub metric: &'static str,
    pub values: SystemTriple<f64>,
}

/// Market share forecast (percent) for one year
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AdoptionPoint {
    pub year: u16,
    pub share: SystemTriple<f64>,
}

/// Reported security incidents for one year
#[derive(Debug, Clone, Copy, Serialize)]
pub struct IncidentPoint {
    pub year: u16,
    pub incidents: SystemTriple<f64>,
}

/// Radar chart category scored 0-100 per system
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RadarCategory {
    pub category: &'static str,
    pub scores: SystemTriple<f64>,
}

/// Headline card on the dashboard
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OverviewCard {
    pub title: &'static str,
    pub baseline: &'static str,
    pub delta: &'static str,
    /// Whether the delta reads as an improvement
    pub favorable: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SystemSummary {
    pub system: SystemKind,
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Recommendation {
    pub sector: &'static str,
    pub approach: &'static str,
    pub rationale: &'static str,
}

pub const BENCHMARKS: &[Benchmark] = &[
    Benchmark {
        metric: "Query Response Time (ms)",
        values: SystemTriple::new(12.0, 187.0, 45.0),
    },
    Benchmark {
        metric: "Write Operation (ms)",
        values: SystemTriple::new(25.0, 210.0, 80.0),
    },
    Benchmark {
        metric: "Storage Efficiency",
        values: SystemTriple::new(85.0, 40.0, 72.0),
    },
    Benchmark {
        metric: "Breach Resistance Score",
        values: SystemTriple::new(45.0, 92.0, 80.0),
    },
    Benchmark {
        metric: "Tx Throughput (tps)",
        values: SystemTriple::new(10_000.0, 100.0, 5_000.0),
    },
];

pub const ADOPTION_FORECAST: &[AdoptionPoint] = &[
    AdoptionPoint {
        year: 2022,
        share: SystemTriple::new(75.0, 10.0, 15.0),
    },
    AdoptionPoint {
        year: 2023,
        share: SystemTriple::new(68.0, 15.0, 17.0),
    },
    AdoptionPoint {
        year: 2024,
        share: SystemTriple::new(60.0, 18.0, 22.0),
    },
    AdoptionPoint {
        year: 2025,
        share: SystemTriple::new(53.0, 20.0, 27.0),
    },
    AdoptionPoint {
        year: 2026,
        share: SystemTriple::new(45.0, 22.0, 33.0),
    },
    AdoptionPoint {
        year: 2027,
        share: SystemTriple::new(38.0, 25.0, 37.0),
    },
    AdoptionPoint {
        year: 2028,
        share: SystemTriple::new(32.0, 28.0, 40.0),
    },
];

pub const SECURITY_INCIDENTS: &[IncidentPoint] = &[
    IncidentPoint {
        year: 2020,
        incidents: SystemTriple::new(125.0, 12.0, 30.0),
    },
    IncidentPoint {
        year: 2021,
        incidents: SystemTriple::new(140.0, 14.0, 32.0),
    },
    IncidentPoint {
        year: 2022,
        incidents: SystemTriple::new(152.0, 15.0, 33.0),
    },
    IncidentPoint {
        year: 2023,
        incidents: SystemTriple::new(165.0, 18.0, 36.0),
    },
    IncidentPoint {
        year: 2024,
        incidents: SystemTriple::new(180.0, 22.0, 40.0),
    },
];

pub const RADAR_CATEGORIES: &[RadarCategory] = &[
    RadarCategory {
        category: "Security",
        scores: SystemTriple::new(60.0, 90.0, 85.0),
    },
    RadarCategory {
        category: "Privacy",
        scores: SystemTriple::new(50.0, 95.0, 80.0),
    },
    RadarCategory {
        category: "Scalability",
        scores: SystemTriple::new(90.0, 40.0, 75.0),
    },
    RadarCategory {
        category: "Interoperability",
        scores: SystemTriple::new(70.0, 30.0, 85.0),
    },
    RadarCategory {
        category: "Cost-Efficiency",
        scores: SystemTriple::new(85.0, 40.0, 70.0),
    },
    RadarCategory {
        category: "UX Simplicity",
        scores: SystemTriple::new(80.0, 40.0, 65.0),
    },
    RadarCategory {
        category: "Regulatory Compliance",
        scores: SystemTriple::new(90.0, 50.0, 80.0),
    },
    RadarCategory {
        category: "Decentralization",
        scores: SystemTriple::new(10.0, 95.0, 60.0),
    },
];

pub const OVERVIEW_CARDS: &[OverviewCard] = &[
    OverviewCard {
        title: "Security Comparison",
        baseline: "Traditional: 60%",
        delta: "Blockchain: +30% improvement",
        favorable: true,
    },
    OverviewCard {
        title: "Performance Metrics",
        baseline: "Traditional: 10K TPS",
        delta: "Blockchain: -99% slower",
        favorable: false,
    },
    OverviewCard {
        title: "Implementation Cost",
        baseline: "Traditional: $",
        delta: "Blockchain: +85% higher",
        favorable: false,
    },
];

pub const SYSTEM_SUMMARIES: &[SystemSummary] = &[
    SystemSummary {
        system: SystemKind::Traditional,
        strengths: &[
            "Mature infrastructure",
            "High transaction throughput",
            "Low operational costs",
            "Established regulatory frameworks",
        ],
        weaknesses: &[
            "Centralized security risks",
            "Limited user data control",
            "Single points of failure",
        ],
    },
    SystemSummary {
        system: SystemKind::Blockchain,
        strengths: &[
            "Decentralized architecture",
            "Self-sovereign identity control",
            "Tamper-evident records",
            "Enhanced privacy capabilities",
        ],
        weaknesses: &[
            "Limited transaction throughput",
            "Higher implementation costs",
            "Regulatory compliance challenges",
        ],
    },
    SystemSummary {
        system: SystemKind::Hybrid,
        strengths: &[
            "Balanced security approach",
            "Improved interoperability",
            "Enhanced privacy with performance",
            "Better regulatory adaptability",
        ],
        weaknesses: &[
            "Integration complexity",
            "Higher initial development costs",
            "More complex governance model",
        ],
    },
];

pub const RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation {
        sector: "Healthcare Sector",
        approach: "Hybrid System",
        rationale: "Balance privacy requirements with interoperability needs while maintaining regulatory compliance.",
    },
    Recommendation {
        sector: "Financial Services",
        approach: "Traditional with Blockchain elements",
        rationale: "Maintain regulatory compliance while enhancing security for specific transaction types.",
    },
    Recommendation {
        sector: "Government ID",
        approach: "Blockchain with central backup",
        rationale: "Leverage transparency and immutability while maintaining sovereign control of identity infrastructure.",
    },
];

/// Running totals for the stacked adoption chart, bottom layer first
/// (traditional, traditional+blockchain, all three)
pub fn stacked_adoption() -> Vec<(f64, [f64; 3])> {
    ADOPTION_FORECAST
        .iter()
        .map(|point| {
            let t = point.share.traditional;
            let b = t + point.share.blockchain;
            let h = b + point.share.hybrid;
            (f64::from(point.year), [t, b, h])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adoption_shares_sum_to_one_hundred() {
        for point in ADOPTION_FORECAST {
            let total = point.share.traditional + point.share.blockchain + point.share.hybrid;
            assert_eq!(total, 100.0, "year {}", point.year);
        }
    }

    #[test]
    fn stacked_adoption_tops_out_at_one_hundred() {
        let stacked = stacked_adoption();
        assert_eq!(stacked.len(), ADOPTION_FORECAST.len());
        assert_eq!(stacked[0], (2022.0, [75.0, 85.0, 100.0]));
        assert!(stacked.iter().all(|(_, layers)| layers[2] == 100.0));
    }

    #[test]
    fn radar_scores_are_percentages() {
        assert_eq!(RADAR_CATEGORIES.len(), 8);
        for category in RADAR_CATEGORIES {
            for kind in SystemKind::ALL {
                let score = category.scores.get(kind);
                assert!((0.0..=100.0).contains(&score), "{}", category.category);
            }
        }
    }

    #[test]
    fn every_system_has_a_summary() {
        for kind in SystemKind::ALL {
            let summary = SYSTEM_SUMMARIES.iter().find(|s| s.system == kind).unwrap();
            assert!(!summary.strengths.is_empty());
            assert!(!summary.weaknesses.is_empty());
        }
    }
}
