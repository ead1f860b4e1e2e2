//! Hardcoded sample data.

use crate::domain::{
    BenefitRow, BenefitsChart, DomainError, EsgRow, Metric, Phase, ProjectList, ProjectSummary,
    ProjectType, RiskRow, Score, Stage,
};

use super::DataProvider;

/// Serves the fixed sample projects and fabricated analytics.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDataProvider;

impl MockDataProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    name: &str,
    project_type: ProjectType,
    phase: Phase,
    health: i64,
    ai_adoption: i64,
    sustainability: i64,
    created: &str,
) -> ProjectSummary {
    ProjectSummary {
        id: id.to_string(),
        name: name.to_string(),
        project_type,
        phase,
        health: Score::new(health),
        ai_adoption: Score::new(ai_adoption),
        sustainability: Score::new(sustainability),
        created: created.to_string(),
    }
}

impl DataProvider for MockDataProvider {
    fn projects(&self) -> Result<ProjectList, DomainError> {
        ProjectList::new(vec![
            project(
                "PROJ-001",
                "Digital Transformation",
                ProjectType::Type2,
                Phase::C,
                85,
                65,
                78,
                "2024-01-10",
            ),
            project(
                "PROJ-002",
                "AI Implementation",
                ProjectType::Type1,
                Phase::B,
                72,
                80,
                85,
                "2024-01-05",
            ),
            project(
                "PROJ-003",
                "Sustainability Initiative",
                ProjectType::Type3,
                Phase::A,
                90,
                45,
                95,
                "2024-01-15",
            ),
        ])
    }

    fn kpis(&self) -> Vec<Metric> {
        vec![
            Metric::new("Total Projects", "3").with_delta("+1"),
            Metric::new("Active Projects", "3").with_delta("100%"),
            Metric::new("AI Adoption", "63%").with_delta("+8%"),
            Metric::new("Sustainability", "86/100").with_delta("+12"),
        ]
    }

    fn quick_stats(&self) -> Vec<Metric> {
        vec![
            Metric::new("Projects", "3").with_delta("+1"),
            Metric::new("Avg Health", "82").with_delta("+5"),
        ]
    }

    fn benefits(&self) -> BenefitsChart {
        let row = |benefit: &str, planned, predicted| BenefitRow {
            benefit: benefit.to_string(),
            planned,
            predicted,
        };
        BenefitsChart {
            rows: vec![
                row("Cost Reduction", 50_000, 45_000),
                row("Efficiency", 75_000, 70_000),
                row("Quality", 30_000, 28_000),
                row("Revenue", 100_000, 85_000),
            ],
        }
    }

    fn risks(&self) -> Vec<RiskRow> {
        let row = |risk: &str, probability, impact| RiskRow {
            risk: risk.to_string(),
            probability,
            impact,
        };
        vec![
            row("Schedule Delay", 0.7, 0.8),
            row("Budget Overrun", 0.4, 0.9),
            row("Technical Issues", 0.6, 0.7),
            row("Stakeholder", 0.3, 0.6),
        ]
    }

    fn esg_scores(&self) -> Vec<EsgRow> {
        let row = |category: &str, score, target| EsgRow {
            category: category.to_string(),
            score,
            target,
        };
        vec![
            row("Environmental", 75, 85),
            row("Social", 82, 85),
            row("Governance", 88, 90),
        ]
    }

    fn methodology_stages(&self) -> Vec<Stage> {
        vec![
            Stage {
                id: "I",
                name: "AI-Powered Start-up",
                phases: vec![Phase::A, Phase::B, Phase::W],
            },
            Stage {
                id: "II",
                name: "Intelligent Execution",
                phases: vec![Phase::C, Phase::D, Phase::H],
            },
            Stage {
                id: "III",
                name: "Predictive Benefits Realization",
                phases: Vec::new(),
            },
            Stage {
                id: "IV",
                name: "AI-Guided Close & Learning",
                phases: Vec::new(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HealthTier;

    #[test]
    fn test_seed_has_three_projects_in_order() {
        let projects = MockDataProvider.projects().unwrap();
        assert_eq!(projects.len(), 3);
        let ids: Vec<_> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["PROJ-001", "PROJ-002", "PROJ-003"]);
    }

    #[test]
    fn test_seed_health_tiers() {
        let projects = MockDataProvider.projects().unwrap();
        let tiers: Vec<_> = projects.iter().map(ProjectSummary::health_tier).collect();
        assert_eq!(
            tiers,
            vec![HealthTier::Green, HealthTier::Amber, HealthTier::Green]
        );
    }

    #[test]
    fn test_benefits_has_four_non_negative_categories() {
        let chart = MockDataProvider.benefits();
        assert_eq!(chart.rows.len(), 4);
        // Unsigned amounts: non-negativity holds by construction.
        assert!(chart.rows.iter().all(|r| r.planned > 0 && r.predicted > 0));
        assert_eq!(chart.total_planned(), 255_000);
        assert_eq!(chart.total_predicted(), 228_000);
        assert_eq!(chart.value_at_risk(), 27_000);
    }

    #[test]
    fn test_risk_values_are_probabilities() {
        for row in MockDataProvider.risks() {
            assert!((0.0..=1.0).contains(&row.probability));
            assert!((0.0..=1.0).contains(&row.impact));
        }
    }

    #[test]
    fn test_stage_catalogue() {
        let stages = MockDataProvider.methodology_stages();
        let ids: Vec<_> = stages.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["I", "II", "III", "IV"]);
        assert_eq!(stages[0].phases, vec![Phase::A, Phase::B, Phase::W]);
        assert!(stages[3].phases.is_empty());
    }
}
