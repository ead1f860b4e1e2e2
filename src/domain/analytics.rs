//! KPI tiles and canned analytics tables.

use serde::Serialize;

/// A metric tile: label, value and an optional delta caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub delta: Option<String>,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            delta: None,
        }
    }

    #[must_use]
    pub fn with_delta(mut self, delta: impl Into<String>) -> Self {
        self.delta = Some(delta.into());
        self
    }
}

/// One benefit category of the benefits chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenefitRow {
    pub benefit: String,
    pub planned: u64,
    pub predicted: u64,
}

/// Planned vs. predicted benefits, one bar pair per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BenefitsChart {
    pub rows: Vec<BenefitRow>,
}

impl BenefitsChart {
    pub fn total_planned(&self) -> u64 {
        self.rows.iter().map(|r| r.planned).sum()
    }

    pub fn total_predicted(&self) -> u64 {
        self.rows.iter().map(|r| r.predicted).sum()
    }

    /// Planned value not covered by the prediction. Never negative.
    pub fn value_at_risk(&self) -> u64 {
        self.total_planned().saturating_sub(self.total_predicted())
    }

    /// Largest single bar, used to scale the chart.
    pub fn max_value(&self) -> u64 {
        self.rows
            .iter()
            .map(|r| r.planned.max(r.predicted))
            .max()
            .unwrap_or(0)
    }

    /// The three summary tiles under the chart.
    pub fn summary_metrics(&self) -> Vec<Metric> {
        vec![
            Metric::new("Total Planned", format_currency(self.total_planned())),
            Metric::new("Predicted", format_currency(self.total_predicted())),
            Metric::new("Value at Risk", format_currency(self.value_at_risk())),
        ]
    }
}

/// A row of the risk intelligence table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskRow {
    pub risk: String,
    pub probability: f64,
    pub impact: f64,
}

/// A row of the sustainability (ESG) table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EsgRow {
    pub category: String,
    pub score: u8,
    pub target: u8,
}

/// Format a whole-dollar amount with thousands separators: `$255,000`.
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> BenefitsChart {
        BenefitsChart {
            rows: vec![
                BenefitRow {
                    benefit: "A".into(),
                    planned: 100,
                    predicted: 80,
                },
                BenefitRow {
                    benefit: "B".into(),
                    planned: 50,
                    predicted: 60,
                },
            ],
        }
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(999), "$999");
        assert_eq!(format_currency(1000), "$1,000");
        assert_eq!(format_currency(255_000), "$255,000");
        assert_eq!(format_currency(1_234_567), "$1,234,567");
    }

    #[test]
    fn test_chart_totals() {
        let chart = chart();
        assert_eq!(chart.total_planned(), 150);
        assert_eq!(chart.total_predicted(), 140);
        assert_eq!(chart.value_at_risk(), 10);
        assert_eq!(chart.max_value(), 100);
    }

    #[test]
    fn test_value_at_risk_saturates() {
        let chart = BenefitsChart {
            rows: vec![BenefitRow {
                benefit: "Over".into(),
                planned: 10,
                predicted: 20,
            }],
        };
        assert_eq!(chart.value_at_risk(), 0);
    }

    #[test]
    fn test_empty_chart() {
        let chart = BenefitsChart::default();
        assert_eq!(chart.max_value(), 0);
        assert_eq!(chart.summary_metrics()[0].value, "$0");
    }
}
