//! Project summary records.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::methodology::Phase;

/// Errors raised while building a project list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Two records share the same id.
    #[error("duplicate project id: {0}")]
    DuplicateId(String),

    /// A record has an empty (or whitespace-only) name.
    #[error("project {0} has an empty name")]
    EmptyName(String),
}

/// A 0–100 score. Construction clamps out-of-range values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    /// Upper bound of every score.
    pub const MAX: u8 = 100;

    /// Create a score, clamping into `0..=100`.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, i64::from(Self::MAX)) as u8)
    }

    /// The raw value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Three-tier health classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthTier {
    /// Health of 80 and above.
    Green,
    /// Health between 60 and 79.
    Amber,
    /// Health below 60.
    Red,
}

impl HealthTier {
    /// Lower bound of the green tier.
    pub const GREEN_THRESHOLD: u8 = 80;
    /// Lower bound of the amber tier.
    pub const AMBER_THRESHOLD: u8 = 60;

    /// Classify a health score.
    #[must_use]
    pub fn classify(health: Score) -> Self {
        match health.value() {
            h if h >= Self::GREEN_THRESHOLD => Self::Green,
            h if h >= Self::AMBER_THRESHOLD => Self::Amber,
            _ => Self::Red,
        }
    }

    /// Badge background color.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Green => "#10B981",
            Self::Amber => "#F59E0B",
            Self::Red => "#EF4444",
        }
    }

    /// Status icon shown next to the score.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Green => "🟢",
            Self::Amber => "🟡",
            Self::Red => "🔴",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Green => "Healthy",
            Self::Amber => "At risk",
            Self::Red => "Critical",
        }
    }
}

/// Project office type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    #[serde(rename = "Type 1")]
    Type1,
    #[serde(rename = "Type 2")]
    Type2,
    #[serde(rename = "Type 3")]
    Type3,
}

impl ProjectType {
    /// All project types, in select-box order.
    pub const ALL: [Self; 3] = [Self::Type1, Self::Type2, Self::Type3];

    /// Display label, also the form value.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Type1 => "Type 1",
            Self::Type2 => "Type 2",
            Self::Type3 => "Type 3",
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An in-memory, unpersisted project entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub phase: Phase,
    pub health: Score,
    pub ai_adoption: Score,
    pub sustainability: Score,
    /// Creation date (`YYYY-MM-DD`).
    pub created: String,
}

impl ProjectSummary {
    /// Health tier of this project.
    #[must_use]
    pub fn health_tier(&self) -> HealthTier {
        HealthTier::classify(self.health)
    }
}

/// Ordered sequence of project records with unique ids.
///
/// Insertion order is creation order and is never rearranged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProjectList {
    records: Vec<ProjectSummary>,
}

impl ProjectList {
    /// Build a list, rejecting duplicate ids and empty names.
    pub fn new(records: Vec<ProjectSummary>) -> Result<Self, DomainError> {
        let mut seen = std::collections::HashSet::with_capacity(records.len());
        for record in &records {
            if record.name.trim().is_empty() {
                return Err(DomainError::EmptyName(record.id.clone()));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(DomainError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the list holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProjectSummary> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ProjectList {
    type Item = &'a ProjectSummary;
    type IntoIter = std::slice::Iter<'a, ProjectSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str) -> ProjectSummary {
        ProjectSummary {
            id: id.to_string(),
            name: name.to_string(),
            project_type: ProjectType::Type1,
            phase: Phase::A,
            health: Score::new(50),
            ai_adoption: Score::new(50),
            sustainability: Score::new(50),
            created: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_health_tier_boundaries() {
        assert_eq!(HealthTier::classify(Score::new(80)), HealthTier::Green);
        assert_eq!(HealthTier::classify(Score::new(79)), HealthTier::Amber);
        assert_eq!(HealthTier::classify(Score::new(60)), HealthTier::Amber);
        assert_eq!(HealthTier::classify(Score::new(59)), HealthTier::Red);
        assert_eq!(HealthTier::classify(Score::new(100)), HealthTier::Green);
        assert_eq!(HealthTier::classify(Score::new(0)), HealthTier::Red);
    }

    #[test]
    fn test_health_tier_every_score() {
        for h in 0..=100 {
            let tier = HealthTier::classify(Score::new(h));
            let expected = if h >= 80 {
                HealthTier::Green
            } else if h >= 60 {
                HealthTier::Amber
            } else {
                HealthTier::Red
            };
            assert_eq!(tier, expected, "health {h}");
        }
    }

    #[test]
    fn test_score_clamps() {
        assert_eq!(Score::new(-5).value(), 0);
        assert_eq!(Score::new(250).value(), 100);
        assert_eq!(Score::new(42).value(), 42);
    }

    #[test]
    fn test_score_deserialize_clamps() {
        let score: Score = serde_json::from_str("140").unwrap();
        assert_eq!(score.value(), 100);
    }

    #[test]
    fn test_project_list_rejects_duplicates() {
        let err = ProjectList::new(vec![record("P-1", "One"), record("P-1", "Two")]).unwrap_err();
        assert_eq!(err, DomainError::DuplicateId("P-1".to_string()));
    }

    #[test]
    fn test_project_list_rejects_empty_name() {
        let err = ProjectList::new(vec![record("P-1", "  ")]).unwrap_err();
        assert_eq!(err, DomainError::EmptyName("P-1".to_string()));
    }

    #[test]
    fn test_project_list_keeps_order() {
        let list = ProjectList::new(vec![record("B", "Second"), record("A", "First")]).unwrap();
        let ids: Vec<_> = list.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
    }

    #[test]
    fn test_project_type_serde_uses_labels() {
        let json = serde_json::to_string(&ProjectType::Type2).unwrap();
        assert_eq!(json, "\"Type 2\"");
        let parsed: ProjectType = serde_json::from_str("\"Type 3\"").unwrap();
        assert_eq!(parsed, ProjectType::Type3);
    }
}
