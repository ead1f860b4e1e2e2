//! User interactions fed into the view router.

use serde::{Deserialize, Serialize};

use crate::domain::ProjectType;

use super::settings::{AiSettings, DashboardPreferences};

/// A single interaction. Every interaction triggers one full render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Plain page load; nothing changes.
    Load,
    /// Sidebar navigation with the selected label or slug.
    Navigate(String),
    /// The sidebar refresh action; re-runs without changes.
    Refresh,
    /// Create-project form submission.
    CreateProject(CreateProject),
    /// One of the quick-report buttons.
    QuickReport(QuickReport),
    /// Custom report form submission.
    CustomReport(CustomReport),
    /// Save button on the dashboard settings tab.
    SaveSettings(DashboardPreferences),
    /// Any change on the AI settings tab.
    UpdateAiSettings(AiSettings),
}

/// Values of the create-project form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateProject {
    #[serde(default)]
    pub name: String,
    pub project_type: ProjectType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickReport {
    ProjectHealth,
    BenefitsAnalysis,
    RiskAssessment,
}

impl QuickReport {
    pub const ALL: [Self; 3] = [
        Self::ProjectHealth,
        Self::BenefitsAnalysis,
        Self::RiskAssessment,
    ];

    /// Button caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ProjectHealth => "📋 Project Health Report",
            Self::BenefitsAnalysis => "💰 Benefits Analysis",
            Self::RiskAssessment => "⚠️ Risk Assessment",
        }
    }

    /// Path segment used by the button's form action.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::ProjectHealth => "project_health",
            Self::BenefitsAnalysis => "benefits_analysis",
            Self::RiskAssessment => "risk_assessment",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.slug() == slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportType {
    Executive,
    Detailed,
    Dashboard,
}

impl ReportType {
    pub const ALL: [Self; 3] = [Self::Executive, Self::Detailed, Self::Dashboard];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Executive => "Executive",
            Self::Detailed => "Detailed",
            Self::Dashboard => "Dashboard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    #[serde(rename = "PDF")]
    Pdf,
    #[serde(rename = "HTML")]
    Html,
    Excel,
}

impl ReportFormat {
    pub const ALL: [Self; 3] = [Self::Pdf, Self::Html, Self::Excel];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Html => "HTML",
            Self::Excel => "Excel",
        }
    }
}

/// Values of the custom report form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CustomReport {
    pub report_type: ReportType,
    pub format: ReportFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_report_slugs() {
        for report in QuickReport::ALL {
            assert_eq!(QuickReport::from_slug(report.slug()), Some(report));
        }
        assert_eq!(QuickReport::from_slug("budget"), None);
    }

    #[test]
    fn test_report_format_uses_labels() {
        let parsed: ReportFormat = serde_json::from_str("\"PDF\"").unwrap();
        assert_eq!(parsed, ReportFormat::Pdf);
        assert_eq!(parsed.label(), "PDF");
    }
}
