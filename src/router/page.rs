//! The view tree produced by one render pass.
//!
//! A [`Page`] is plain data. The UI layer turns it into HTML; tests inspect it
//! directly.

use crate::domain::{
    BenefitsChart, EsgRow, HealthTier, Metric, Phase, ProjectSummary, ProjectType, RiskRow,
    Score, Stage,
};

use super::event::{QuickReport, ReportFormat, ReportType};
use super::settings::{AiSettings, DashboardPreferences, RefreshRate, Theme};
use super::view::View;

/// Page metadata registered with the host on every pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub icon: &'static str,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "Methodology 3.0 Dashboard",
            icon: "🚀",
        }
    }
}

/// A fully rendered page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub meta: PageMeta,
    pub sidebar: Sidebar,
    /// Transient banners produced by this pass only.
    pub notices: Vec<Notice>,
    /// The selected view, or `None` when the selector matches no view.
    pub body: Option<ViewBody>,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    pub title: &'static str,
    pub caption: &'static str,
    pub nav_label: &'static str,
    pub nav: Vec<NavItem>,
    pub quick_stats: Vec<Metric>,
    pub version_caption: String,
}

/// One entry of the navigation radio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub slug: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }
}

/// Content of the single selected view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewBody {
    Dashboard(DashboardView),
    Projects(ProjectsView),
    AiAnalytics(AnalyticsView),
    Methodology(MethodologyView),
    Reports(ReportsView),
    Settings(SettingsView),
}

impl ViewBody {
    /// Which view this body belongs to.
    #[must_use]
    pub fn view(&self) -> View {
        match self {
            Self::Dashboard(_) => View::Dashboard,
            Self::Projects(_) => View::Projects,
            Self::AiAnalytics(_) => View::AiAnalytics,
            Self::Methodology(_) => View::Methodology,
            Self::Reports(_) => View::Reports,
            Self::Settings(_) => View::Settings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub kpis: Vec<Metric>,
    pub recent_projects: Vec<ProjectRow>,
}

/// A row of the recent-projects table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRow {
    pub name: String,
    pub project_type: ProjectType,
    pub phase: Phase,
    pub health: Score,
    pub ai_adoption: Score,
}

impl From<&ProjectSummary> for ProjectRow {
    fn from(p: &ProjectSummary) -> Self {
        Self {
            name: p.name.clone(),
            project_type: p.project_type,
            phase: p.phase,
            health: p.health,
            ai_adoption: p.ai_adoption,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectsView {
    pub cards: Vec<ProjectCard>,
    /// Options of the create-project type select.
    pub project_types: Vec<ProjectType>,
}

impl ProjectsView {
    /// Cards per row.
    pub const COLUMNS: usize = 3;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: String,
    pub name: String,
    pub health: Score,
    pub tier: HealthTier,
    pub project_type: ProjectType,
    pub phase: Phase,
    pub ai_adoption: Score,
    pub sustainability: Score,
}

impl ProjectCard {
    /// `Type 2 • Phase C`
    #[must_use]
    pub fn subtitle(&self) -> String {
        format!("{} • Phase {}", self.project_type, self.phase)
    }
}

impl From<&ProjectSummary> for ProjectCard {
    fn from(p: &ProjectSummary) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            health: p.health,
            tier: p.health_tier(),
            project_type: p.project_type,
            phase: p.phase,
            ai_adoption: p.ai_adoption,
            sustainability: p.sustainability,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsView {
    pub benefits: BenefitsChart,
    pub benefit_metrics: Vec<Metric>,
    pub risks: Vec<RiskRow>,
    pub esg: Vec<EsgRow>,
}

impl AnalyticsView {
    pub const TABS: [&'static str; 3] = ["🧠 Benefits", "⚠️ Risk", "🌱 Sustainability"];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodologyView {
    pub stages: Vec<Stage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportsView {
    pub quick_reports: Vec<QuickReport>,
    pub report_types: Vec<ReportType>,
    pub formats: Vec<ReportFormat>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsView {
    pub preferences: DashboardPreferences,
    pub ai: AiSettings,
    pub themes: Vec<Theme>,
    pub refresh_rates: Vec<RefreshRate>,
}
