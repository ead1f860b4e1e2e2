//! Data provider seam.
//!
//! Rendering never reaches for data directly; it asks a [`DataProvider`].
//! The only implementation today is [`MockDataProvider`], which serves the
//! hardcoded sample projects and canned analytics. A real data source can be
//! swapped in without touching the view router or the UI.

mod mock;

pub use mock::MockDataProvider;

use crate::domain::{BenefitsChart, DomainError, EsgRow, Metric, ProjectList, RiskRow, Stage};

pub trait DataProvider: Send + Sync + std::fmt::Debug {
    /// Project records used to seed a fresh session, in creation order.
    fn projects(&self) -> Result<ProjectList, DomainError>;

    /// Dashboard KPI tiles.
    fn kpis(&self) -> Vec<Metric>;

    /// Sidebar quick stats.
    fn quick_stats(&self) -> Vec<Metric>;

    /// Planned vs. predicted benefits.
    fn benefits(&self) -> BenefitsChart;

    /// Risk intelligence table.
    fn risks(&self) -> Vec<RiskRow>;

    /// Sustainability (ESG) table.
    fn esg_scores(&self) -> Vec<EsgRow>;

    /// Methodology stage catalogue.
    fn methodology_stages(&self) -> Vec<Stage>;
}
