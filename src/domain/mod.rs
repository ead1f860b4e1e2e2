//! Domain model for the methodology dashboard.
//!
//! Everything here is plain data: project summary records, the health
//! classification, analytics fixtures and the methodology stage catalogue.
//!
//! # Modules
//!
//! - [`project`]: Project summary records, scores and health tiers
//! - [`analytics`]: KPI tiles, benefits chart, risk and ESG tables
//! - [`methodology`]: Stages and the phase alphabet

pub mod analytics;
pub mod methodology;
pub mod project;

pub use analytics::{BenefitRow, BenefitsChart, EsgRow, Metric, RiskRow};
pub use methodology::{Phase, Stage};
pub use project::{DomainError, HealthTier, ProjectList, ProjectSummary, ProjectType, Score};
