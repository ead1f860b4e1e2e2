//! Session-local application state.

use crate::data::DataProvider;
use crate::domain::{DomainError, ProjectList};

use super::settings::{AiSettings, DashboardPreferences};
use super::view::ViewSelector;

/// Everything that survives between render passes of one session.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub selector: ViewSelector,
    pub projects: ProjectList,
    pub preferences: DashboardPreferences,
    pub ai: AiSettings,
}

impl DashboardState {
    /// Fresh state: records seeded from the provider, selector on `default_view`.
    pub fn seed(provider: &dyn DataProvider, default_view: &str) -> Result<Self, DomainError> {
        Ok(Self {
            selector: ViewSelector::new(default_view),
            projects: provider.projects()?,
            preferences: DashboardPreferences::default(),
            ai: AiSettings::default(),
        })
    }
}
