//! The fixed set of views and the navigation selector.

use serde::Serialize;

/// One of the mutually exclusive page layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Dashboard,
    Projects,
    AiAnalytics,
    Methodology,
    Reports,
    Settings,
}

impl View {
    /// Every view, in sidebar order.
    pub const ALL: [Self; 6] = [
        Self::Dashboard,
        Self::Projects,
        Self::AiAnalytics,
        Self::Methodology,
        Self::Reports,
        Self::Settings,
    ];

    /// Sidebar label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Projects => "Projects",
            Self::AiAnalytics => "AI Analytics",
            Self::Methodology => "Methodology",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
        }
    }

    /// Selector value: the label lowercased with spaces replaced by `_`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Projects => "projects",
            Self::AiAnalytics => "ai_analytics",
            Self::Methodology => "methodology",
            Self::Reports => "reports",
            Self::Settings => "settings",
        }
    }

    /// Page heading.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Dashboard => "📊 Methodology 3.0 Dashboard",
            Self::Projects => "📋 Project Portfolio",
            Self::AiAnalytics => "🤖 AI Analytics Studio",
            Self::Methodology => "📚 Methodology 3.0",
            Self::Reports => "📈 Reports & Analytics",
            Self::Settings => "⚙️ Settings",
        }
    }

    /// Sub-heading under the page heading.
    #[must_use]
    pub fn tagline(self) -> &'static str {
        match self {
            Self::Dashboard => "AI-Enhanced Project Management System",
            Self::Projects => "Manage All Projects",
            Self::AiAnalytics => "Advanced AI-Powered Analysis",
            Self::Methodology => "Complete AI-Enhanced Framework",
            Self::Reports => "Generate Professional Reports",
            Self::Settings => "Configure Your Dashboard",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.slug() == slug)
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalize navigation input into a selector value.
///
/// `"AI Analytics"` and `"ai_analytics"` both become `"ai_analytics"`.
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase().replace(' ', "_")
}

/// The current-view selector.
///
/// Holds the raw normalized value, so an unrecognized view is representable
/// and simply resolves to no view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ViewSelector(String);

impl ViewSelector {
    pub fn new(input: &str) -> Self {
        Self(normalize(input))
    }

    /// The view this selector resolves to, if any.
    #[must_use]
    pub fn view(&self) -> Option<View> {
        View::from_slug(&self.0)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_active(&self, view: View) -> bool {
        self.view() == Some(view)
    }
}

impl Default for ViewSelector {
    fn default() -> Self {
        View::Dashboard.into()
    }
}

impl From<View> for ViewSelector {
    fn from(view: View) -> Self {
        Self(view.slug().to_string())
    }
}
