//! Badge component for status indicators.

use leptos::prelude::*;

use crate::domain::HealthTier;

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Default badge style.
    #[default]
    Default,
    /// Success/positive badge.
    Success,
    /// Warning badge.
    Warning,
    /// Error/destructive badge.
    Error,
}

impl BadgeVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "badge",
            Self::Success => "badge badge-success",
            Self::Warning => "badge badge-warning",
            Self::Error => "badge badge-error",
        }
    }
}

impl From<HealthTier> for BadgeVariant {
    fn from(tier: HealthTier) -> Self {
        match tier {
            HealthTier::Green => Self::Success,
            HealthTier::Amber => Self::Warning,
            HealthTier::Red => Self::Error,
        }
    }
}

/// Badge component for displaying status or labels.
///
/// `color` overrides the variant's background with an exact color value.
#[component]
pub fn Badge(
    /// Badge variant.
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Explicit background color.
    #[prop(optional)]
    color: Option<&'static str>,
    /// Hover text.
    #[prop(optional)]
    title: Option<&'static str>,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let style = color.map(|c| format!("background: {c};"));

    view! {
        <span class=variant.classes() style=style title=title>
            {children()}
        </span>
    }
}
