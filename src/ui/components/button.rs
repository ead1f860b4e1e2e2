//! Button component with variants.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    Primary,
    /// Secondary action button.
    #[default]
    Secondary,
    /// Subtle ghost button.
    Ghost,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Secondary => "btn btn-secondary",
            Self::Ghost => "btn btn-ghost",
        }
    }
}

/// Form submit button.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Primary full_width=true>
///         "Save Settings"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Secondary)]
    variant: ButtonVariant,
    /// Stretch to the container width.
    #[prop(default = false)]
    full_width: bool,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let classes = if full_width {
        format!("{} btn-block", variant.classes())
    } else {
        variant.classes().to_string()
    };

    view! {
        <button type="submit" class=classes>
            {children()}
        </button>
    }
}
