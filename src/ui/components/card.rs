//! Bordered card used by the project grid.

use leptos::prelude::*;

/// Card container. `accent` paints the left border, e.g. with a health color.
///
/// ```rust,ignore
/// view! {
///     <Card class="project-card" accent="#10B981">
///         <CardHeader title="Digital Transformation".to_string()>
///             <Badge variant=BadgeVariant::Success>"🟢 85"</Badge>
///         </CardHeader>
///         <CardStat label="AI" value="65%".to_string()/>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    #[prop(default = "")] class: &'static str,
    #[prop(optional)] accent: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {class}")
    };
    let style = accent.map(|c| format!("border-left: 4px solid {c};"));

    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}

/// Title row; trailing children sit on the right (badges).
#[component]
pub fn CardHeader(title: String, children: Children) -> impl IntoView {
    view! {
        <div class="card-header">
            <h4>{title}</h4>
            {children()}
        </div>
    }
}

/// A small caption over a bold value.
#[component]
pub fn CardStat(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="card-stat">
            <small>{label}</small>
            <strong>{value}</strong>
        </div>
    }
}
