//! One component per view branch.

mod analytics;
mod dashboard;
mod methodology;
mod projects;
mod reports;
mod settings;

use leptos::prelude::*;

use crate::router::{View, ViewBody};
use crate::ui::components::Separator;

pub use analytics::AnalyticsPage;
pub use dashboard::DashboardPage;
pub use methodology::MethodologyPage;
pub use projects::{ProjectCardView, ProjectsPage};
pub use reports::ReportsPage;
pub use settings::SettingsPage;

/// Render the selected view. Nothing is rendered when no view matched.
#[component]
pub fn ViewContent(body: Option<ViewBody>) -> impl IntoView {
    body.map(|body| match body {
        ViewBody::Dashboard(view) => view! { <DashboardPage view=view/> }.into_any(),
        ViewBody::Projects(view) => view! { <ProjectsPage view=view/> }.into_any(),
        ViewBody::AiAnalytics(view) => view! { <AnalyticsPage view=view/> }.into_any(),
        ViewBody::Methodology(view) => view! { <MethodologyPage view=view/> }.into_any(),
        ViewBody::Reports(view) => view! { <ReportsPage view=view/> }.into_any(),
        ViewBody::Settings(view) => view! { <SettingsPage view=view/> }.into_any(),
    })
}

/// Heading and tagline shared by every view.
#[component]
fn ViewHeader(view: View) -> impl IntoView {
    view! {
        <header class="view-header">
            <h1>{view.heading()}</h1>
            <h3 class="tagline">{view.tagline()}</h3>
        </header>
    }
}

/// Section heading with a separator above it.
#[component]
fn SectionHeading(title: &'static str) -> impl IntoView {
    view! {
        <Separator/>
        <h2 class="section-heading">{title}</h2>
    }
}
