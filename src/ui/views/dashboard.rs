use leptos::prelude::*;

use crate::router::View;
use crate::router::page::{DashboardView, ProjectRow};
use crate::ui::components::{MetricRow, ProgressBar};

use super::{SectionHeading, ViewHeader};

#[component]
pub fn DashboardPage(view: DashboardView) -> impl IntoView {
    view! {
        <div class="view view-dashboard">
            <ViewHeader view=View::Dashboard/>
            <SectionHeading title="🎯 Key Performance Indicators"/>
            <MetricRow metrics=view.kpis highlight=true/>
            <h2 class="section-heading">"📋 Recent Projects"</h2>
            <RecentProjects rows=view.recent_projects/>
        </div>
    }
}

#[component]
fn RecentProjects(rows: Vec<ProjectRow>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Project"</th>
                    <th>"Type"</th>
                    <th>"Phase"</th>
                    <th>"Health"</th>
                    <th>"AI %"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr>
                                <td>{row.name}</td>
                                <td>{row.project_type.label()}</td>
                                <td>{row.phase.to_string()}</td>
                                <td>
                                    <ProgressBar value=row.health caption={row.health.to_string()}/>
                                </td>
                                <td>
                                    <ProgressBar
                                        value=row.ai_adoption
                                        caption={format!("{}%", row.ai_adoption)}
                                    />
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
