use leptos::prelude::*;

use crate::router::View;
use crate::router::page::ReportsView;
use crate::ui::components::{Button, ButtonVariant, Select, SelectOption};

use super::ViewHeader;

#[component]
pub fn ReportsPage(view: ReportsView) -> impl IntoView {
    let types = view
        .report_types
        .iter()
        .map(|t| SelectOption::plain(t.label()))
        .collect::<Vec<_>>();
    let formats = view
        .formats
        .iter()
        .map(|f| SelectOption::plain(f.label()))
        .collect::<Vec<_>>();

    view! {
        <div class="view view-reports">
            <ViewHeader view=View::Reports/>
            <div class="columns">
                <section>
                    <h2 class="section-heading">"Quick Reports"</h2>
                    {view
                        .quick_reports
                        .into_iter()
                        .map(|report| {
                            view! {
                                <form method="post" action={format!("/reports/quick/{}", report.slug())}>
                                    <Button full_width=true>{report.label()}</Button>
                                </form>
                            }
                        })
                        .collect_view()}
                </section>
                <section>
                    <h2 class="section-heading">"Custom Report"</h2>
                    <form class="form" method="post" action="/reports/custom">
                        <Select label="Type" name="report_type" options=types/>
                        <Select label="Format" name="format" options=formats/>
                        <Button variant=ButtonVariant::Primary>"Generate"</Button>
                    </form>
                </section>
            </div>
        </div>
    }
}
