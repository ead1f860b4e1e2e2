use leptos::prelude::*;

use crate::domain::BenefitsChart;
use crate::router::View;
use crate::router::page::AnalyticsView;
use crate::ui::components::{DataTable, MetricRow, TabList, TabPanel};

use super::ViewHeader;

const TAB_IDS: [&str; 3] = ["benefits", "risk", "sustainability"];

#[component]
pub fn AnalyticsPage(view: AnalyticsView) -> impl IntoView {
    let risk_rows = view
        .risks
        .iter()
        .map(|r| vec![r.risk.clone(), format!("{:.1}", r.probability), format!("{:.1}", r.impact)])
        .collect::<Vec<_>>();
    let esg_rows = view
        .esg
        .iter()
        .map(|r| vec![r.category.clone(), r.score.to_string(), r.target.to_string()])
        .collect::<Vec<_>>();

    view! {
        <div class="view view-ai-analytics">
            <ViewHeader view=View::AiAnalytics/>
            <TabList labels={AnalyticsView::TABS.to_vec()} ids={TAB_IDS.to_vec()}/>
            <TabPanel id="benefits">
                <h2 class="section-heading">"Benefits Prediction"</h2>
                <BarChart chart={view.benefits}/>
                <MetricRow metrics={view.benefit_metrics}/>
            </TabPanel>
            <TabPanel id="risk">
                <h2 class="section-heading">"Risk Intelligence"</h2>
                <DataTable headers={vec!["Risk", "Probability", "Impact"]} rows=risk_rows/>
            </TabPanel>
            <TabPanel id="sustainability">
                <h2 class="section-heading">"Sustainability Analytics"</h2>
                <DataTable headers={vec!["Category", "Score", "Target"]} rows=esg_rows/>
            </TabPanel>
        </div>
    }
}

/// Grouped horizontal bars, planned vs. predicted, scaled to the largest value.
#[component]
fn BarChart(chart: BenefitsChart) -> impl IntoView {
    let max = chart.max_value().max(1);
    #[allow(clippy::cast_precision_loss)]
    let width = move |value: u64| format!("width: {:.1}%;", value as f64 * 100.0 / max as f64);

    view! {
        <div class="bar-chart">
            <div class="bar-legend">
                <span class="bar bar-planned legend-swatch"></span>
                "Planned"
                <span class="bar bar-predicted legend-swatch"></span>
                "Predicted"
            </div>
            {chart
                .rows
                .into_iter()
                .map(|row| {
                    view! {
                        <div class="bar-group">
                            <div class="bar-label">{row.benefit}</div>
                            <div class="bar bar-planned" style={width(row.planned)} title={row.planned.to_string()}></div>
                            <div class="bar bar-predicted" style={width(row.predicted)} title={row.predicted.to_string()}></div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
