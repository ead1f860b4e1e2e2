//! Metric tile: label, big value and an optional delta.

use leptos::prelude::*;

use crate::domain::Metric;

#[component]
pub fn MetricTile(
    /// The metric to display.
    metric: Metric,
    /// Use the gradient highlight style.
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    let classes = if highlight { "metric metric-card" } else { "metric" };

    view! {
        <div class=classes>
            <div class="metric-label">{metric.label}</div>
            <div class="metric-value">{metric.value}</div>
            {metric.delta.map(|d| view! { <div class="metric-delta">{d}</div> })}
        </div>
    }
}

/// A row of metric tiles laid out in equal columns.
#[component]
pub fn MetricRow(
    metrics: Vec<Metric>,
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    view! {
        <div class="columns">
            {metrics
                .into_iter()
                .map(|metric| view! { <MetricTile metric=metric highlight=highlight/> })
                .collect_view()}
        </div>
    }
}
