//! Tab strip and tab panels.
//!
//! All panels are rendered; the strip links to each panel by anchor.

use leptos::prelude::*;

/// Tab strip. `ids[i]` is the anchor of the panel labelled `labels[i]`.
#[component]
pub fn TabList(labels: Vec<&'static str>, ids: Vec<&'static str>) -> impl IntoView {
    view! {
        <nav class="tabs" role="tablist">
            {labels
                .into_iter()
                .zip(ids)
                .map(|(label, id)| {
                    view! {
                        <a class="tab" role="tab" href={format!("#{id}")}>
                            {label}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
pub fn TabPanel(id: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="tab-panel" id=id role="tabpanel">
            {children()}
        </section>
    }
}
