//! Progress column used inside tables.

use leptos::prelude::*;

use crate::domain::Score;

#[component]
pub fn ProgressBar(
    /// Filled fraction, 0–100.
    value: Score,
    /// Text shown beside the bar.
    caption: String,
) -> impl IntoView {
    let width = format!("width: {}%;", value.value());

    view! {
        <div class="progress">
            <div class="progress-track">
                <div class="progress-fill" style=width></div>
            </div>
            <span class="progress-caption">{caption}</span>
        </div>
    }
}
