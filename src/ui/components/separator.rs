//! Horizontal rule between page sections.

use leptos::prelude::*;

#[component]
pub fn Separator() -> impl IntoView {
    view! { <hr class="separator"/> }
}
