//! Collapsible section.

use leptos::prelude::*;

#[component]
pub fn Expander(
    /// Summary line.
    title: String,
    /// Initially open.
    #[prop(default = false)]
    expanded: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <details class="expander" open=expanded>
            <summary>{title}</summary>
            <div class="expander-body">{children()}</div>
        </details>
    }
}
