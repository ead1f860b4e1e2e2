//! Sidebar: navigation radio, quick stats and the refresh action.

use leptos::prelude::*;

use crate::router::page::{NavItem, Sidebar};
use crate::ui::components::{Button, ButtonVariant, MetricRow, Separator};

#[component]
pub fn SidebarPanel(sidebar: Sidebar) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <h1 class="sidebar-title">{sidebar.title}</h1>
            <p class="caption">{sidebar.caption}</p>
            <Separator/>
            <nav class="nav-radio" aria-label={sidebar.nav_label}>
                <p class="field-label">{sidebar.nav_label}</p>
                {sidebar.nav.into_iter().map(|item| view! { <NavEntry item=item/> }).collect_view()}
            </nav>
            <Separator/>
            <h3>"📈 Quick Stats"</h3>
            <MetricRow metrics={sidebar.quick_stats}/>
            <form method="post" action="/refresh">
                <Button variant=ButtonVariant::Ghost>"🔄 Refresh"</Button>
            </form>
            <Separator/>
            <p class="caption">{sidebar.version_caption}</p>
        </aside>
    }
}

/// A radio-styled navigation link. The active entry is marked checked.
#[component]
fn NavEntry(item: NavItem) -> impl IntoView {
    let classes = if item.active { "nav-item active" } else { "nav-item" };
    let current = item.active.then_some("page");

    view! {
        <a class=classes href={format!("/view/{}", item.slug)} aria-current=current>
            <span class="radio-dot"></span>
            {item.label}
        </a>
    }
}
