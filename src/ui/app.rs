//! Page shell and the HTML entry point.

use leptos::prelude::*;

use crate::router::Page;
use crate::ui::components::{NoticeBanner, Separator};
use crate::ui::sidebar::SidebarPanel;
use crate::ui::views::ViewContent;

/// Render a page to a complete HTML document.
#[must_use]
pub fn render_document(page: Page) -> String {
    let owner = Owner::new();
    let html = owner.with(|| view! { <App page=page/> }.to_html());
    format!("<!DOCTYPE html>{html}")
}

/// Render only the fragment for a page's body. No markup when no view matched.
#[must_use]
pub fn render_body(page: Page) -> String {
    let owner = Owner::new();
    owner.with(|| view! { <ViewContent body={page.body}/> }.to_html())
}

/// Main application component.
#[component]
pub fn App(page: Page) -> impl IntoView {
    let title = format!("{} {}", page.meta.icon, page.meta.title);

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="AI-Enhanced Project Management"/>
                <title>{title}</title>
                <link rel="stylesheet" href="/static/app.css"/>
            </head>
            <body class="layout-wide">
                <div id="app-shell">
                    <SidebarPanel sidebar={page.sidebar}/>
                    <main id="app">
                        <div class="notices">
                            {page
                                .notices
                                .into_iter()
                                .map(|notice| view! { <NoticeBanner notice=notice/> })
                                .collect_view()}
                        </div>
                        <ViewContent body={page.body}/>
                        <Separator/>
                        <footer class="caption">{page.footer}</footer>
                    </main>
                </div>
            </body>
        </html>
    }
}
