//! UI components and layouts.
//!
//! Leptos SSR components turning a rendered [`Page`](crate::router::Page)
//! into HTML, following ShadCN-UI design principles.
//!
//! # Structure
//!
//! - [`app`]: Page shell and document rendering
//! - [`sidebar`]: Navigation sidebar
//! - [`views`]: One component per view branch
//! - [`components`]: Reusable widget components

pub mod app;
pub mod components;
pub mod sidebar;
pub mod views;

pub use app::{render_body, render_document};

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::data::MockDataProvider;
    use crate::router::{DashboardState, Event, Page, RenderContext, render};

    fn page_for(events: &[Event]) -> Page {
        let provider = MockDataProvider::new();
        let ctx = RenderContext {
            provider: &provider,
            now: NaiveDate::from_ymd_opt(2024, 3, 4)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            version: "3.0",
        };
        let mut state = DashboardState::seed(&provider, "dashboard").unwrap();
        let mut last = None;
        for event in events {
            let (next, page) = render(state, event.clone(), &ctx);
            state = next;
            last = Some(page);
        }
        last.expect("at least one event")
    }

    fn nav(view: &str) -> Event {
        Event::Navigate(view.to_string())
    }

    #[test]
    fn test_document_has_shell() {
        let html = render_document(page_for(&[Event::Load]));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Methodology 3.0 Dashboard"));
        assert!(html.contains("/static/app.css"));
        assert!(html.contains("class=\"layout-wide\""));
        assert!(html.contains("Key Performance Indicators"));
        assert!(html.contains("Digital Transformation"));
    }

    #[test]
    fn test_nav_links_for_every_view() {
        let html = render_document(page_for(&[Event::Load]));
        for slug in [
            "dashboard",
            "projects",
            "ai_analytics",
            "methodology",
            "reports",
            "settings",
        ] {
            assert!(html.contains(&format!("/view/{slug}")), "missing nav to {slug}");
        }
    }

    #[test]
    fn test_project_cards_render_identically_after_navigation() {
        let first = render_body(page_for(&[nav("Projects")]));
        let second = render_body(page_for(&[nav("Projects"), nav("Dashboard"), nav("Projects")]));
        assert_eq!(first, second);
        assert!(first.contains("#10B981"));
        assert!(first.contains("#F59E0B"));
        assert!(first.contains("Type 2 • Phase C"));
        assert!(first.contains("95/100"));
    }

    #[test]
    fn test_health_badge_carries_tier_label() {
        let body = render_body(page_for(&[nav("Projects")]));
        assert!(body.contains("title=\"Healthy\""));
        assert!(body.contains("title=\"At risk\""));
        assert!(!body.contains("title=\"Critical\""));
    }

    #[test]
    fn test_unknown_view_renders_empty_body() {
        let page = page_for(&[nav("Overview")]);
        let body = render_body(page.clone());
        assert!(!body.contains("class=\"view"), "unexpected body: {body}");
        let html = render_document(page);
        assert!(html.contains("Quick Stats"));
        assert!(!html.contains("view-dashboard"));
    }

    #[test]
    fn test_notice_is_rendered() {
        let html = render_document(page_for(&[Event::QuickReport(
            crate::router::QuickReport::ProjectHealth,
        )]));
        assert!(html.contains("notice-success"));
        assert!(html.contains("Generating report..."));
    }

    #[test]
    fn test_view_bodies_render() {
        let cases = [
            ("AI Analytics", "Benefits Prediction"),
            ("Methodology", "Stage I: AI-Powered Start-up"),
            ("Reports", "/reports/quick/project_health"),
            ("Settings", "AI Confidence Threshold: 0.70"),
        ];
        for (view, needle) in cases {
            let html = render_body(page_for(&[nav(view)]));
            assert!(html.contains(needle), "{view} body missing {needle}");
        }
    }
}
