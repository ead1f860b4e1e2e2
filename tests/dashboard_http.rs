use axum::http::StatusCode;
use axum_test::TestServer;
use methodology_dashboard::AppState;
use methodology_dashboard::config::AppConfig;
use methodology_dashboard::data::MockDataProvider;
use methodology_dashboard::server::build_router;
use methodology_dashboard::session::SessionStore;
use serde_json::Value;
use std::sync::Arc;

fn server_with_default_view(default_view: &str) -> TestServer {
    let config = AppConfig::load_from_args([
        "methodology-dashboard",
        "--default-view",
        default_view,
    ])
    .expect("config");
    let state = AppState {
        config: Arc::new(config),
        sessions: SessionStore::new(),
        provider: Arc::new(MockDataProvider::new()),
    };
    TestServer::builder()
        .save_cookies()
        .build(build_router(state))
        .expect("test server")
}

fn server() -> TestServer {
    server_with_default_view("dashboard")
}

#[tokio::test]
async fn test_index_renders_dashboard_and_sets_cookie() {
    let server = server();

    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(response.maybe_cookie("dashboard_session").is_some());

    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Key Performance Indicators"));
    assert!(html.contains("Recent Projects"));
}

#[tokio::test]
async fn test_navigation_is_remembered_per_session() {
    let server = server();

    server.get("/view/Settings").await.assert_status_ok();

    let html = server.get("/").await.text();
    assert!(html.contains("Save Settings"));
    assert!(!html.contains("Key Performance Indicators"));
}

#[tokio::test]
async fn test_navigation_accepts_labels_and_slugs() {
    let server = server();

    let by_label = server.get("/view/AI%20Analytics").await.text();
    let by_slug = server.get("/view/ai_analytics").await.text();
    assert!(by_label.contains("Benefits Prediction"));
    assert!(by_slug.contains("Benefits Prediction"));
}

#[tokio::test]
async fn test_unknown_view_renders_chrome_only() {
    let server = server();

    let response = server.get("/view/Overview").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Quick Stats"));
    assert!(!html.contains("class=\"view"));
}

#[tokio::test]
async fn test_unknown_default_view_renders_chrome_only() {
    let server = server_with_default_view("overview");

    let html = server.get("/").await.text();
    assert!(html.contains("Quick Stats"));
    assert!(!html.contains("class=\"view"));
}

#[tokio::test]
async fn test_create_project_reports_success_without_appending() {
    let server = server();

    let response = server
        .post("/projects")
        .form(&[("name", "Apollo"), ("project_type", "Type 1")])
        .await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Apollo"));
    assert!(html.contains("created!"));

    // Known gap: the record list is unchanged.
    let projects: Value = server.get("/api/projects").await.json();
    assert_eq!(projects.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_create_project_with_empty_name_still_succeeds() {
    let server = server();

    let response = server
        .post("/projects")
        .form(&[("name", ""), ("project_type", "Type 2")])
        .await;
    response.assert_status_ok();
    assert!(response.text().contains("created!"));
}

#[tokio::test]
async fn test_notice_is_transient() {
    let server = server();

    let html = server.post("/reports/quick/risk_assessment").await.text();
    assert!(html.contains("Generating report..."));

    let html = server.get("/").await.text();
    assert!(!html.contains("Generating report..."));
}

#[tokio::test]
async fn test_unknown_quick_report_is_not_found() {
    let server = server();

    server
        .post("/reports/quick/budget")
        .expect_failure()
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_custom_report() {
    let server = server();

    let html = server
        .post("/reports/custom")
        .form(&[("report_type", "Executive"), ("format", "PDF")])
        .await
        .text();
    assert!(html.contains("Generating Executive report in PDF format!"));
}

#[tokio::test]
async fn test_save_settings() {
    let server = server();

    let html = server
        .post("/settings/dashboard")
        .form(&[
            ("theme", "Dark"),
            ("refresh_rate", "5m"),
            ("compact_mode", "on"),
        ])
        .await
        .text();
    assert!(html.contains("Settings saved!"));
}

#[tokio::test]
async fn test_ai_settings_update() {
    let server = server();

    server.get("/view/settings").await.assert_status_ok();
    let html = server
        .post("/settings/ai")
        .form(&[("risk_intelligence", "on"), ("confidence_threshold", "0.25")])
        .await
        .text();
    assert!(html.contains("AI Confidence Threshold: 0.25"));
    assert!(!html.contains("Settings saved!"));
}

#[tokio::test]
async fn test_api_projects_in_seed_order() {
    let server = server();

    let projects: Value = server.get("/api/projects").await.json();
    let ids: Vec<_> = projects
        .as_array()
        .expect("array")
        .iter()
        .map(|p| p["id"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(ids, vec!["PROJ-001", "PROJ-002", "PROJ-003"]);
    assert_eq!(projects[0]["type"], "Type 2");
    assert_eq!(projects[0]["health"], 85);
}

#[tokio::test]
async fn test_api_views() {
    let server = server();

    let views: Value = server.get("/api/views").await.json();
    let views = views.as_array().expect("array");
    assert_eq!(views.len(), 6);
    assert_eq!(views[2]["label"], "AI Analytics");
    assert_eq!(views[2]["slug"], "ai_analytics");
}

#[tokio::test]
async fn test_health_and_static() {
    let server = server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("ok");

    server.get("/static/app.css").await.assert_status_ok();
}
