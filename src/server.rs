use axum::{
    Form, Json, Router,
    extract::{Path, State},
    response::Html,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::{debug, info};

use crate::AppState;
use crate::config::AppConfig;
use crate::data::{DataProvider, MockDataProvider};
use crate::domain::ProjectList;
use crate::error::{AppError, Result};
use crate::router::{
    AiSettings, CreateProject, CustomReport, DashboardPreferences, DashboardState, Event,
    QuickReport, RefreshRate, RenderContext, Theme, View, render,
};
use crate::session::{Session, SessionStore};
use crate::ui::render_document;

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> Result<()> {
    let provider: Arc<dyn DataProvider> = Arc::new(MockDataProvider::new());

    // Fail fast on broken seed data rather than on the first visitor.
    let seeded = provider.projects()?;
    info!(
        name: "data.seeded",
        projects = seeded.len(),
        "Sample projects loaded"
    );

    let state = AppState {
        config: Arc::clone(&config),
        sessions: SessionStore::new(),
        provider,
    };

    spawn_session_cleanup(state.sessions.clone(), &config);

    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        .route("/", get(index))
        .route("/view/{name}", get(navigate))
        .route("/refresh", post(refresh))
        .route("/projects", post(create_project))
        .route("/reports/quick/{kind}", post(quick_report))
        .route("/reports/custom", post(custom_report))
        .route("/settings/dashboard", post(save_settings))
        .route("/settings/ai", post(update_ai_settings))
        .route("/api/projects", get(api_projects))
        .route("/api/views", get(api_views))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Periodically drop sessions idle longer than the configured timeout.
fn spawn_session_cleanup(sessions: SessionStore, config: &AppConfig) {
    let timeout = config.session.timeout();
    let period = config.session.cleanup_interval();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let removed = sessions.cleanup_expired_with_timeout(timeout);
            if removed > 0 {
                info!(
                    name: "session.expired",
                    removed,
                    remaining = sessions.len(),
                    "Expired idle sessions"
                );
            }
        }
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Sessions
// ─────────────────────────────────────────────────────────────────────────────

/// Resolve the visitor's session from the cookie, creating one if needed.
fn session_for(state: &AppState, jar: CookieJar) -> Result<(CookieJar, Session)> {
    let cookie_name = &state.config.session.cookie_name;

    if let Some(session) = jar
        .get(cookie_name)
        .and_then(|c| state.sessions.get(c.value()))
    {
        session.touch();
        return Ok((jar, session));
    }

    let seed = DashboardState::seed(
        state.provider.as_ref(),
        &state.config.dashboard.default_view,
    )?;
    let session = state.sessions.create(seed);
    info!(name: "session.created", session = %session.id(), "Session created");

    let cookie = Cookie::build((cookie_name.clone(), session.id().to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    Ok((jar.add(cookie), session))
}

/// One full render pass for an interaction.
fn dispatch(state: &AppState, jar: CookieJar, event: Event) -> Result<(CookieJar, Html<String>)> {
    let (jar, session) = session_for(state, jar)?;
    let ctx = RenderContext {
        provider: state.provider.as_ref(),
        now: Local::now().naive_local(),
        version: &state.config.dashboard.version,
    };

    debug!(name: "event.received", session = %session.id(), event = ?event, "Event received");
    let (selector, page) = session.update(|current| {
        let (next, page) = render(current, event, &ctx);
        let selector = next.selector.as_str().to_string();
        (next, (selector, page))
    });

    info!(
        name: "view.rendered",
        session = %session.id(),
        selector = %selector,
        matched = page.body.is_some(),
        notices = page.notices.len(),
        "View rendered"
    );

    Ok((jar, Html(render_document(page))))
}

// ─────────────────────────────────────────────────────────────────────────────
// Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Render the current view.
async fn index(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>)> {
    dispatch(&state, jar, Event::Load)
}

/// GET /view/{name} - Sidebar navigation.
async fn navigate(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(name): Path<String>,
) -> Result<(CookieJar, Html<String>)> {
    dispatch(&state, jar, Event::Navigate(name))
}

/// POST /refresh - Re-run without changes.
async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>)> {
    dispatch(&state, jar, Event::Refresh)
}

/// POST /projects - Create-project form.
async fn create_project(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CreateProject>,
) -> Result<(CookieJar, Html<String>)> {
    dispatch(&state, jar, Event::CreateProject(form))
}

/// POST /reports/quick/{kind} - Quick-report buttons.
async fn quick_report(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(kind): Path<String>,
) -> Result<(CookieJar, Html<String>)> {
    let report = QuickReport::from_slug(&kind).ok_or(AppError::UnknownReport(kind))?;
    dispatch(&state, jar, Event::QuickReport(report))
}

/// POST /reports/custom - Custom report form.
async fn custom_report(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CustomReport>,
) -> Result<(CookieJar, Html<String>)> {
    dispatch(&state, jar, Event::CustomReport(form))
}

/// Dashboard settings form. Checkboxes are absent when unticked.
#[derive(Debug, Deserialize)]
struct PreferencesForm {
    theme: Theme,
    refresh_rate: RefreshRate,
    show_notifications: Option<String>,
    compact_mode: Option<String>,
}

impl From<PreferencesForm> for DashboardPreferences {
    fn from(form: PreferencesForm) -> Self {
        Self {
            theme: form.theme,
            refresh_rate: form.refresh_rate,
            show_notifications: form.show_notifications.is_some(),
            compact_mode: form.compact_mode.is_some(),
        }
    }
}

/// POST /settings/dashboard - Save button.
async fn save_settings(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<PreferencesForm>,
) -> Result<(CookieJar, Html<String>)> {
    dispatch(&state, jar, Event::SaveSettings(form.into()))
}

/// AI settings form.
#[derive(Debug, Deserialize)]
struct AiSettingsForm {
    benefits_prediction: Option<String>,
    risk_intelligence: Option<String>,
    sustainability_analytics: Option<String>,
    #[serde(default = "default_confidence")]
    confidence_threshold: f64,
}

fn default_confidence() -> f64 {
    AiSettings::DEFAULT_CONFIDENCE
}

impl From<AiSettingsForm> for AiSettings {
    fn from(form: AiSettingsForm) -> Self {
        Self::new(
            form.benefits_prediction.is_some(),
            form.risk_intelligence.is_some(),
            form.sustainability_analytics.is_some(),
            form.confidence_threshold,
        )
    }
}

/// POST /settings/ai - AI settings tab.
async fn update_ai_settings(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<AiSettingsForm>,
) -> Result<(CookieJar, Html<String>)> {
    dispatch(&state, jar, Event::UpdateAiSettings(form.into()))
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /api/projects - The session's project records.
async fn api_projects(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ProjectList>)> {
    let (jar, session) = session_for(&state, jar)?;
    Ok((jar, Json(session.state().projects)))
}

/// View DTO for API responses.
#[derive(Debug, Serialize)]
struct ViewDto {
    label: &'static str,
    slug: &'static str,
}

/// GET /api/views - The navigable views in sidebar order.
async fn api_views() -> Json<Vec<ViewDto>> {
    Json(
        View::ALL
            .into_iter()
            .map(|v| ViewDto {
                label: v.label(),
                slug: v.slug(),
            })
            .collect(),
    )
}

/// GET /health - Liveness probe.
async fn health() -> &'static str {
    "ok"
}
