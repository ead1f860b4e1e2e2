//! Methodology 3.0 Dashboard server.
//!
//! Entry point for the dashboard web application.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use methodology_dashboard::config::AppConfig;
use methodology_dashboard::server::start_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present) before reading any configuration
    let _ = dotenv();

    // Initialize tracing (M-LOG-STRUCTURED)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = wants_json_logs(std::env::var("LOG_FORMAT").ok().as_deref());
    let (text_layer, json_layer) = if json {
        (None, Some(fmt::layer().json().with_target(true)))
    } else {
        (Some(fmt::layer().with_target(true)), None)
    };
    tracing_subscriber::registry()
        .with(text_layer)
        .with(json_layer)
        .with(filter)
        .init();

    let config = Arc::new(AppConfig::load().context("failed to load configuration")?);

    info!(
        name: "config.loaded",
        address = %config.bind_address(),
        default_view = %config.dashboard.default_view,
        "Configuration loaded"
    );

    start_server(config).await?;
    Ok(())
}

/// `LOG_FORMAT=json` switches to one JSON object per event.
fn wants_json_logs(format: Option<&str>) -> bool {
    format.is_some_and(|f| f.trim().eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_selection() {
        assert!(wants_json_logs(Some("json")));
        assert!(wants_json_logs(Some(" JSON ")));
        assert!(!wants_json_logs(Some("text")));
        assert!(!wants_json_logs(None));
    }
}
