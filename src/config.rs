use clap::Parser;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::session::DEFAULT_SESSION_TIMEOUT;

/// Prefix of configuration environment variables, e.g. `DASH_SERVER__PORT`.
pub const ENV_PREFIX: &str = "DASH";

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Host to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// View shown to new sessions
    #[arg(long, env = "DEFAULT_VIEW")]
    pub default_view: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub dashboard: DashboardConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`.
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    /// Selector value of fresh sessions. Need not name a known view.
    pub default_view: String,
    /// Version shown in the sidebar and footer.
    pub version: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub timeout_secs: u64,
    pub cleanup_interval_secs: u64,
}

impl SessionConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Cleanup period; never zero.
    #[must_use]
    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_secs.max(1))
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Layering, lowest to highest: defaults, config file, `DASH_*`
    /// environment, CLI flags (and their env fallbacks).
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8501)?
            .set_default("server.static_dir", "static")?
            .set_default("dashboard.default_view", "dashboard")?
            .set_default("dashboard.version", "3.0")?
            .set_default("session.cookie_name", "dashboard_session")?
            .set_default("session.timeout_secs", DEFAULT_SESSION_TIMEOUT.as_secs())?
            .set_default("session.cleanup_interval_secs", 60)?;

        // An explicit file must exist; the working-directory fallback is optional.
        match &cli.config {
            Some(path) => {
                builder = builder.add_source(File::with_name(path).required(true));
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                builder = builder.add_source(
                    File::with_name(DEFAULT_CONFIG_FILE)
                        .format(FileFormat::Yaml)
                        .required(false),
                );
            }
            None => {}
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(view) = cli.default_view {
            builder = builder.set_override("dashboard.default_view", view)?;
        }

        builder.build()?.try_deserialize()
    }

    /// `host:port` to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
