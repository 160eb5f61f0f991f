use std::time::Duration;

use kanjigo_kanjialive::KanjiAliveConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Postgres connection URL.
    pub database_url: String,
    /// Dictionary provider settings.
    pub kanji_alive: KanjiAliveConfig,
}

/// A configuration value that cannot be used to start the server.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error(
        "PROVIDER_TIMEOUT_SECS ({provider_secs}) must be less than REQUEST_TIMEOUT_SECS ({request_secs})"
    )]
    ProviderTimeoutTooLong { provider_secs: u64, request_secs: u64 },

    #[error("KANJI_ALIVE_BASE_URL must start with http:// or https:// (got '{0}')")]
    InvalidProviderUrl(String),

    #[error("DATABASE_URL must be a postgres:// or postgresql:// URL")]
    InvalidDatabaseUrl,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:8081`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATABASE_URL`         | see [`database_url_from_env`] |
    ///
    /// Provider variables are documented on [`KanjiAliveConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:8081".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url = database_url_from_env();
        let kanji_alive = KanjiAliveConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            kanji_alive,
        }
    }

    /// Check values that parse but cannot work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout("REQUEST_TIMEOUT_SECS"));
        }
        if self.kanji_alive.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout("PROVIDER_TIMEOUT_SECS"));
        }
        // A provider call must finish before the request timeout answers 408.
        if self.kanji_alive.timeout >= Duration::from_secs(self.request_timeout_secs) {
            return Err(ConfigError::ProviderTimeoutTooLong {
                provider_secs: self.kanji_alive.timeout.as_secs(),
                request_secs: self.request_timeout_secs,
            });
        }
        let base = &self.kanji_alive.base_url;
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidProviderUrl(base.clone()));
        }
        if !(self.database_url.starts_with("postgres://")
            || self.database_url.starts_with("postgresql://"))
        {
            return Err(ConfigError::InvalidDatabaseUrl);
        }
        Ok(())
    }
}

/// Resolve the Postgres URL.
///
/// `DATABASE_URL` wins when set. Otherwise the URL is assembled from the
/// individual parts:
///
/// | Env Var       | Default        |
/// |---------------|----------------|
/// | `DB_HOST`     | `localhost`    |
/// | `DB_PORT`     | `5432`         |
/// | `DB_NAME`     | `kanji_go_db`  |
/// | `DB_USER`     | `kanji_dev`    |
/// | `DB_PASSWORD` | `dev_password` |
pub fn database_url_from_env() -> String {
    if let Ok(url) = std::env::var("DATABASE_URL") {
        return url;
    }
    let var = |name: &str, default: &str| std::env::var(name).unwrap_or_else(|_| default.into());
    build_database_url(
        &var("DB_HOST", "localhost"),
        &var("DB_PORT", "5432"),
        &var("DB_NAME", "kanji_go_db"),
        &var("DB_USER", "kanji_dev"),
        &var("DB_PASSWORD", "dev_password"),
    )
}

fn build_database_url(host: &str, port: &str, name: &str, user: &str, password: &str) -> String {
    format!("postgres://{user}:{password}@{host}:{port}/{name}")
}
