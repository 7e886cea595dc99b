//! Configuration management

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_ACQUIRE_TIMEOUT_SECS, DEFAULT_DB_PORT, DEFAULT_HTTP_PORT, DEFAULT_MAX_CONNECTIONS,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// Database connection settings.
///
/// Either a composed `url` or the discrete parts may be supplied; see
/// [`DatabaseSettings::target`].
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default)]
    pub min_connections: u32,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

/// Where the connection pool should point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    Url(String),
    Parts {
        host: String,
        port: u16,
        username: String,
        password: String,
        database: String,
    },
}

impl DatabaseSettings {
    /// A non-blank composed URL wins over the discrete parts.
    pub fn target(&self) -> DatabaseTarget {
        if let Some(url) = self.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            return DatabaseTarget::Url(url.to_string());
        }

        DatabaseTarget::Parts {
            host: non_blank(&self.host).unwrap_or("localhost").to_string(),
            port: self.port.unwrap_or(DEFAULT_DB_PORT),
            username: non_blank(&self.username).unwrap_or("postgres").to_string(),
            password: self.password.clone().unwrap_or_default(),
            database: non_blank(&self.name).unwrap_or("postgres").to_string(),
        }
    }
}

impl DatabaseTarget {
    /// Target description safe for logs (no credentials).
    pub fn redacted(&self) -> String {
        match self {
            DatabaseTarget::Url(url) => match (url.find("://"), url.rfind('@')) {
                (Some(scheme_end), Some(at)) if at > scheme_end => {
                    format!("{}://***@{}", &url[..scheme_end], &url[at + 1..])
                }
                _ => url.clone(),
            },
            DatabaseTarget::Parts { host, port, username, database, .. } => {
                format!("postgres://{}:***@{}:{}/{}", username, host, port, database)
            }
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
    pub format: LogFormat,
    pub dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", DEFAULT_HTTP_PORT)?
            .set_default("app.name", "menu-server")?
            .set_default("database.max_connections", DEFAULT_MAX_CONNECTIONS)?
            .set_default("database.min_connections", 0)?
            .set_default("database.acquire_timeout_secs", DEFAULT_ACQUIRE_TIMEOUT_SECS)?
            .set_default("database.run_migrations", true)?
            .set_default("log.level", "info")?
            .set_default("log.format", "json")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("MENU")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("app.cors_origins"),
            )
            // flat variable names used by existing deployments
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("database.host", std::env::var("DB_HOST").ok())?
            .set_override_option("database.port", std::env::var("DB_PORT").ok())?
            .set_override_option("database.username", std::env::var("DB_USERNAME").ok())?
            .set_override_option("database.password", std::env::var("DB_PASSWORD").ok())?
            .set_override_option("database.name", std::env::var("DATABASE").ok())?
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

fn default_acquire_timeout() -> u64 {
    DEFAULT_ACQUIRE_TIMEOUT_SECS
}

fn default_true() -> bool {
    true
}
