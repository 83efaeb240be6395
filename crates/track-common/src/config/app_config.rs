//! Application configuration structs
//!
//! Loads configuration from environment variables and an optional `.env` file.

use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub storage: StorageConfig,
    pub timeline: TimelineConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply pending migrations at startup
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration. No origins means any origin is allowed.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// External file-storage service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_base_url")]
    pub base_url: String,
    #[serde(default = "default_storage_username")]
    pub username: String,
    #[serde(default = "default_storage_password")]
    pub password: String,
    /// Directory uploaded comment images are written to
    #[serde(default = "default_image_dir")]
    pub image_dir: String,
    #[serde(default = "default_storage_timeout")]
    pub timeout_secs: u64,
}

impl StorageConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Timeline marker configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineConfig {
    /// Comments closer than this many seconds share a marker dot
    #[serde(default = "default_marker_tolerance")]
    pub marker_tolerance_secs: f64,
}

// Default value functions
fn default_app_name() -> String {
    "media-track".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

fn default_requests_per_second() -> u32 {
    50
}

fn default_burst() -> u32 {
    100
}

fn default_storage_base_url() -> String {
    "http://127.0.0.1:5244/api".to_string()
}

fn default_storage_username() -> String {
    "admin".to_string()
}

fn default_storage_password() -> String {
    "admin".to_string()
}

fn default_image_dir() -> String {
    "/images".to_string()
}

fn default_storage_timeout() -> u64 {
    10
}

fn default_marker_tolerance() -> f64 {
    1.0
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if a required key is missing or a value does not parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parsed = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let config = Self {
            app: AppSettings {
                name: parsed("APP_NAME").unwrap_or_else(default_app_name),
                env: match parsed("APP_ENV") {
                    Some(value) => Environment::parse(&value)
                        .ok_or(ConfigError::InvalidValue("APP_ENV", value))?,
                    None => default_env(),
                },
                log_format: match parsed("LOG_FORMAT").as_deref() {
                    Some("json") => LogFormat::Json,
                    Some("pretty") | None => LogFormat::Pretty,
                    Some(other) => {
                        return Err(ConfigError::InvalidValue("LOG_FORMAT", other.to_string()))
                    }
                },
            },
            api: ServerConfig {
                host: parsed("API_HOST").unwrap_or_else(default_host),
                port: parse_or("API_PORT", parsed("API_PORT"), default_port)?,
            },
            database: DatabaseConfig {
                url: parsed("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_or(
                    "DATABASE_MAX_CONNECTIONS",
                    parsed("DATABASE_MAX_CONNECTIONS"),
                    default_max_connections,
                )?,
                min_connections: parse_or(
                    "DATABASE_MIN_CONNECTIONS",
                    parsed("DATABASE_MIN_CONNECTIONS"),
                    default_min_connections,
                )?,
                run_migrations: parse_or(
                    "DATABASE_RUN_MIGRATIONS",
                    parsed("DATABASE_RUN_MIGRATIONS"),
                    default_true,
                )?,
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_or(
                    "RATE_LIMIT_REQUESTS_PER_SECOND",
                    parsed("RATE_LIMIT_REQUESTS_PER_SECOND"),
                    default_requests_per_second,
                )?,
                burst: parse_or("RATE_LIMIT_BURST", parsed("RATE_LIMIT_BURST"), default_burst)?,
            },
            cors: CorsConfig {
                allowed_origins: parsed("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            storage: StorageConfig {
                base_url: parsed("STORAGE_BASE_URL").unwrap_or_else(default_storage_base_url),
                username: parsed("STORAGE_USERNAME").unwrap_or_else(default_storage_username),
                password: parsed("STORAGE_PASSWORD").unwrap_or_else(default_storage_password),
                image_dir: parsed("STORAGE_IMAGE_DIR").unwrap_or_else(default_image_dir),
                timeout_secs: parse_or(
                    "STORAGE_TIMEOUT_SECS",
                    parsed("STORAGE_TIMEOUT_SECS"),
                    default_storage_timeout,
                )?,
            },
            timeline: TimelineConfig {
                marker_tolerance_secs: parse_or(
                    "TIMELINE_MARKER_TOLERANCE_SECS",
                    parsed("TIMELINE_MARKER_TOLERANCE_SECS"),
                    default_marker_tolerance,
                )?,
            },
        };

        if config.database.min_connections > config.database.max_connections {
            return Err(ConfigError::InvalidValue(
                "DATABASE_MIN_CONNECTIONS",
                format!(
                    "{} exceeds DATABASE_MAX_CONNECTIONS {}",
                    config.database.min_connections, config.database.max_connections
                ),
            ));
        }
        if !config.timeline.marker_tolerance_secs.is_finite()
            || config.timeline.marker_tolerance_secs < 0.0
        {
            return Err(ConfigError::InvalidValue(
                "TIMELINE_MARKER_TOLERANCE_SECS",
                config.timeline.marker_tolerance_secs.to_string(),
            ));
        }

        Ok(config)
    }
}

fn parse_or<T, D>(key: &'static str, value: Option<String>, default: D) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    D: FnOnce() -> T,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(default()),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
