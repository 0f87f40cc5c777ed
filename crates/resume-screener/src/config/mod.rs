use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use chrono::Datelike;

use crate::workflows::screening::{ScoringConfig, ScoringConfigError};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub screening: ScreeningSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            screening: ScreeningSettings::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Data sources and rubric for the screening pipeline.
#[derive(Debug, Clone)]
pub struct ScreeningSettings {
    /// JSON ontology replacing the built-in skill table.
    pub skill_ontology: Option<PathBuf>,
    /// CSV job catalog used when a request carries no jobs.
    pub job_catalog: Option<PathBuf>,
    /// Stands in for "present" in open-ended employment ranges.
    pub reference_year: i32,
    pub scoring: ScoringConfig,
}

impl Default for ScreeningSettings {
    fn default() -> Self {
        Self {
            skill_ontology: None,
            job_catalog: None,
            reference_year: chrono::Local::now().year(),
            scoring: ScoringConfig::default(),
        }
    }
}

impl ScreeningSettings {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mut scoring = defaults.scoring;

        if let Some(value) = parse_var("APP_WEIGHT_SKILLS")? {
            scoring.weights.skills = value;
        }
        if let Some(value) = parse_var("APP_WEIGHT_EXPERIENCE")? {
            scoring.weights.experience = value;
        }
        if let Some(value) = parse_var("APP_WEIGHT_EDUCATION")? {
            scoring.weights.education = value;
        }
        if let Some(value) = parse_var("APP_WEIGHT_KEYWORDS")? {
            scoring.weights.keywords = value;
        }
        if let Some(value) = parse_var("APP_SHORTLIST_THRESHOLD")? {
            scoring.shortlist_threshold = value;
        }
        if let Some(value) = parse_var("APP_REVIEW_THRESHOLD")? {
            scoring.review_threshold = value;
        }
        if let Some(value) = parse_var("APP_TOP_N")? {
            scoring.top_n = value;
        }
        scoring.validate().map_err(ConfigError::InvalidScoring)?;

        Ok(Self {
            skill_ontology: path_var("APP_SKILL_ONTOLOGY"),
            job_catalog: path_var("APP_JOB_CATALOG"),
            reference_year: parse_var("APP_REFERENCE_YEAR")?.unwrap_or(defaults.reference_year),
            scoring,
        })
    }
}

fn path_var(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn parse_var<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    let Ok(raw) = env::var(key) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            value: trimmed.to_string(),
        })
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str, value: String },
    InvalidScoring(ScoringConfigError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be numeric, got '{value}'")
            }
            ConfigError::InvalidScoring(err) => write!(f, "invalid scoring rubric: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidNumber { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidScoring(err) => Some(err),
        }
    }
}
