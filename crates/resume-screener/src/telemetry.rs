use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => {
                write!(
                    f,
                    "invalid log level/filter '{}': unable to build EnvFilter",
                    value
                )
            }
            TelemetryError::Subscriber(err) => write!(f, "telemetry error: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Install the global fmt subscriber. `RUST_LOG` wins over the configured level.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_filter(directives.as_deref(), &config.log_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

/// Filter from explicit directives when they parse, otherwise from the fallback level.
fn build_filter(directives: Option<&str>, fallback: &str) -> Result<EnvFilter, TelemetryError> {
    if let Some(filter) = directives
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
    {
        return Ok(filter);
    }

    EnvFilter::try_new(fallback).map_err(|source| TelemetryError::EnvFilter {
        value: fallback.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_directives_take_precedence() {
        let filter = build_filter(Some("resume_screener=debug"), "info").expect("valid filter");
        assert_eq!(filter.to_string(), "resume_screener=debug");
    }

    #[test]
    fn invalid_directives_fall_back_to_configured_level() {
        let filter = build_filter(Some("resume_screener=loud"), "warn").expect("fallback applies");
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn invalid_fallback_is_reported() {
        match build_filter(None, "screening=verbose") {
            Err(TelemetryError::EnvFilter { value, .. }) => assert_eq!(value, "screening=verbose"),
            other => panic!("expected env filter error, got {other:?}"),
        }
    }
}
