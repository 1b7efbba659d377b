//! Tracing setup for the evaluator.
//!
//! `RUST_LOG` wins when it is set; otherwise the configured level becomes
//! the filter. Events are emitted compact and ANSI-free so service logs
//! stay grep-friendly when captured by a supervisor.

use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    Filter {
        directive: String,
        source: ParseError,
    },
    Init(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Filter { directive, .. } => {
                write!(f, "log filter directive '{directive}' is not valid")
            }
            TelemetryError::Init(err) => {
                write!(f, "could not install the tracing subscriber: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Filter { source, .. } => Some(source),
            TelemetryError::Init(err) => Some(&**err),
        }
    }
}

/// Installs the global subscriber. Call once, before the server starts.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::Filter {
            directive: config.log_level.clone(),
            source,
        })
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Init)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_fallback_directive_is_reported_with_its_text() {
        std::env::remove_var("RUST_LOG");
        let config = TelemetryConfig {
            log_level: "assessment=notalevel".to_string(),
        };

        let error = init(&config).expect_err("directive cannot parse");

        match &error {
            TelemetryError::Filter { directive, .. } => {
                assert_eq!(directive, "assessment=notalevel");
            }
            other => panic!("expected a filter error, got {other:?}"),
        }
        assert!(error.to_string().contains("assessment=notalevel"));
    }
}
