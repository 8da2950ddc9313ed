//! Tracing bootstrap for the advisory service.
//!
//! The effective filter is resolved in three steps: a `RUST_LOG` set by
//! the operator wins outright, then an explicit `NOVA_LOG_LEVEL`, and
//! finally the deployment stage's baseline (`debug` in development,
//! `info` in production, `warn` under test).

use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    Filter { spec: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Filter { spec, .. } => {
                write!(f, "invalid tracing filter '{spec}'")
            }
            TelemetryError::Subscriber(err) => write!(f, "telemetry error: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Filter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Filter spec from the configuration alone, ignoring `RUST_LOG`: the
/// operator override when present, the stage baseline otherwise.
fn filter_spec(config: &TelemetryConfig) -> String {
    match &config.log_filter {
        Some(spec) => spec.clone(),
        None => config.environment.default_log_filter().to_string(),
    }
}

pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let spec = filter_spec(config);
            EnvFilter::try_new(&spec)
                .map_err(|source| TelemetryError::Filter { spec, source })?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppEnvironment;

    fn telemetry(environment: AppEnvironment, log_filter: Option<&str>) -> TelemetryConfig {
        TelemetryConfig {
            environment,
            log_filter: log_filter.map(str::to_owned),
        }
    }

    #[test]
    fn stage_baseline_applies_without_an_override() {
        let spec = filter_spec(&telemetry(AppEnvironment::Development, None));
        assert_eq!(spec, "debug");

        let spec = filter_spec(&telemetry(AppEnvironment::Production, None));
        assert_eq!(spec, "info");
    }

    #[test]
    fn explicit_filter_beats_the_stage_baseline() {
        let spec = filter_spec(&telemetry(
            AppEnvironment::Production,
            Some("nova_advisory=trace,warn"),
        ));
        assert_eq!(spec, "nova_advisory=trace,warn");
    }

    #[test]
    fn configured_specs_parse_as_env_filters() {
        for config in [
            telemetry(AppEnvironment::Development, None),
            telemetry(AppEnvironment::Test, None),
            telemetry(AppEnvironment::Production, Some("nova_advisory=debug,info")),
        ] {
            let spec = filter_spec(&config);
            EnvFilter::try_new(&spec).expect("spec parses");
        }
    }
}
