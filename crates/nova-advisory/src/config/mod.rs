use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Deployment stage the service is running in. Besides the startup log
/// line, the stage picks the baseline log filter when no explicit
/// `NOVA_LOG_LEVEL` is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }

    /// Baseline tracing filter for the stage. Counsellor-facing
    /// deployments stay at `info`; local development gets the chatty
    /// default, and test runs only surface warnings.
    pub const fn default_log_filter(self) -> &'static str {
        match self {
            Self::Development => "debug",
            Self::Test => "warn",
            Self::Production => "info",
        }
    }
}

/// Top-level configuration for the advisory service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = match env::var("NOVA_ENV") {
            Ok(value) => AppEnvironment::parse(&value),
            Err(_) => AppEnvironment::Development,
        };

        let server = ServerConfig {
            host: env::var("NOVA_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: match env::var("NOVA_PORT") {
                Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort)?,
                Err(_) => 4000,
            },
        };

        // NOVA_LOG_LEVEL is an override, not a requirement; unset means
        // "whatever the stage defaults to".
        let telemetry = TelemetryConfig {
            environment,
            log_filter: env::var("NOVA_LOG_LEVEL").ok(),
        };

        Ok(Self {
            environment,
            server,
            telemetry,
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

/// Tracing controls handed to [`crate::telemetry::init`]: the stage for
/// its default filter plus the operator override, if any.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub environment: AppEnvironment,
    pub log_filter: Option<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "NOVA_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "NOVA_HOST must parse to an IPv4 or IPv6 address")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
