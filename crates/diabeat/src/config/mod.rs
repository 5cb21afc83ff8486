use std::env;
use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_LEVEL: &str = "info";

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

    /// Coloured log output is only wanted on a developer terminal.
    pub fn wants_ansi(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Settings shared by the HTTP service and the terminal questionnaire.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Reads `DIABEAT_*` variables, loading a `.env` file first when one exists.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = env::var("DIABEAT_ENV")
            .map(|value| AppEnvironment::parse(&value))
            .unwrap_or(AppEnvironment::Development);

        let port = match non_blank_var("DIABEAT_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            environment,
            server: ServerConfig {
                host: var_or("DIABEAT_HOST", DEFAULT_HOST),
                port,
            },
            telemetry: TelemetryConfig {
                log_level: var_or("DIABEAT_LOG_LEVEL", DEFAULT_LOG_LEVEL),
                ansi: environment.wants_ansi(),
            },
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    non_blank_var(key).unwrap_or_else(|| default.to_string())
}

/// Trimmed value of `key`; unset and blank read the same.
fn non_blank_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Resolves the bind address. Only `localhost` is accepted as a name.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.host
                .parse()
                .map_err(|source| ConfigError::InvalidHost {
                    value: self.host.clone(),
                    source,
                })?
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Filter directives used when `RUST_LOG` is absent.
    pub log_level: String,
    pub ansi: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DIABEAT_PORT must be a port number (found '{value}')")]
    InvalidPort { value: String },
    #[error("DIABEAT_HOST must be 'localhost' or an IP address (found '{value}')")]
    InvalidHost {
        value: String,
        #[source]
        source: AddrParseError,
    },
}
