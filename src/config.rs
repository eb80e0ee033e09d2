//! Configuration loading and constants.
//!
//! Settings come from an optional TOML file and are then overridden by CLI
//! flags or environment variables (resolved by clap in `main`). Every field
//! has a built-in default, so the service starts with no file at all and
//! listens on `0.0.0.0:5000`.

use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

// =============================================================================
// HTTP Server Defaults
// =============================================================================

/// Bind on all interfaces unless told otherwise
pub const DEFAULT_HOST: &str = "0.0.0.0";

pub const DEFAULT_PORT: u16 = 5000;

/// Grace period for in-flight requests after SIGINT/SIGTERM
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Largest accepted request body (same as axum's built-in limit)
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Cache-Control for API responses; every response is computed per request
pub const CACHE_CONTROL_API: &str = "no-store";

/// Response header carrying the per-request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// =============================================================================
// Environment and Logging
// =============================================================================

pub const ENV_CONFIG_PATH: &str = "ECHO_API_CONFIG";
pub const ENV_HOST: &str = "ECHO_API_HOST";
pub const ENV_PORT: &str = "ECHO_API_PORT";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "echo_api=info";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Behavior of the echo endpoint
    #[serde(default)]
    pub echo: EchoConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    #[serde(default = "HttpServerConfig::default_shutdown_timeout")]
    pub shutdown_timeout_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_timeout_seconds: Self::default_shutdown_timeout(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }

    fn default_shutdown_timeout() -> u64 {
        DEFAULT_SHUTDOWN_TIMEOUT_SECS
    }

    /// Resolve `host` and `port` into a socket address.
    ///
    /// The host must be an IP literal (v4 or v6); names are not resolved.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "http.host must be an IP address, got '{}'",
                self.host
            ))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// What `/echo` does with a body that is missing or is not valid JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidBodyPolicy {
    /// Answer 400 with `{"error": "invalid JSON"}`
    #[default]
    Reject,
    /// Answer 200 with `{"echoed": null}`
    EchoNull,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EchoConfig {
    #[serde(default)]
    pub invalid_body: InvalidBodyPolicy,
    #[serde(default = "EchoConfig::default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            invalid_body: InvalidBodyPolicy::default(),
            max_body_bytes: Self::default_max_body_bytes(),
        }
    }
}

impl EchoConfig {
    fn default_max_body_bytes() -> usize {
        DEFAULT_MAX_BODY_BYTES
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    /// Read a TOML configuration file.
    ///
    /// Values are not checked here; [`AppConfig::with_overrides`] validates
    /// once the CLI/env overrides have been applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load from `path` if one was given, otherwise start from defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply CLI/env overrides on top of file values and validate the result.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Result<Self, ConfigError> {
        if let Some(host) = host {
            self.http.host = host;
        }
        if let Some(port) = port {
            self.http.port = port;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation(
                "http.port must be between 1 and 65535".to_string(),
            ));
        }
        if self.echo.max_body_bytes == 0 {
            return Err(ConfigError::Validation(
                "echo.max_body_bytes must be greater than zero".to_string(),
            ));
        }
        self.http.socket_addr()?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
