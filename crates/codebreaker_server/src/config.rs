//! Server configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Where new games get their secret codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CodeSourceKind {
    /// In-process pseudo-random digits.
    Local,
    /// random.org integer API with local fallback.
    RandomOrg,
}

/// Configuration for the game server.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    host: String,

    /// Port to bind to.
    #[serde(default = "default_port")]
    #[getter(copy)]
    port: u16,

    /// Secret code source.
    #[serde(default = "default_code_source")]
    #[getter(copy)]
    code_source: CodeSourceKind,

    /// Base URL of the random.org API.
    #[serde(default = "default_random_org_url")]
    random_org_url: String,

    /// How long to wait for random.org before falling back, in milliseconds.
    #[serde(default = "default_random_org_timeout_ms")]
    #[getter(copy)]
    random_org_timeout_ms: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_code_source() -> CodeSourceKind {
    CodeSourceKind::RandomOrg
}

fn default_random_org_url() -> String {
    "https://www.random.org".to_string()
}

fn default_random_org_timeout_ms() -> u64 {
    2000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            code_source: default_code_source(),
            random_org_url: default_random_org_url(),
            random_org_timeout_ms: default_random_org_timeout_ms(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file; missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an existing file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the bind host.
    pub fn with_host(mut self, host: String) -> Self {
        self.host = host;
        self
    }

    /// Overrides the bind port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Overrides the code source.
    pub fn with_code_source(mut self, code_source: CodeSourceKind) -> Self {
        self.code_source = code_source;
        self
    }

    /// Overrides the random.org timeout.
    pub fn with_random_org_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.random_org_timeout_ms = timeout_ms;
        self
    }

    /// The random.org timeout as a [`Duration`].
    pub fn random_org_timeout(&self) -> Duration {
        Duration::from_millis(self.random_org_timeout_ms)
    }

    /// Address string suitable for binding a listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.code_source(), CodeSourceKind::RandomOrg);
        assert_eq!(config.random_org_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ServerConfig = toml::from_str("port = 9000\ncode_source = \"local\"\n").unwrap();
        assert_eq!(config.port(), 9000);
        assert_eq!(config.code_source(), CodeSourceKind::Local);
        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(config.random_org_url(), "https://www.random.org");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::default()
            .with_host("0.0.0.0".to_string())
            .with_port(1234)
            .with_code_source(CodeSourceKind::Local)
            .with_random_org_timeout_ms(50);
        assert_eq!(config.bind_address(), "0.0.0.0:1234");
        assert_eq!(config.code_source(), CodeSourceKind::Local);
        assert_eq!(config.random_org_timeout_ms(), 50);
    }
}
