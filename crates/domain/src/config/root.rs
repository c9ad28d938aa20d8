use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::filter::FilterConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;

/// Main configuration structure for Vigil DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listen port and bind address
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream resolver and forward timeout
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Filter file path and capacity
    #[serde(default)]
    pub filter: FilterConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values supplied on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub upstream_server: Option<String>,
    pub listen_port: Option<u16>,
    pub bind_address: Option<String>,
    pub filter_path: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. vigil-dns.toml in current directory
    /// 3. /etc/vigil-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("vigil-dns.toml").exists() {
            Self::from_file("vigil-dns.toml")?
        } else if std::path::Path::new("/etc/vigil-dns/config.toml").exists() {
            Self::from_file("/etc/vigil-dns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.upstream_server {
            self.upstream.server = server;
        }
        if let Some(port) = overrides.listen_port {
            self.server.listen_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(path) = overrides.filter_path {
            self.filter.path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.listen_port == 0 {
            return Err(ConfigError::Validation(
                "Listen port cannot be 0".to_string(),
            ));
        }

        if self.upstream.server.is_empty() {
            return Err(ConfigError::Validation(
                "No upstream server configured".to_string(),
            ));
        }

        if self.filter.path.is_empty() {
            return Err(ConfigError::Validation(
                "No filter file configured".to_string(),
            ));
        }

        if self.filter.max_patterns == 0 {
            return Err(ConfigError::Validation(
                "Filter capacity cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}
