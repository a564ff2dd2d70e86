//! Configuration for the weather service
//!
//! There is no config file: the values below are fixed defaults. The struct
//! exists so the server, the upstream client and logging read their settings
//! from one validated place, and so tests can point the client elsewhere.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream weather API settings
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound for handling one request, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

/// Upstream weather API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the weather API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Identifying User-Agent sent on every call
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Per-call timeout in seconds
    #[serde(default = "default_upstream_timeout")]
    pub timeout_seconds: u64,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30
}

fn default_base_url() -> String {
    "https://api.weather.gov".to_string()
}

fn default_user_agent() -> String {
    "WeatherService/1.0 (contact@example.com)".to_string()
}

fn default_upstream_timeout() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_seconds: default_upstream_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ServiceConfig {
    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.server.port == 0 {
            bail!("Server port must not be 0");
        }

        if !(1..=300).contains(&self.server.request_timeout_seconds) {
            bail!("Request timeout must be between 1 and 300 seconds");
        }

        if !(1..=300).contains(&self.upstream.timeout_seconds) {
            bail!("Upstream timeout must be between 1 and 300 seconds");
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            );
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            );
        }

        if !self.upstream.base_url.starts_with("http://")
            && !self.upstream.base_url.starts_with("https://")
        {
            bail!("Upstream base URL must be a valid HTTP or HTTPS URL");
        }

        if self.upstream.user_agent.trim().is_empty() {
            bail!("Upstream User-Agent must not be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.upstream.base_url, "https://api.weather.gov");
        assert_eq!(
            config.upstream.user_agent,
            "WeatherService/1.0 (contact@example.com)"
        );
        assert_eq!(config.upstream.timeout_seconds, 10);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = ServiceConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = ServiceConfig::default();
        config.upstream.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Upstream timeout"));
    }

    #[test]
    fn test_config_validation_base_url() {
        let mut config = ServiceConfig::default();
        config.upstream.base_url = "ftp://api.weather.gov".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ServiceConfig =
            serde_json::from_str(r#"{"server":{"port":9090}}"#).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.request_timeout_seconds, 30);
        assert_eq!(config.upstream.base_url, "https://api.weather.gov");
    }
}
