//! Receipt API configuration module.
//!
//! Configuration is resolved in three layers, later layers winning:
//!
//! ```text
//! defaults ──► TOML file (RECEIPT_API_CONFIG) ──► RECEIPT_API_* environment
//! ```

use std::env;
use std::fs;

use serde::{Deserialize, Serialize};

/// Environment variable holding the optional config file path.
pub const CONFIG_PATH_VAR: &str = "RECEIPT_API_CONFIG";

pub const HOST_VAR: &str = "RECEIPT_API_HOST";
pub const PORT_VAR: &str = "RECEIPT_API_PORT";
pub const MAX_BODY_BYTES_VAR: &str = "RECEIPT_API_MAX_BODY_BYTES";
pub const LOG_LEVEL_VAR: &str = "RECEIPT_API_LOG_LEVEL";

/// Receipt API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Bind address
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// Max request body size in bytes (default: 1MB)
    pub max_body_bytes: usize,

    /// Tracing filter used when RUST_LOG is unset
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_body_bytes: 1024 * 1024,
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from the optional file and environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };

        config.apply_overrides(|name| env::var(name).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Read a TOML config file. Missing keys keep their defaults.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        Self::from_toml_str(&text)
    }

    /// Parse TOML config text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Overlay `RECEIPT_API_*` values from `lookup` onto this config.
    ///
    /// `lookup` is `std::env::var` in production and a map in tests.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(HOST_VAR) {
            self.host = host;
        }

        if let Some(port) = lookup(PORT_VAR) {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(PORT_VAR.to_string()))?;
        }

        if let Some(limit) = lookup(MAX_BODY_BYTES_VAR) {
            self.max_body_bytes = limit
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(MAX_BODY_BYTES_VAR.to_string()))?;
        }

        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            self.log_level = level;
        }

        Ok(())
    }

    /// Reject values the server cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue(HOST_VAR.to_string()));
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidValue(PORT_VAR.to_string()));
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue(MAX_BODY_BYTES_VAR.to_string()));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue(LOG_LEVEL_VAR.to_string()));
        }

        Ok(())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config file: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_body_bytes, 1_048_576);
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ApiConfig::from_toml_str("port = 8080\nlog_level = \"debug\"").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.max_body_bytes, 1_048_576);
    }

    #[test]
    fn test_bad_toml() {
        let err = ApiConfig::from_toml_str("port = \"eighty\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ApiConfig::from_file("/nonexistent/receipt-api.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = ApiConfig::from_toml_str("port = 8080\nhost = \"127.0.0.1\"").unwrap();
        config
            .apply_overrides(lookup(&[(PORT_VAR, "9090"), (MAX_BODY_BYTES_VAR, "2048")]))
            .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.max_body_bytes, 2048);
    }

    #[test]
    fn test_invalid_port() {
        let mut config = ApiConfig::default();
        let err = config
            .apply_overrides(lookup(&[(PORT_VAR, "not-a-port")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for RECEIPT_API_PORT");
    }

    #[test]
    fn test_zero_values_rejected() {
        let mut config = ApiConfig::default();
        config.apply_overrides(lookup(&[(PORT_VAR, "0")])).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(ref name)) if name == PORT_VAR
        ));

        let config = ApiConfig {
            max_body_bytes: 0,
            ..ApiConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(ref name)) if name == MAX_BODY_BYTES_VAR
        ));
    }
}
