//! Service configuration loading and management

use crate::core::error::{ApiResult, ConfigError};
use serde::{Deserialize, Serialize};

/// Runtime configuration for the service
///
/// Every field has a default, so an empty YAML document (or no file at all)
/// yields a working configuration. The menu catalog is not configurable: its
/// contents are fixed, not deployment-dependent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// Log filter applied when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            log_filter: "pizza_api=info,tower_http=info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> ApiResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_string(),
                }
            } else {
                ConfigError::IoError {
                    message: e.to_string(),
                }
            }
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::ParseError {
                file: Some(path.to_string()),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> ApiResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load from a file if a path is given, defaults otherwise
    pub fn load(path: Option<&str>) -> ApiResult<Self> {
        match path {
            Some(path) => Self::from_yaml_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ApiError;
    use std::io::Write;

    #[test]
    fn test_default_bind_addr() {
        let config = ServiceConfig::default();
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert!(config.log_filter.contains("pizza_api"));
    }

    #[test]
    fn test_from_yaml_str_partial_document() {
        let config = ServiceConfig::from_yaml_str("bind_addr: 0.0.0.0:8080\n").unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        // Unset fields fall back to defaults
        assert_eq!(config.log_filter, ServiceConfig::default().log_filter);
    }

    #[test]
    fn test_from_yaml_str_empty_document_uses_defaults() {
        let config = ServiceConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_from_yaml_str_invalid_yaml_fails() {
        let result = ServiceConfig::from_yaml_str("bind_addr: [unclosed");
        assert!(matches!(
            result,
            Err(ApiError::Config(ConfigError::ParseError { .. }))
        ));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_addr: 127.0.0.1:9999").unwrap();

        let config = ServiceConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9999");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let result = ServiceConfig::from_yaml_file("/nonexistent/pizza.yaml");
        match result {
            Err(ApiError::Config(ConfigError::FileNotFound { path })) => {
                assert_eq!(path, "/nonexistent/pizza.yaml");
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_load_without_path_is_default() {
        assert_eq!(ServiceConfig::load(None).unwrap(), ServiceConfig::default());
    }
}
