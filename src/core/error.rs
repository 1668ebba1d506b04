//! Typed error handling for the pizza-api service
//!
//! Two failure kinds exist at the request boundary: validation failures on
//! order creation and lookups of nonexistent orders. Both terminate only the
//! current exchange, never the process. Each variant carries a stable error
//! code and an HTTP status so clients can handle errors programmatically.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// The main error type for the pizza-api service
#[derive(Debug)]
pub enum ApiError {
    /// Creation input failed validation; one entry per offending field
    Validation(Vec<FieldError>),

    /// No order exists with the requested id
    OrderNotFound { id: Uuid },

    /// The order id path segment is not a well-formed UUID
    InvalidOrderId { value: String },

    /// Configuration errors (startup only)
    Config(ConfigError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

/// A single field validation error
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
            ApiError::OrderNotFound { id } => {
                write!(f, "Order with id '{}' not found", id)
            }
            ApiError::InvalidOrderId { value } => {
                write!(f, "Invalid order id format: '{}'", value)
            }
            ApiError::Config(e) => write!(f, "{}", e),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Config(e) => Some(e),
            _ => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::OrderNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidOrderId { .. } => StatusCode::BAD_REQUEST,
            ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::OrderNotFound { .. } => "ORDER_NOT_FOUND",
            ApiError::InvalidOrderId { .. } => "INVALID_ORDER_ID",
            ApiError::Config(_) => "CONFIG_ERROR",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::Validation(errors) => Some(serde_json::json!({ "fields": errors })),
            ApiError::OrderNotFound { id } => Some(serde_json::json!({ "id": id.to_string() })),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration loading
#[derive(Debug)]
pub enum ConfigError {
    /// Configuration file not found
    FileNotFound { path: String },

    /// Failed to parse configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::Config(err)
    }
}

impl From<serde_yaml::Error> for ApiError {
    fn from(err: serde_yaml::Error) -> Self {
        ApiError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for pizza-api operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ApiError::OrderNotFound { id: Uuid::nil() };
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains(&Uuid::nil().to_string()));
    }

    #[test]
    fn test_not_found_status_code() {
        let err = ApiError::OrderNotFound { id: Uuid::nil() };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "ORDER_NOT_FOUND");
    }

    #[test]
    fn test_validation_error_multiple_fields() {
        let err = ApiError::Validation(vec![
            FieldError::new("size", "must be one of [small, medium, large]"),
            FieldError::new("phone", "must not be empty"),
        ]);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let display = err.to_string();
        assert!(display.contains("size"));
        assert!(display.contains("phone"));
    }

    #[test]
    fn test_validation_error_details_list_fields() {
        let err = ApiError::Validation(vec![FieldError::new("crust", "unknown crust")]);
        let response = err.to_response();
        assert_eq!(response.code, "VALIDATION_ERROR");
        let fields = &response.details.unwrap()["fields"];
        assert_eq!(fields[0]["field"], "crust");
    }

    #[test]
    fn test_invalid_order_id_is_client_error() {
        let err = ApiError::InvalidOrderId {
            value: "not-a-uuid".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "INVALID_ORDER_ID");
        assert!(err.to_string().contains("not-a-uuid"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: ApiError = ConfigError::FileNotFound {
            path: "/etc/pizza.yaml".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("/etc/pizza.yaml"));
    }

    #[test]
    fn test_from_serde_yaml_error() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("{invalid").unwrap_err();
        let api_err: ApiError = yaml_err.into();
        assert!(matches!(
            api_err,
            ApiError::Config(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_internal_error_status() {
        let err = ApiError::Internal("lock poisoned".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }
}
