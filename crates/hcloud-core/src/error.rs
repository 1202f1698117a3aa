//! Error types for Hetzner Cloud operations.
//!
//! Transport and configuration failures are reported as [`Error`] variants.
//! Non-2xx responses from the API are normalized into an [`ApiError`], which
//! keeps the provider's error document as plain data with the HTTP status code
//! merged in.

use reqwest::StatusCode;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

use crate::casing::{transform_map, KeyCase};

/// Key under which the HTTP status code is merged into an error document.
pub const STATUS_KEY: &str = "status";

/// Main error type for Hetzner Cloud operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The API answered with a non-2xx status
    #[error("{0}")]
    Api(ApiError),

    /// The API could not be reached
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Operation timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Failed to parse an API response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid endpoint or path
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid resource identifier
    #[error("Invalid ID: {0}")]
    InvalidId(String),

    /// A configuration value failed validation
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Specialized result type for Hetzner Cloud operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Api(_) => "API_ERROR",
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::HttpError(_) => "HTTP_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::ParseError(_) => "PARSE_ERROR",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::InvalidId(_) => "INVALID_ID",
            Self::ValidationError(_) => "VALIDATION_ERROR",
        }
    }

    /// Returns the normalized API error, if the API rejected the request.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the HTTP status code when the API rejected the request.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.api_error().map(ApiError::status)
    }

    /// Returns true if this error should be logged as a serious error.
    #[must_use]
    pub fn should_log(&self) -> bool {
        match self {
            Self::Api(err) => err.is_server_error(),
            Self::ConfigError(_) | Self::ValidationError(_) | Self::ParseError(_) => true,
            _ => false,
        }
    }
}

/// A non-2xx response, normalized into plain data.
///
/// The provider's JSON error document has its keys converted to the client's
/// [`KeyCase`] and a top-level `status` field holding the HTTP status code.
/// A typical document looks like:
///
/// ```json
/// {"error": {"code": "not_found", "message": "server not found", "details": {}}, "status": 404}
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    status: u16,
    body: Value,
}

impl ApiError {
    /// Normalizes a raw error response body.
    ///
    /// Bodies that are not a JSON object are wrapped as
    /// `{"error": {"message": <raw body>}}` before the status is merged in.
    #[must_use]
    pub fn from_response(status: StatusCode, raw: &str, case: KeyCase) -> Self {
        let mut document = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => transform_map(map, case),
            _ => {
                let mut error = Map::new();
                error.insert("message".to_string(), Value::String(raw.trim().to_string()));
                let mut wrapper = Map::new();
                wrapper.insert("error".to_string(), Value::Object(error));
                wrapper
            }
        };

        let status = status.as_u16();
        document.insert(STATUS_KEY.to_string(), Value::from(status));

        Self {
            status,
            body: Value::Object(document),
        }
    }

    /// HTTP status code of the response.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Provider error code (e.g. `not_found`, `uniqueness_error`).
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.error_field("code").and_then(Value::as_str)
    }

    /// Human-readable error message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.error_field("message").and_then(Value::as_str)
    }

    /// Structured error details, when the provider sent any.
    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        self.error_field("details")
    }

    /// The normalized error document.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.body
    }

    /// Consumes the error, returning the normalized error document.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.body
    }

    /// Returns true for 5xx responses.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }

    /// Returns true for 404 responses.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.status == 404
    }

    fn error_field(&self, key: &str) -> Option<&Value> {
        self.body.get("error").and_then(|error| error.get(key))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API error {}", self.status)?;
        if let Some(code) = self.code() {
            write!(f, " ({code})")?;
        }
        if let Some(message) = self.message().filter(|m| !m.is_empty()) {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ServiceUnavailable(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}
