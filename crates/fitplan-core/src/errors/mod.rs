// ABOUTME: Unified error handling with standard error codes and HTTP status mapping
// ABOUTME: Provides AppError, ErrorCode, and the JSON error response envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! # Unified Error Handling System
//!
//! Every fallible operation in the server surfaces as an [`AppError`]. The
//! [`ErrorCode`] decides the HTTP status; the message and optional details are
//! rendered into a stable JSON envelope:
//!
//! ```json
//! {"error": {"code": "INVALID_INPUT", "message": "...", "details": {"errors": ["..."]}}}
//! ```
//!
//! Server-side failures (database, internal, configuration) never leak their
//! message to clients; they are logged and replaced by a generic message.

#[cfg(feature = "http-response")]
mod http_response;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use thiserror::Error;

/// Message returned to clients in place of server-side error details
pub const GENERIC_INTERNAL_MESSAGE: &str = "Internal server error";

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Request payload failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field is absent
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A value is outside its accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Authentication (1000-1999)
    /// Credentials were rejected
    #[serde(rename = "AUTH_INVALID")]
    AuthInvalid = 1001,

    // Resource Management (4000-4999)
    /// Requested resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// A resource with the same identity already exists
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists = 4001,
    /// The operation exists but has no implementation yet
    #[serde(rename = "NOT_IMPLEMENTED")]
    NotImplemented = 4010,

    // Configuration (6000-6999)
    /// Configuration is invalid or incomplete
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    /// Unexpected failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Database operation failed
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError = 9001,
}

impl ErrorCode {
    /// HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField | Self::ValueOutOfRange => 400,
            Self::AuthInvalid => 401,
            Self::ResourceNotFound => 404,
            // Duplicate registrations are reported as plain bad requests
            Self::ResourceAlreadyExists => 400,
            Self::NotImplemented => 501,
            Self::ConfigError | Self::InternalError | Self::DatabaseError => 500,
        }
    }

    /// User-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::AuthInvalid => "The provided authentication credentials are invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "A resource with this identifier already exists",
            Self::NotImplemented => "This operation is not implemented yet",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal server error occurred",
            Self::DatabaseError => "Database operation failed",
        }
    }

    /// Whether details of this error must stay server-side
    #[must_use]
    pub const fn is_server_error(self) -> bool {
        self.http_status() >= 500 && !matches!(self, Self::NotImplemented)
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured details rendered into the response body
    pub details: Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Value::Null,
            source: None,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Attach a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input with a single message
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Invalid user profile; every violation is listed under `details.errors`
    #[must_use]
    pub fn invalid_profile(errors: &[String]) -> Self {
        Self::new(
            ErrorCode::InvalidInput,
            format!("Invalid input: {}", errors.join(", ")),
        )
        .with_details(json!({ "errors": errors }))
    }

    /// Rejected credentials
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthInvalid, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Resource already exists
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceAlreadyExists, message)
    }

    /// Operation not implemented yet
    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotImplemented, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of the error envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Structured details, omitted when empty
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        let (message, details) = if error.code.is_server_error() {
            (GENERIC_INTERNAL_MESSAGE.to_owned(), Value::Null)
        } else {
            (error.message, error.details)
        };

        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message,
                details,
            },
        }
    }
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => Self::not_found("Record"),
            other => Self::database(other.to_string()).with_source(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::AuthInvalid.http_status(), 401);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::ResourceAlreadyExists.http_status(), 400);
        assert_eq!(ErrorCode::NotImplemented.http_status(), 501);
        assert_eq!(ErrorCode::DatabaseError.http_status(), 500);
    }

    #[test]
    fn test_invalid_profile_lists_every_violation() {
        let errors = vec![
            "Age must be between 13 and 120 years".to_owned(),
            "Weight must be between 30 and 300 kg".to_owned(),
        ];
        let response = ErrorResponse::from(AppError::invalid_profile(&errors));

        assert_eq!(response.error.code, ErrorCode::InvalidInput);
        assert_eq!(response.error.details["errors"][0], errors[0]);
        assert_eq!(response.error.details["errors"][1], errors[1]);
    }

    #[test]
    fn test_server_errors_are_sanitized() {
        let response = ErrorResponse::from(AppError::database("no such table: health_plans"));

        assert_eq!(response.error.message, GENERIC_INTERNAL_MESSAGE);
        assert!(response.error.details.is_null());
    }

    #[test]
    fn test_not_implemented_keeps_message() {
        let response = ErrorResponse::from(AppError::not_implemented(
            "Retrieving stored health plans not yet implemented",
        ));

        assert_eq!(
            response.error.message,
            "Retrieving stored health plans not yet implemented"
        );
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::from(AppError::not_found("Health plan"));
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("RESOURCE_NOT_FOUND"));
        assert!(json.contains("Health plan not found"));
        assert!(!json.contains("details"));
    }
}
