//! Error handling for the Supply Chain Dashboard
//!
//! Every failure maps to a stable code and a user-facing message; the
//! session store turns these into toasts instead of propagating them.

use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Auth service error: {0}")]
    AuthService(String),

    // Validation errors
    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    // Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error payload handed to the presentation layer
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidRole(_) => "INVALID_ROLE",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::AuthService(_) => "AUTH_SERVICE_ERROR",
            AppError::Validation { .. } => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn detail(&self) -> ErrorDetail {
        let (message, field) = match self {
            AppError::InvalidRole(role) => (format!("Unknown role '{}'", role), None),
            AppError::Unauthorized(msg) => (msg.clone(), None),
            AppError::AuthService(_) => ("Authentication service unavailable".to_string(), None),
            AppError::Validation { field, message } => (message.clone(), Some(field.clone())),
            AppError::NotFound(resource) => (format!("{} not found", resource), None),
            AppError::Storage(_) | AppError::Io(_) => {
                ("Local storage is unavailable".to_string(), None)
            }
            AppError::Serialization(_) => ("Stored data could not be read".to_string(), None),
            AppError::Configuration(err) => (format!("Configuration error: {}", err), None),
            AppError::Internal(_) => ("An internal error occurred".to_string(), None),
        };

        tracing::debug!(code = self.code(), error = ?self, "Mapped error to detail");

        ErrorDetail {
            code: self.code().to_string(),
            message,
            field,
        }
    }
}

impl From<shared::ParseRoleError> for AppError {
    fn from(err: shared::ParseRoleError) -> Self {
        AppError::InvalidRole(err.0)
    }
}

/// Result type alias for services and handlers
pub type AppResult<T> = Result<T, AppError>;
