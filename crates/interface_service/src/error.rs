//! Service error handling

use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use core_kernel::{CoreError, ErrorKind};

/// Service error types
///
/// Every failure leaving the facade falls into exactly one of these classes.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
        details: Vec<String>,
    },

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ServiceError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ServiceError::BadRequest {
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// HTTP-style status code for the class
    pub fn status(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 404,
            ServiceError::BadRequest { .. } => 400,
            ServiceError::Unprocessable(_) => 422,
            ServiceError::Internal(_) => 500,
        }
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => "not_found",
            ServiceError::BadRequest { .. } => "bad_request",
            ServiceError::Unprocessable(_) => "unprocessable_entity",
            ServiceError::Internal(_) => "internal_error",
        }
    }

    pub fn body(&self) -> ErrorBody {
        let (message, details) = match self {
            ServiceError::NotFound(msg) | ServiceError::Unprocessable(msg) | ServiceError::Internal(msg) => {
                (msg.clone(), None)
            }
            ServiceError::BadRequest { message, details } => {
                (message.clone(), (!details.is_empty()).then(|| details.clone()))
            }
        };

        ErrorBody {
            error: self.code().to_string(),
            message,
            details,
        }
    }
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ErrorKind::NotFound => ServiceError::NotFound(message),
            ErrorKind::BadInput => ServiceError::bad_request(message),
            ErrorKind::Unprocessable => ServiceError::Unprocessable(message),
            ErrorKind::Internal => {
                error!(error = %message, "Storage failure");
                ServiceError::Internal(message)
            }
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => format!("{field}: {message}"),
                    None => format!("{field}: {}", e.code),
                })
            })
            .collect();
        details.sort();

        ServiceError::BadRequest {
            message: "Request validation failed".to_string(),
            details,
        }
    }
}
