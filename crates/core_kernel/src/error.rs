//! Core error types used across the system

use thiserror::Error;
use crate::ports::PortError;
use crate::temporal::TemporalError;

/// Core error type returned by every domain operation
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{entity} {id} not found")]
    NotFound {
        entity: String,
        id: String,
    },

    #[error("{0}")]
    InvalidDate(String),

    #[error("{0}")]
    InvalidInterval(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Port(PortError),
}

/// How the boundary layer should surface an error to its client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The referenced resource does not exist
    NotFound,
    /// The input was malformed
    BadInput,
    /// The input was well-formed but semantically unacceptable
    Unprocessable,
    /// Something failed that the caller cannot fix
    Internal,
}

impl CoreError {
    pub fn not_found(entity: impl Into<String>, id: impl std::fmt::Display) -> Self {
        CoreError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::NotFound { .. } => ErrorKind::NotFound,
            CoreError::InvalidDate(_) | CoreError::Validation(_) => ErrorKind::BadInput,
            CoreError::InvalidInterval(_) => ErrorKind::Unprocessable,
            CoreError::Port(_) => ErrorKind::Internal,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound { .. })
    }
}

impl From<TemporalError> for CoreError {
    fn from(err: TemporalError) -> Self {
        match err {
            TemporalError::InvalidFormat { .. } | TemporalError::YearOutOfRange { .. } => {
                CoreError::InvalidDate(err.to_string())
            }
            TemporalError::MissingStart | TemporalError::InvertedPeriod { .. } => {
                CoreError::InvalidInterval(err.to_string())
            }
            TemporalError::InvalidYearRange { .. } => CoreError::Validation(err.to_string()),
        }
    }
}

impl From<PortError> for CoreError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { entity_type, id } => CoreError::NotFound {
                entity: entity_type,
                id,
            },
            other => CoreError::Port(other),
        }
    }
}
