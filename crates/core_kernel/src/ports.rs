//! Ports and Adapters Infrastructure
//!
//! The core never talks to storage directly. Each domain crate defines a port
//! trait extending [`DomainPort`]; adapters (the in-memory store, or a
//! database-backed one supplied by an embedder) implement those traits.
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │  ValidityChecker / HistoryAggregator      │
//! └───────────────────────────────────────────┘
//!                      │
//!                      ▼
//! ┌───────────────────────────────────────────┐
//! │  VehiclePort / PolicyPort / ClaimsPort    │
//! └───────────────────────────────────────────┘
//!                      ▲
//!                      │
//!            ┌─────────┴─────────┐
//!            │  Storage adapter  │
//!            └───────────────────┘
//! ```

use std::fmt;
use thiserror::Error;

/// Error type for port operations
///
/// Every adapter reports failures through this type. Only `NotFound` is
/// interpreted by the core; everything else is passed upward as opaque.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// The underlying store could not be reached
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait for all domain ports
///
/// Ports are shared across tasks behind `Arc<dyn ...>`.
pub trait DomainPort: Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_not_found() {
        let error = PortError::not_found("Vehicle", 123);
        assert!(error.is_not_found());
        assert!(error.to_string().contains("Vehicle"));
        assert!(error.to_string().contains("123"));
    }

    #[test]
    fn test_only_not_found_reports_not_found() {
        assert!(!PortError::connection("pool exhausted").is_not_found());
        assert!(!PortError::conflict("duplicate id").is_not_found());
        assert!(!PortError::internal("boom").is_not_found());
    }
}
