//! Service Layer
//!
//! The boundary between callers and the core. Callers hand in raw strings
//! and request DTOs; the facade parses and validates them, runs the domain
//! operation and returns serializable response DTOs or a classified
//! `ServiceError`.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use infra_memory::InMemoryStore;
//! use interface_service::{config::ServiceConfig, telemetry, CarInsuranceService};
//!
//! let config = ServiceConfig::from_env()?;
//! telemetry::init_tracing(&config)?;
//!
//! let service = CarInsuranceService::from_store(Arc::new(InMemoryStore::new()), &config)?;
//! let answer = service.insurance_valid(VehicleId::new(1), "2024-06-01").await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod service;
pub mod telemetry;

pub use error::{ErrorBody, ServiceError};
pub use service::CarInsuranceService;
