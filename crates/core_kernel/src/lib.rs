//! Core Kernel - Foundational types for the car insurance system
//!
//! This crate provides the building blocks shared by every domain crate:
//! - Strongly-typed identifiers for vehicles, policies, claims and owners
//! - Calendar date utilities (strict ISO parsing, supported year window,
//!   inclusive coverage periods)
//! - The error taxonomy surfaced to the boundary layer
//! - Port error type and marker trait for storage adapters

pub mod identifiers;
pub mod temporal;
pub mod error;
pub mod ports;

pub use identifiers::{VehicleId, PolicyId, ClaimId, OwnerId};
pub use temporal::{CoveragePeriod, SupportedYears, TemporalError, parse_iso_date};
pub use error::{CoreError, ErrorKind};
pub use ports::{PortError, DomainPort};
