//! Policy Domain
//!
//! This crate holds the insurance policy model and the validity check that
//! answers "was this vehicle insured on this date?".
//!
//! # Coverage model
//!
//! A policy covers the inclusive range `[start_date, end_date]`. A policy
//! without an end date is open-ended: it covers every date from its start
//! onward and never ends.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::ValidityChecker;
//!
//! let checker = ValidityChecker::new(vehicle_port, policy_port);
//! let insured = checker.is_active_on(vehicle_id, date).await?;
//! ```

pub mod policy;
pub mod ports;
pub mod services;
pub mod validity;

pub use policy::{InsurancePolicy, NewPolicy, PolicyTerms};
pub use ports::PolicyPort;
pub use services::PolicyService;
pub use validity::ValidityChecker;
