//! Claims Domain
//!
//! A claim records a loss reported for a vehicle: when it happened, what
//! happened, and the amount claimed. Claims are created once and never
//! modified afterwards.

pub mod claim;
pub mod ports;
pub mod services;

pub use claim::{Claim, NewClaim};
pub use ports::ClaimsPort;
pub use services::ClaimService;
