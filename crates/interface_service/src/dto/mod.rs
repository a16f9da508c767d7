//! Data transfer objects
//!
//! Wire field names are camelCase.

pub mod claims;
pub mod history;
pub mod policy;
pub mod vehicle;

pub use claims::{ClaimDto, CreateClaimRequest};
pub use history::HistoryEventDto;
pub use policy::{InsuranceValidityResponse, PolicyResponse, PolicyUpsertRequest};
pub use vehicle::VehicleDto;
