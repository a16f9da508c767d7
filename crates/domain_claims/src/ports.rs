//! Claims Domain Ports

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError, VehicleId};

use crate::claim::{Claim, NewClaim};

/// Storage operations for claims
#[async_trait]
pub trait ClaimsPort: DomainPort {
    /// Returns every claim of the vehicle, in any order
    async fn find_claims_by_vehicle(&self, vehicle_id: VehicleId) -> Result<Vec<Claim>, PortError>;

    /// Stores a new claim and returns it with its assigned id
    async fn insert_claim(&self, vehicle_id: VehicleId, claim: NewClaim) -> Result<Claim, PortError>;
}
