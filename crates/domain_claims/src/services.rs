//! Claims domain services

use std::sync::Arc;

use tracing::{info, instrument, warn};

use core_kernel::{CoreError, VehicleId};
use domain_vehicle::VehiclePort;

use crate::claim::{Claim, NewClaim};
use crate::ports::ClaimsPort;

/// Service for registering claims
#[derive(Clone)]
pub struct ClaimService {
    vehicles: Arc<dyn VehiclePort>,
    claims: Arc<dyn ClaimsPort>,
}

impl ClaimService {
    pub fn new(vehicles: Arc<dyn VehiclePort>, claims: Arc<dyn ClaimsPort>) -> Self {
        Self { vehicles, claims }
    }

    /// Registers a claim for a vehicle
    ///
    /// # Errors
    ///
    /// * `CoreError::Validation` for a blank description or non-positive amount
    /// * `CoreError::NotFound` if the vehicle does not exist
    #[instrument(skip(self, claim), fields(vehicle_id = %vehicle_id, claim_date = %claim.claim_date))]
    pub async fn register_claim(&self, vehicle_id: VehicleId, claim: NewClaim) -> Result<Claim, CoreError> {
        claim.validate().inspect_err(|e| warn!(error = %e, "Rejected claim"))?;

        let vehicle = self.vehicles.get_vehicle(vehicle_id).await?;

        let stored = self.claims.insert_claim(vehicle_id, claim).await?;
        info!(
            claim_id = %stored.id,
            vehicle = %vehicle.label(),
            amount = %stored.amount,
            "Claim registered"
        );
        Ok(stored)
    }
}
