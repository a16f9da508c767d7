//! Policy domain services
//!
//! Registration and maintenance of policies. These operations write through
//! `PolicyPort`; the validity check and the history timeline only read.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use core_kernel::{CoreError, PolicyId, VehicleId};
use domain_vehicle::VehiclePort;

use crate::policy::{InsurancePolicy, NewPolicy, PolicyTerms};
use crate::ports::PolicyPort;

/// Service for registering and updating policies
#[derive(Clone)]
pub struct PolicyService {
    vehicles: Arc<dyn VehiclePort>,
    policies: Arc<dyn PolicyPort>,
}

impl PolicyService {
    pub fn new(vehicles: Arc<dyn VehiclePort>, policies: Arc<dyn PolicyPort>) -> Self {
        Self { vehicles, policies }
    }

    /// Lists every policy ordered by id
    pub async fn list_policies(&self) -> Result<Vec<InsurancePolicy>, CoreError> {
        Ok(self.policies.list_policies().await?)
    }

    /// Registers a new policy for a vehicle
    ///
    /// The terms are validated before the vehicle is looked up, so malformed
    /// input is reported even for unknown vehicles.
    ///
    /// # Errors
    ///
    /// * `CoreError::InvalidInterval` for a missing start date or an end date
    ///   before the start date
    /// * `CoreError::NotFound` if the vehicle does not exist
    #[instrument(skip(self, terms), fields(vehicle_id = %vehicle_id))]
    pub async fn create_policy(&self, vehicle_id: VehicleId, terms: PolicyTerms) -> Result<InsurancePolicy, CoreError> {
        let period = terms.validate().inspect_err(|e| warn!(error = %e, "Rejected policy terms"))?;

        let vehicle = self.vehicles.get_vehicle(vehicle_id).await?;

        let policy = self
            .policies
            .insert_policy(NewPolicy {
                vehicle_id,
                provider: terms.provider,
                period,
            })
            .await?;

        info!(
            policy_id = %policy.id,
            vehicle = %vehicle.label(),
            provider = policy.provider_label(),
            "Policy registered"
        );
        Ok(policy)
    }

    /// Replaces the provider and dates of an existing policy
    ///
    /// # Errors
    ///
    /// * `CoreError::InvalidInterval` for invalid dates
    /// * `CoreError::NotFound` if the policy does not exist
    #[instrument(skip(self, terms), fields(policy_id = %policy_id))]
    pub async fn update_policy(&self, policy_id: PolicyId, terms: PolicyTerms) -> Result<InsurancePolicy, CoreError> {
        let period = terms.validate().inspect_err(|e| warn!(error = %e, "Rejected policy terms"))?;

        let mut policy = self.policies.get_policy(policy_id).await?;
        policy.apply(terms.provider, period);
        let saved = self.policies.save_policy(&policy).await?;

        info!(vehicle_id = %saved.vehicle_id, "Policy updated");
        Ok(saved)
    }
}
