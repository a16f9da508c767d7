//! History aggregation
//!
//! Collects a vehicle's policies and claims and merges them into one
//! timeline.

use std::sync::Arc;

use tracing::{debug, instrument};

use core_kernel::{CoreError, VehicleId};
use domain_claims::{Claim, ClaimsPort};
use domain_policy::{InsurancePolicy, PolicyPort};
use domain_vehicle::VehiclePort;

use crate::event::HistoryEvent;

/// Builds vehicle timelines from the policy and claim stores
#[derive(Clone)]
pub struct HistoryAggregator {
    vehicles: Arc<dyn VehiclePort>,
    policies: Arc<dyn PolicyPort>,
    claims: Arc<dyn ClaimsPort>,
}

impl std::fmt::Debug for HistoryAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryAggregator").finish_non_exhaustive()
    }
}

impl HistoryAggregator {
    pub fn new(
        vehicles: Arc<dyn VehiclePort>,
        policies: Arc<dyn PolicyPort>,
        claims: Arc<dyn ClaimsPort>,
    ) -> Self {
        Self {
            vehicles,
            policies,
            claims,
        }
    }

    /// Returns the ordered history of a vehicle
    ///
    /// A known vehicle with no records yields an empty timeline.
    ///
    /// # Errors
    ///
    /// * `CoreError::NotFound` if the vehicle does not exist
    /// * `CoreError::Port` if a store read fails
    #[instrument(skip(self), fields(vehicle_id = %vehicle_id))]
    pub async fn history(&self, vehicle_id: VehicleId) -> Result<Vec<HistoryEvent>, CoreError> {
        if !self.vehicles.vehicle_exists(vehicle_id).await? {
            return Err(CoreError::not_found(VehicleId::entity(), vehicle_id));
        }

        let policies = self.policies.find_policies_by_vehicle(vehicle_id).await?;
        let claims = self.claims.find_claims_by_vehicle(vehicle_id).await?;

        let events = merge_timeline(&policies, &claims);
        debug!(
            policies = policies.len(),
            claims = claims.len(),
            events = events.len(),
            "History assembled"
        );
        Ok(events)
    }
}

/// Expands records into events and sorts them
///
/// Each policy contributes a start event and, unless open-ended, an end
/// event. Each claim contributes one event. The result does not depend on
/// the order of either input slice.
pub fn merge_timeline(policies: &[InsurancePolicy], claims: &[Claim]) -> Vec<HistoryEvent> {
    let mut events = Vec::with_capacity(policies.len() * 2 + claims.len());

    for policy in policies {
        events.push(HistoryEvent::policy_started(policy));
        events.extend(HistoryEvent::policy_ended(policy));
    }
    events.extend(claims.iter().map(HistoryEvent::claim_registered));

    events.sort();
    events
}
