//! Insurance validity check
//!
//! Answers whether a vehicle had at least one policy in force on a date.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, instrument};

use core_kernel::{CoreError, SupportedYears, VehicleId};
use domain_vehicle::VehiclePort;

use crate::ports::PolicyPort;

/// Decides whether any policy of a vehicle covers a given date
///
/// Holds only port handles and the supported year window, so a single
/// instance can be shared freely between tasks.
#[derive(Clone)]
pub struct ValidityChecker {
    vehicles: Arc<dyn VehiclePort>,
    policies: Arc<dyn PolicyPort>,
    supported_years: SupportedYears,
}

impl ValidityChecker {
    /// Creates a checker accepting the default 1900-2100 year window
    pub fn new(vehicles: Arc<dyn VehiclePort>, policies: Arc<dyn PolicyPort>) -> Self {
        Self {
            vehicles,
            policies,
            supported_years: SupportedYears::default(),
        }
    }

    pub fn with_supported_years(mut self, supported_years: SupportedYears) -> Self {
        self.supported_years = supported_years;
        self
    }

    pub fn supported_years(&self) -> SupportedYears {
        self.supported_years
    }

    /// Returns true if at least one policy of the vehicle covers `date`
    ///
    /// Coverage is inclusive at both ends; an open-ended policy covers every
    /// date from its start.
    ///
    /// # Errors
    ///
    /// * `CoreError::InvalidDate` if the year is outside the supported window.
    ///   Checked before the vehicle lookup.
    /// * `CoreError::NotFound` if the vehicle does not exist
    /// * `CoreError::Port` if storage fails
    #[instrument(skip(self), fields(vehicle_id = %vehicle_id, date = %date))]
    pub async fn is_active_on(&self, vehicle_id: VehicleId, date: NaiveDate) -> Result<bool, CoreError> {
        self.supported_years.check(date)?;

        if !self.vehicles.vehicle_exists(vehicle_id).await? {
            return Err(CoreError::not_found(VehicleId::entity(), vehicle_id));
        }

        let policies = self.policies.find_policies_by_vehicle(vehicle_id).await?;
        let active = policies.iter().any(|policy| policy.covers(date));

        debug!(policies = policies.len(), active, "Evaluated policy coverage");
        Ok(active)
    }
}

impl std::fmt::Debug for ValidityChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidityChecker")
            .field("supported_years", &self.supported_years)
            .finish_non_exhaustive()
    }
}
