//! Insurance policy records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{CoreError, CoveragePeriod, PolicyId, VehicleId};

/// Label rendered when a policy has no provider on record
pub const UNKNOWN_PROVIDER: &str = "Unknown";

/// An insurance policy attached to a vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsurancePolicy {
    /// Unique identifier
    pub id: PolicyId,
    /// Owning vehicle
    pub vehicle_id: VehicleId,
    /// Insurer name
    pub provider: Option<String>,
    /// Dates of cover
    pub period: CoveragePeriod,
}

impl InsurancePolicy {
    pub fn new(
        id: PolicyId,
        vehicle_id: VehicleId,
        provider: Option<String>,
        period: CoveragePeriod,
    ) -> Self {
        Self {
            id,
            vehicle_id,
            provider,
            period,
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.period.start
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.period.end
    }

    /// Provider name, or "Unknown" when none is recorded
    pub fn provider_label(&self) -> &str {
        self.provider.as_deref().unwrap_or(UNKNOWN_PROVIDER)
    }

    /// Returns true if the policy provides cover on `date`
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.period.contains(date)
    }

    /// Replaces provider and dates with already validated terms
    pub fn apply(&mut self, provider: Option<String>, period: CoveragePeriod) {
        self.provider = provider;
        self.period = period;
    }
}

/// Policy terms as received from a caller, before validation
///
/// Used for both registration and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTerms {
    pub provider: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl PolicyTerms {
    pub fn new(provider: Option<String>, start_date: NaiveDate, end_date: Option<NaiveDate>) -> Self {
        Self {
            provider,
            start_date: Some(start_date),
            end_date,
        }
    }

    /// Checks the dates and returns the coverage period they describe
    ///
    /// # Errors
    ///
    /// `CoreError::InvalidInterval` if the start date is missing or the end
    /// date precedes it
    pub fn validate(&self) -> Result<CoveragePeriod, CoreError> {
        Ok(CoveragePeriod::from_parts(self.start_date, self.end_date)?)
    }
}

/// A validated policy waiting for the store to assign its id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPolicy {
    pub vehicle_id: VehicleId,
    pub provider: Option<String>,
    pub period: CoveragePeriod,
}
