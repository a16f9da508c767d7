//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, CoveragePeriod, PolicyId, VehicleId};
use domain_claims::{Claim, NewClaim};
use domain_policy::{InsurancePolicy, PolicyTerms};

use crate::fixtures::date;

/// Builder for constructing test policies
///
/// Defaults to policy 1 on vehicle 1, provider "Allianz", covering 2024.
pub struct TestPolicyBuilder {
    id: PolicyId,
    vehicle_id: VehicleId,
    provider: Option<String>,
    start: NaiveDate,
    end: Option<NaiveDate>,
}

impl Default for TestPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: PolicyId::new(1),
            vehicle_id: VehicleId::new(1),
            provider: Some("Allianz".to_string()),
            start: date(2024, 1, 1),
            end: Some(date(2024, 12, 31)),
        }
    }

    pub fn with_id(mut self, id: PolicyId) -> Self {
        self.id = id;
        self
    }

    pub fn with_vehicle(mut self, vehicle_id: VehicleId) -> Self {
        self.vehicle_id = vehicle_id;
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Clears the provider so it renders as "Unknown"
    pub fn without_provider(mut self) -> Self {
        self.provider = None;
        self
    }

    pub fn with_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = start;
        self.end = Some(end);
        self
    }

    /// Makes the policy open-ended from `start`
    pub fn open_ended_from(mut self, start: NaiveDate) -> Self {
        self.start = start;
        self.end = None;
        self
    }

    /// Builds the policy
    ///
    /// # Panics
    ///
    /// Panics if the end date precedes the start date
    pub fn build(self) -> InsurancePolicy {
        let period = CoveragePeriod::new(self.start, self.end)
            .unwrap_or_else(|e| panic!("invalid test policy period: {e}"));
        InsurancePolicy::new(self.id, self.vehicle_id, self.provider, period)
    }

    /// Returns the same data as registration terms
    pub fn terms(&self) -> PolicyTerms {
        PolicyTerms::new(self.provider.clone(), self.start, self.end)
    }
}

/// Builder for constructing test claims
pub struct TestClaimBuilder {
    id: ClaimId,
    vehicle_id: VehicleId,
    claim_date: NaiveDate,
    description: String,
    amount: Decimal,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: ClaimId::new(1),
            vehicle_id: VehicleId::new(1),
            claim_date: date(2024, 6, 15),
            description: "fender bender".to_string(),
            amount: dec!(500.00),
        }
    }

    pub fn with_id(mut self, id: ClaimId) -> Self {
        self.id = id;
        self
    }

    pub fn with_vehicle(mut self, vehicle_id: VehicleId) -> Self {
        self.vehicle_id = vehicle_id;
        self
    }

    pub fn on(mut self, claim_date: NaiveDate) -> Self {
        self.claim_date = claim_date;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Returns the claim as it would be submitted
    pub fn submission(&self) -> NewClaim {
        NewClaim::new(self.claim_date, self.description.clone(), self.amount)
    }

    pub fn build(self) -> Claim {
        let (id, vehicle_id) = (self.id, self.vehicle_id);
        self.submission().into_claim(id, vehicle_id)
    }
}
