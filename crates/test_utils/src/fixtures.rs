//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data. The round-trip scenario is the reference
//! data set for end-to-end tests of validity and history.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, OwnerId, PolicyId, PortError, VehicleId};
use domain_vehicle::{Owner, Vehicle};
use infra_memory::InMemoryStore;

use crate::builders::{TestClaimBuilder, TestPolicyBuilder};

/// Builds a calendar date, panicking on an impossible one
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid fixture date {year}-{month}-{day}"))
}

/// Fixture for date test data
pub struct DateFixtures;

impl DateFixtures {
    /// First supported day under the default year range
    pub fn earliest_supported() -> NaiveDate {
        date(1900, 1, 1)
    }

    /// Last supported day under the default year range
    pub fn latest_supported() -> NaiveDate {
        date(2100, 12, 31)
    }

    /// Inputs `parse_iso_date` must reject
    pub fn malformed_inputs() -> &'static [&'static str] {
        &["2024-1-1", "2024/01/01", "20240101", "2024-02-30", "", "yesterday"]
    }
}

/// Fixture for vehicle test data
pub struct VehicleFixtures;

impl VehicleFixtures {
    pub fn dacia() -> Vehicle {
        Vehicle::new(VehicleId::new(1), "UU1ABC12345678901", "Dacia", "Logan", 2018).with_owner(Owner {
            id: OwnerId::new(1),
            name: "Ana Pop".to_string(),
            email: Some("ana.pop@example.com".to_string()),
        })
    }

    pub fn vw() -> Vehicle {
        Vehicle::new(VehicleId::new(2), "WVWZZZ1JZXW000001", "VW", "Golf", 2021).with_owner(Owner {
            id: OwnerId::new(2),
            name: "Bogdan Ionescu".to_string(),
            email: None,
        })
    }

    /// A vehicle with no owner on record
    pub fn unowned() -> Vehicle {
        Vehicle::new(VehicleId::new(3), "TMBJJ7NE0J0000001", "Skoda", "Octavia", 2017)
    }
}

/// The reference scenario
///
/// Vehicle 1 holds policy 1 (Allianz, 2024-01-01 to 2024-12-31), policy 2
/// (Generali, 2025-01-01 to 2025-12-31) and claim 1 (2024-06-15,
/// "fender bender", 500.00). Vehicle 2 has no records.
pub struct RoundTripScenario;

impl RoundTripScenario {
    pub const VEHICLE: VehicleId = VehicleId::new(1);
    pub const EMPTY_VEHICLE: VehicleId = VehicleId::new(2);
    pub const UNKNOWN_VEHICLE: VehicleId = VehicleId::new(999);
    pub const POLICY_A: PolicyId = PolicyId::new(1);
    pub const POLICY_B: PolicyId = PolicyId::new(2);
    pub const CLAIM_C: ClaimId = ClaimId::new(1);

    /// Seeds a fresh store with the scenario
    pub async fn store() -> InMemoryStore {
        Self::try_store()
            .await
            .unwrap_or_else(|err| panic!("failed to seed scenario: {err}"))
    }

    async fn try_store() -> Result<InMemoryStore, PortError> {
        let store = InMemoryStore::with_vehicles(vec![VehicleFixtures::dacia(), VehicleFixtures::vw()]).await?;

        store
            .seed_policy(
                TestPolicyBuilder::new()
                    .with_id(Self::POLICY_A)
                    .with_vehicle(Self::VEHICLE)
                    .with_provider("Allianz")
                    .with_period(date(2024, 1, 1), date(2024, 12, 31))
                    .build(),
            )
            .await?;
        store
            .seed_policy(
                TestPolicyBuilder::new()
                    .with_id(Self::POLICY_B)
                    .with_vehicle(Self::VEHICLE)
                    .with_provider("Generali")
                    .with_period(date(2025, 1, 1), date(2025, 12, 31))
                    .build(),
            )
            .await?;
        store
            .seed_claim(
                TestClaimBuilder::new()
                    .with_id(Self::CLAIM_C)
                    .with_vehicle(Self::VEHICLE)
                    .on(date(2024, 6, 15))
                    .with_description("fender bender")
                    .with_amount(dec!(500.00))
                    .build(),
            )
            .await?;

        Ok(store)
    }

    /// Dates the scenario vehicle is insured on
    pub fn covered_dates() -> Vec<NaiveDate> {
        vec![date(2024, 6, 1), date(2025, 6, 1), date(2024, 12, 31)]
    }

    /// Dates the scenario vehicle is not insured on
    pub fn uncovered_dates() -> Vec<NaiveDate> {
        vec![date(2023, 12, 31), date(2026, 1, 1)]
    }
}
