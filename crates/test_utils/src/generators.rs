//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{ClaimId, CoveragePeriod, PolicyId, VehicleId};
use domain_claims::Claim;
use domain_policy::InsurancePolicy;

use crate::builders::TestClaimBuilder;
use crate::fixtures::date;

/// Strategy for dates within a few years of 2024
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..1500).prop_map(|offset| date(2022, 1, 1) + Days::new(offset))
}

/// Strategy for dates anywhere in the default supported range
pub fn supported_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1900i32..=2100, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| date(y, m, d))
}

/// Strategy for dates whose year is outside the default supported range
pub fn unsupported_date_strategy() -> impl Strategy<Value = NaiveDate> {
    prop_oneof![
        (1i32..1900, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| date(y, m, d)),
        (2101i32..9999, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| date(y, m, d)),
    ]
}

/// Strategy for valid coverage periods, roughly one in four open-ended
pub fn period_strategy() -> impl Strategy<Value = CoveragePeriod> {
    (date_strategy(), prop::option::weighted(0.75, 0u64..400)).prop_map(|(start, length)| match length {
        Some(days) => CoveragePeriod {
            start,
            end: Some(start + Days::new(days)),
        },
        None => CoveragePeriod::open_ended(start),
    })
}

/// Strategy for exact positive amounts with two decimal places
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for policies of one vehicle with distinct ids
pub fn policies_strategy(vehicle_id: VehicleId, max: usize) -> impl Strategy<Value = Vec<InsurancePolicy>> {
    prop::collection::vec((period_strategy(), prop::option::of("[A-Z][a-z]{2,8}")), 0..=max).prop_map(
        move |terms| {
            terms
                .into_iter()
                .enumerate()
                .map(|(i, (period, provider))| {
                    InsurancePolicy::new(PolicyId::new(i as i64 + 1), vehicle_id, provider, period)
                })
                .collect()
        },
    )
}

/// Strategy for claims of one vehicle with distinct ids
pub fn claims_strategy(vehicle_id: VehicleId, max: usize) -> impl Strategy<Value = Vec<Claim>> {
    prop::collection::vec((date_strategy(), amount_strategy(), "[a-z ]{1,20}[a-z]"), 0..=max).prop_map(
        move |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (on, amount, description))| {
                    TestClaimBuilder::new()
                        .with_id(ClaimId::new(i as i64 + 1))
                        .with_vehicle(vehicle_id)
                        .on(on)
                        .with_description(description)
                        .with_amount(amount)
                        .build()
                })
                .collect()
        },
    )
}
