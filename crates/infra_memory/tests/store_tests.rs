//! Tests for InMemoryStore

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, CoveragePeriod, PolicyId, PortError, VehicleId};
use domain_claims::{ClaimsPort, NewClaim};
use domain_policy::{InsurancePolicy, NewPolicy, PolicyPort};
use domain_vehicle::{Vehicle, VehiclePort};
use infra_memory::InMemoryStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn two_vehicle_store() -> InMemoryStore {
    InMemoryStore::with_vehicles(vec![
        Vehicle::new(VehicleId::new(2), "VIN2", "Skoda", "Octavia", 2019),
        Vehicle::new(VehicleId::new(1), "VIN1", "Dacia", "Logan", 2017),
    ])
    .await
    .unwrap()
}

fn new_policy(vehicle: i64, start: NaiveDate) -> NewPolicy {
    NewPolicy {
        vehicle_id: VehicleId::new(vehicle),
        provider: Some("Allianz".to_string()),
        period: CoveragePeriod::open_ended(start),
    }
}

#[tokio::test]
async fn test_vehicles_listed_by_id() {
    let store = two_vehicle_store().await;

    let ids: Vec<_> = store.list_vehicles().await.unwrap().into_iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![VehicleId::new(1), VehicleId::new(2)]);
    assert!(store.vehicle_exists(VehicleId::new(2)).await.unwrap());
    assert!(!store.vehicle_exists(VehicleId::new(3)).await.unwrap());
}

#[tokio::test]
async fn test_get_missing_vehicle() {
    let store = InMemoryStore::new();
    let err = store.get_vehicle(VehicleId::new(5)).await.unwrap_err();
    assert!(matches!(err, PortError::NotFound { .. }));
}

#[tokio::test]
async fn test_policy_ids_assigned_in_sequence() {
    let store = two_vehicle_store().await;

    let first = store.insert_policy(new_policy(1, date(2024, 1, 1))).await.unwrap();
    let second = store.insert_policy(new_policy(2, date(2024, 2, 1))).await.unwrap();

    assert_eq!(first.id, PolicyId::new(1));
    assert_eq!(second.id, PolicyId::new(2));
    assert_eq!(store.find_policies_by_vehicle(VehicleId::new(1)).await.unwrap(), vec![first]);
}

#[tokio::test]
async fn test_insert_policy_for_unknown_vehicle() {
    let store = two_vehicle_store().await;
    let err = store.insert_policy(new_policy(9, date(2024, 1, 1))).await.unwrap_err();

    assert!(err.is_not_found());
    assert!(store.list_policies().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_seeded_ids_advance_sequence() {
    let store = two_vehicle_store().await;
    store
        .seed_policy(InsurancePolicy::new(
            PolicyId::new(10),
            VehicleId::new(1),
            None,
            CoveragePeriod::open_ended(date(2024, 1, 1)),
        ))
        .await
        .unwrap();

    let inserted = store.insert_policy(new_policy(1, date(2025, 1, 1))).await.unwrap();
    assert_eq!(inserted.id, PolicyId::new(11));
}

#[tokio::test]
async fn test_seeding_max_policy_id_is_refused() {
    let store = two_vehicle_store().await;
    let err = store
        .seed_policy(InsurancePolicy::new(
            PolicyId::new(i64::MAX),
            VehicleId::new(1),
            None,
            CoveragePeriod::open_ended(date(2024, 1, 1)),
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, PortError::Conflict { .. }));
    assert!(store.list_policies().await.unwrap().is_empty());

    let inserted = store.insert_policy(new_policy(1, date(2025, 1, 1))).await.unwrap();
    assert_eq!(inserted.id, PolicyId::new(1));
}

#[tokio::test]
async fn test_insert_after_last_id_reports_conflict() {
    let store = two_vehicle_store().await;
    store
        .seed_policy(InsurancePolicy::new(
            PolicyId::new(i64::MAX - 1),
            VehicleId::new(1),
            None,
            CoveragePeriod::open_ended(date(2024, 1, 1)),
        ))
        .await
        .unwrap();

    let err = store.insert_policy(new_policy(1, date(2025, 1, 1))).await.unwrap_err();
    assert!(matches!(err, PortError::Conflict { .. }));
    assert_eq!(store.list_policies().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_seeding_max_claim_id_is_refused() {
    let store = two_vehicle_store().await;
    let claim = NewClaim::new(date(2024, 6, 15), "mirror", dec!(10))
        .into_claim(ClaimId::new(i64::MAX), VehicleId::new(1));

    assert!(matches!(store.seed_claim(claim).await, Err(PortError::Conflict { .. })));
    assert!(store.find_claims_by_vehicle(VehicleId::new(1)).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_save_policy_replaces_row() {
    let store = two_vehicle_store().await;
    let mut policy = store.insert_policy(new_policy(1, date(2024, 1, 1))).await.unwrap();

    policy.apply(None, CoveragePeriod::bounded(date(2024, 1, 1), date(2024, 6, 30)).unwrap());
    store.save_policy(&policy).await.unwrap();

    let stored = store.get_policy(policy.id).await.unwrap();
    assert_eq!(stored.end_date(), Some(date(2024, 6, 30)));
    assert_eq!(stored.provider, None);
}

#[tokio::test]
async fn test_save_unknown_policy() {
    let store = two_vehicle_store().await;
    let ghost = InsurancePolicy::new(
        PolicyId::new(3),
        VehicleId::new(1),
        None,
        CoveragePeriod::open_ended(date(2024, 1, 1)),
    );

    assert!(store.save_policy(&ghost).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_save_cannot_move_policy_between_vehicles() {
    let store = two_vehicle_store().await;
    let mut policy = store.insert_policy(new_policy(1, date(2024, 1, 1))).await.unwrap();
    policy.vehicle_id = VehicleId::new(2);

    let err = store.save_policy(&policy).await.unwrap_err();
    assert!(matches!(err, PortError::Conflict { .. }));
}

#[tokio::test]
async fn test_claims_filtered_by_vehicle() {
    let store = two_vehicle_store().await;

    let claim = store
        .insert_claim(VehicleId::new(2), NewClaim::new(date(2024, 6, 15), "mirror", dec!(120.00)))
        .await
        .unwrap();

    assert_eq!(claim.id, ClaimId::new(1));
    assert!(store.find_claims_by_vehicle(VehicleId::new(1)).await.unwrap().is_empty());
    assert_eq!(store.find_claims_by_vehicle(VehicleId::new(2)).await.unwrap(), vec![claim]);
}

#[tokio::test]
async fn test_insert_claim_for_unknown_vehicle() {
    let store = InMemoryStore::new();
    let err = store
        .insert_claim(VehicleId::new(1), NewClaim::new(date(2024, 6, 15), "mirror", dec!(1)))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}
