//! Tests for domain_claims

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, CoreError, DomainPort, PortError, VehicleId};
use domain_claims::{Claim, ClaimService, ClaimsPort, NewClaim};
use domain_vehicle::{Vehicle, VehiclePort};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// NewClaim validation
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_valid_claim() {
        let claim = NewClaim::new(date(2024, 6, 15), "fender bender", dec!(500.00));
        assert!(claim.validate().is_ok());
    }

    #[test]
    fn test_blank_description_rejected() {
        let claim = NewClaim::new(date(2024, 6, 15), "   ", dec!(500.00));
        let err = claim.validate().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn test_zero_amount_rejected() {
        let claim = NewClaim::new(date(2024, 6, 15), "scratch", dec!(0));
        assert!(matches!(claim.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let claim = NewClaim::new(date(2024, 6, 15), "scratch", dec!(-10.50));
        let err = claim.validate().unwrap_err();
        assert!(err.to_string().contains("-10.50"));
    }

    #[test]
    fn test_smallest_positive_amount_accepted() {
        let claim = NewClaim::new(date(2024, 6, 15), "scratch", dec!(0.01));
        assert!(claim.validate().is_ok());
    }

    #[test]
    fn test_into_claim_keeps_exact_amount() {
        let claim = NewClaim::new(date(2024, 6, 15), "hail damage", dec!(1234.50))
            .into_claim(ClaimId::new(3), VehicleId::new(1));

        assert_eq!(claim.id, ClaimId::new(3));
        assert_eq!(claim.amount.to_string(), "1234.50");
    }
}

// ============================================================================
// ClaimService
// ============================================================================

#[derive(Default)]
struct StubStore {
    vehicles: Vec<VehicleId>,
    claims: Mutex<Vec<Claim>>,
}

impl DomainPort for StubStore {}

#[async_trait]
impl VehiclePort for StubStore {
    async fn vehicle_exists(&self, id: VehicleId) -> Result<bool, PortError> {
        Ok(self.vehicles.contains(&id))
    }

    async fn get_vehicle(&self, id: VehicleId) -> Result<Vehicle, PortError> {
        self.vehicles
            .contains(&id)
            .then(|| Vehicle::new(id, format!("VIN{id}"), "Dacia", "Logan", 2018))
            .ok_or_else(|| PortError::not_found("Vehicle", id))
    }

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, PortError> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl ClaimsPort for StubStore {
    async fn find_claims_by_vehicle(&self, vehicle_id: VehicleId) -> Result<Vec<Claim>, PortError> {
        Ok(self
            .claims
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.vehicle_id == vehicle_id)
            .cloned()
            .collect())
    }

    async fn insert_claim(&self, vehicle_id: VehicleId, claim: NewClaim) -> Result<Claim, PortError> {
        let mut claims = self.claims.lock().unwrap();
        let stored = claim.into_claim(ClaimId::new(claims.len() as i64 + 1), vehicle_id);
        claims.push(stored.clone());
        Ok(stored)
    }
}

mod service_tests {
    use super::*;

    fn service(vehicles: Vec<i64>) -> (ClaimService, Arc<StubStore>) {
        let store = Arc::new(StubStore {
            vehicles: vehicles.into_iter().map(VehicleId::new).collect(),
            ..Default::default()
        });
        (ClaimService::new(store.clone(), store.clone()), store)
    }

    #[tokio::test]
    async fn test_register_claim() {
        let (service, store) = service(vec![1]);

        let claim = service
            .register_claim(VehicleId::new(1), NewClaim::new(date(2024, 6, 15), "fender bender", dec!(500.00)))
            .await
            .unwrap();

        assert_eq!(claim.id, ClaimId::new(1));
        assert_eq!(claim.vehicle_id, VehicleId::new(1));
        assert_eq!(store.find_claims_by_vehicle(VehicleId::new(1)).await.unwrap(), vec![claim]);
    }

    #[tokio::test]
    async fn test_register_claim_unknown_vehicle() {
        let (service, store) = service(vec![]);

        let err = service
            .register_claim(VehicleId::new(9), NewClaim::new(date(2024, 6, 15), "theft", dec!(9000)))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Vehicle 9 not found");
        assert!(store.claims.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_invalid_claim_stores_nothing() {
        let (service, store) = service(vec![1]);

        let err = service
            .register_claim(VehicleId::new(1), NewClaim::new(date(2024, 6, 15), "", dec!(100)))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
        assert!(store.claims.lock().unwrap().is_empty());
    }
}
