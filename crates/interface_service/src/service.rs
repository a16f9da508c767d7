//! Service facade

use std::sync::Arc;

use tracing::instrument;
use validator::Validate;

use core_kernel::{parse_iso_date, CoreError, PolicyId, SupportedYears, VehicleId};
use domain_claims::{ClaimService, ClaimsPort};
use domain_history::HistoryAggregator;
use domain_policy::{PolicyPort, PolicyService, ValidityChecker};
use domain_vehicle::VehiclePort;

use crate::config::ServiceConfig;
use crate::dto::{
    ClaimDto, CreateClaimRequest, HistoryEventDto, InsuranceValidityResponse, PolicyResponse,
    PolicyUpsertRequest, VehicleDto,
};
use crate::error::ServiceError;

/// Entry point for every car insurance operation
#[derive(Clone)]
pub struct CarInsuranceService {
    vehicles: Arc<dyn VehiclePort>,
    validity: ValidityChecker,
    history: HistoryAggregator,
    policies: PolicyService,
    claims: ClaimService,
}

impl CarInsuranceService {
    pub fn new(
        vehicles: Arc<dyn VehiclePort>,
        policies: Arc<dyn PolicyPort>,
        claims: Arc<dyn ClaimsPort>,
        supported_years: SupportedYears,
    ) -> Self {
        Self {
            validity: ValidityChecker::new(vehicles.clone(), policies.clone())
                .with_supported_years(supported_years),
            history: HistoryAggregator::new(vehicles.clone(), policies.clone(), claims.clone()),
            policies: PolicyService::new(vehicles.clone(), policies),
            claims: ClaimService::new(vehicles.clone(), claims),
            vehicles,
        }
    }

    /// Wires every port to one store that implements all of them
    ///
    /// # Errors
    ///
    /// `ServiceError::BadRequest` if the configured year range is inverted
    pub fn from_store<S>(store: Arc<S>, config: &ServiceConfig) -> Result<Self, ServiceError>
    where
        S: VehiclePort + PolicyPort + ClaimsPort,
    {
        let years = config.supported_years()?;
        Ok(Self::new(store.clone(), store.clone(), store, years))
    }

    pub fn supported_years(&self) -> SupportedYears {
        self.validity.supported_years()
    }

    #[instrument(skip(self))]
    pub async fn list_vehicles(&self) -> Result<Vec<VehicleDto>, ServiceError> {
        let vehicles = self.vehicles.list_vehicles().await.map_err(CoreError::from)?;
        Ok(vehicles.into_iter().map(VehicleDto::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn list_policies(&self) -> Result<Vec<PolicyResponse>, ServiceError> {
        let policies = self.policies.list_policies().await?;
        Ok(policies.into_iter().map(PolicyResponse::from).collect())
    }

    /// Answers whether the vehicle was insured on `date`
    ///
    /// `date` must be `YYYY-MM-DD`.
    #[instrument(skip(self), fields(vehicle_id = %vehicle_id))]
    pub async fn insurance_valid(
        &self,
        vehicle_id: VehicleId,
        date: &str,
    ) -> Result<InsuranceValidityResponse, ServiceError> {
        let date = parse_iso_date(date).map_err(CoreError::from)?;
        let valid = self.validity.is_active_on(vehicle_id, date).await?;

        Ok(InsuranceValidityResponse {
            vehicle_id: vehicle_id.value(),
            date,
            valid,
        })
    }

    #[instrument(skip(self), fields(vehicle_id = %vehicle_id))]
    pub async fn history(&self, vehicle_id: VehicleId) -> Result<Vec<HistoryEventDto>, ServiceError> {
        let events = self.history.history(vehicle_id).await?;
        Ok(events.into_iter().map(HistoryEventDto::from).collect())
    }

    #[instrument(skip(self, request), fields(vehicle_id = %vehicle_id))]
    pub async fn create_policy(
        &self,
        vehicle_id: VehicleId,
        request: PolicyUpsertRequest,
    ) -> Result<PolicyResponse, ServiceError> {
        request.validate()?;
        let terms = request.into_terms()?;

        let policy = self.policies.create_policy(vehicle_id, terms).await?;
        Ok(policy.into())
    }

    #[instrument(skip(self, request), fields(policy_id = %policy_id))]
    pub async fn update_policy(
        &self,
        policy_id: PolicyId,
        request: PolicyUpsertRequest,
    ) -> Result<PolicyResponse, ServiceError> {
        request.validate()?;
        let terms = request.into_terms()?;

        let policy = self.policies.update_policy(policy_id, terms).await?;
        Ok(policy.into())
    }

    #[instrument(skip(self, request), fields(vehicle_id = %vehicle_id))]
    pub async fn register_claim(
        &self,
        vehicle_id: VehicleId,
        request: CreateClaimRequest,
    ) -> Result<ClaimDto, ServiceError> {
        request.validate()?;
        let claim = request.into_new_claim()?;

        let stored = self.claims.register_claim(vehicle_id, claim).await?;
        Ok(stored.into())
    }
}
