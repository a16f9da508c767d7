//! Ordered in-memory tables

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{ClaimId, DomainPort, PolicyId, PortError, VehicleId};
use domain_claims::{Claim, ClaimsPort, NewClaim};
use domain_policy::{InsurancePolicy, NewPolicy, PolicyPort};
use domain_vehicle::{Vehicle, VehiclePort};

/// Rows keyed by id plus the next id to hand out
#[derive(Debug)]
struct Table<K, V> {
    rows: BTreeMap<K, V>,
    next_id: i64,
}

impl<K: Ord, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<K: Ord + Copy + Into<i64>, V> Table<K, V> {
    fn allocate(&mut self) -> Result<i64, PortError> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or_else(sequence_exhausted)?;
        Ok(id)
    }

    /// Inserts with a caller-chosen id, keeping the sequence ahead of it
    fn put(&mut self, id: K, row: V) -> Result<(), PortError> {
        let after = id.into().checked_add(1).ok_or_else(sequence_exhausted)?;
        self.next_id = self.next_id.max(after);
        self.rows.insert(id, row);
        Ok(())
    }
}

fn sequence_exhausted() -> PortError {
    PortError::conflict("id sequence exhausted")
}

/// In-memory implementation of every storage port
#[derive(Debug, Default)]
pub struct InMemoryStore {
    vehicles: RwLock<Table<VehicleId, Vehicle>>,
    policies: RwLock<Table<PolicyId, InsurancePolicy>>,
    claims: RwLock<Table<ClaimId, Claim>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the vehicle table
    pub async fn with_vehicles(vehicles: Vec<Vehicle>) -> Result<Self, PortError> {
        let store = Self::new();
        for vehicle in vehicles {
            store.insert_vehicle(vehicle).await?;
        }
        Ok(store)
    }

    /// Adds or replaces a vehicle under its own id
    ///
    /// # Errors
    ///
    /// `PortError::Conflict` if the id is `i64::MAX`, which would leave no
    /// id for the next insert
    pub async fn insert_vehicle(&self, vehicle: Vehicle) -> Result<(), PortError> {
        self.vehicles.write().await.put(vehicle.id, vehicle)
    }

    /// Adds or replaces a policy under its own id
    ///
    /// Unlike `insert_policy` this does not check the vehicle reference.
    pub async fn seed_policy(&self, policy: InsurancePolicy) -> Result<(), PortError> {
        self.policies.write().await.put(policy.id, policy)
    }

    /// Adds or replaces a claim under its own id
    pub async fn seed_claim(&self, claim: Claim) -> Result<(), PortError> {
        self.claims.write().await.put(claim.id, claim)
    }

    async fn ensure_vehicle(&self, vehicle_id: VehicleId) -> Result<(), PortError> {
        if self.vehicles.read().await.rows.contains_key(&vehicle_id) {
            Ok(())
        } else {
            Err(PortError::not_found(VehicleId::entity(), vehicle_id))
        }
    }
}

impl DomainPort for InMemoryStore {}

#[async_trait]
impl VehiclePort for InMemoryStore {
    async fn vehicle_exists(&self, id: VehicleId) -> Result<bool, PortError> {
        Ok(self.vehicles.read().await.rows.contains_key(&id))
    }

    async fn get_vehicle(&self, id: VehicleId) -> Result<Vehicle, PortError> {
        self.vehicles
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found(VehicleId::entity(), id))
    }

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, PortError> {
        Ok(self.vehicles.read().await.rows.values().cloned().collect())
    }
}

#[async_trait]
impl PolicyPort for InMemoryStore {
    async fn find_policies_by_vehicle(&self, vehicle_id: VehicleId) -> Result<Vec<InsurancePolicy>, PortError> {
        Ok(self
            .policies
            .read()
            .await
            .rows
            .values()
            .filter(|p| p.vehicle_id == vehicle_id)
            .cloned()
            .collect())
    }

    async fn get_policy(&self, id: PolicyId) -> Result<InsurancePolicy, PortError> {
        self.policies
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found(PolicyId::entity(), id))
    }

    async fn list_policies(&self) -> Result<Vec<InsurancePolicy>, PortError> {
        Ok(self.policies.read().await.rows.values().cloned().collect())
    }

    async fn insert_policy(&self, policy: NewPolicy) -> Result<InsurancePolicy, PortError> {
        self.ensure_vehicle(policy.vehicle_id).await?;

        let mut table = self.policies.write().await;
        let id = PolicyId::new(table.allocate()?);
        let stored = InsurancePolicy::new(id, policy.vehicle_id, policy.provider, policy.period);
        table.rows.insert(id, stored.clone());

        debug!(policy_id = %id, "Inserted policy");
        Ok(stored)
    }

    async fn save_policy(&self, policy: &InsurancePolicy) -> Result<InsurancePolicy, PortError> {
        let mut table = self.policies.write().await;
        let row = table
            .rows
            .get_mut(&policy.id)
            .ok_or_else(|| PortError::not_found(PolicyId::entity(), policy.id))?;
        if row.vehicle_id != policy.vehicle_id {
            return Err(PortError::conflict(format!(
                "policy {} belongs to vehicle {}",
                policy.id, row.vehicle_id
            )));
        }
        *row = policy.clone();
        Ok(policy.clone())
    }
}

#[async_trait]
impl ClaimsPort for InMemoryStore {
    async fn find_claims_by_vehicle(&self, vehicle_id: VehicleId) -> Result<Vec<Claim>, PortError> {
        Ok(self
            .claims
            .read()
            .await
            .rows
            .values()
            .filter(|c| c.vehicle_id == vehicle_id)
            .cloned()
            .collect())
    }

    async fn insert_claim(&self, vehicle_id: VehicleId, claim: NewClaim) -> Result<Claim, PortError> {
        self.ensure_vehicle(vehicle_id).await?;

        let mut table = self.claims.write().await;
        let id = ClaimId::new(table.allocate()?);
        let stored = claim.into_claim(id, vehicle_id);
        table.rows.insert(id, stored.clone());

        debug!(claim_id = %id, "Inserted claim");
        Ok(stored)
    }
}
