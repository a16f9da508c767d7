//! Policy Domain Ports
//!
//! `find_policies_by_vehicle` is the only operation the validity check and
//! the history timeline read. The remaining operations back the
//! registration surface in `PolicyService`.

use async_trait::async_trait;

use core_kernel::{DomainPort, PolicyId, PortError, VehicleId};

use crate::policy::{InsurancePolicy, NewPolicy};

/// Storage operations for insurance policies
#[async_trait]
pub trait PolicyPort: DomainPort {
    /// Returns every policy attached to the vehicle, in any order
    async fn find_policies_by_vehicle(&self, vehicle_id: VehicleId) -> Result<Vec<InsurancePolicy>, PortError>;

    /// Retrieves a policy by id
    ///
    /// # Errors
    ///
    /// Returns `PortError::NotFound` if the policy does not exist
    async fn get_policy(&self, id: PolicyId) -> Result<InsurancePolicy, PortError>;

    /// Lists all policies ordered by id
    async fn list_policies(&self) -> Result<Vec<InsurancePolicy>, PortError>;

    /// Stores a new policy and returns it with its assigned id
    async fn insert_policy(&self, policy: NewPolicy) -> Result<InsurancePolicy, PortError>;

    /// Overwrites an existing policy
    ///
    /// # Errors
    ///
    /// Returns `PortError::NotFound` if no policy with that id is stored
    async fn save_policy(&self, policy: &InsurancePolicy) -> Result<InsurancePolicy, PortError>;
}
