//! Vehicle Domain Ports
//!
//! `VehiclePort` is the read side the core needs from storage, plus the
//! listing used by the registration surface.

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError, VehicleId};

use crate::vehicle::Vehicle;

/// Storage operations for vehicles
#[async_trait]
pub trait VehiclePort: DomainPort {
    /// Returns true if a vehicle with this id is on record
    async fn vehicle_exists(&self, id: VehicleId) -> Result<bool, PortError>;

    /// Retrieves a vehicle by id
    ///
    /// # Errors
    ///
    /// Returns `PortError::NotFound` if the vehicle does not exist
    async fn get_vehicle(&self, id: VehicleId) -> Result<Vehicle, PortError>;

    /// Lists all vehicles ordered by id
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, PortError>;
}
