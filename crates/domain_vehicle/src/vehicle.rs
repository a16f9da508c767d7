//! Vehicle records

use serde::{Deserialize, Serialize};

use core_kernel::{OwnerId, VehicleId};

/// The registered keeper of a vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    pub name: String,
    pub email: Option<String>,
}

/// An insurable vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier
    pub id: VehicleId,
    /// Vehicle identification number
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year_of_manufacture: i32,
    /// Current owner, if one is on record
    pub owner: Option<Owner>,
}

impl Vehicle {
    pub fn new(
        id: VehicleId,
        vin: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        year_of_manufacture: i32,
    ) -> Self {
        Self {
            id,
            vin: vin.into(),
            make: make.into(),
            model: model.into(),
            year_of_manufacture,
            owner: None,
        }
    }

    pub fn with_owner(mut self, owner: Owner) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Short label used in logs
    pub fn label(&self) -> String {
        format!("{} {} ({})", self.make, self.model, self.vin)
    }
}
