//! Vehicle DTOs

use serde::Serialize;

use domain_vehicle::Vehicle;

/// A vehicle with its owner flattened in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDto {
    pub id: i64,
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year_of_manufacture: i32,
    pub owner_id: Option<i64>,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
}

impl From<Vehicle> for VehicleDto {
    fn from(vehicle: Vehicle) -> Self {
        let (owner_id, owner_name, owner_email) = match vehicle.owner {
            Some(owner) => (Some(owner.id.value()), Some(owner.name), owner.email),
            None => (None, None, None),
        };

        Self {
            id: vehicle.id.value(),
            vin: vehicle.vin,
            make: vehicle.make,
            model: vehicle.model,
            year_of_manufacture: vehicle.year_of_manufacture,
            owner_id,
            owner_name,
            owner_email,
        }
    }
}
