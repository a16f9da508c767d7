//! Claim records

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, CoreError, VehicleId};

/// A claim registered against a vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Vehicle the claim was made for
    pub vehicle_id: VehicleId,
    /// Date of the incident
    pub claim_date: NaiveDate,
    /// Free-text account of what happened
    pub description: String,
    /// Amount claimed, exact decimal
    pub amount: Decimal,
}

/// A claim as submitted, before the store assigns its id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClaim {
    pub claim_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}

impl NewClaim {
    pub fn new(claim_date: NaiveDate, description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            claim_date,
            description: description.into(),
            amount,
        }
    }

    /// Checks the submission
    ///
    /// # Errors
    ///
    /// `CoreError::Validation` if the description is blank or the amount is
    /// not strictly positive
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.description.trim().is_empty() {
            return Err(CoreError::validation("description must not be blank"));
        }
        if self.amount <= Decimal::ZERO {
            return Err(CoreError::validation(format!(
                "amount must be positive, got {}",
                self.amount
            )));
        }
        Ok(())
    }

    /// Attaches the stored identity
    pub fn into_claim(self, id: ClaimId, vehicle_id: VehicleId) -> Claim {
        Claim {
            id,
            vehicle_id,
            claim_date: self.claim_date,
            description: self.description,
            amount: self.amount,
        }
    }
}
