//! Claims DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{parse_iso_date, CoreError};
use domain_claims::{Claim, NewClaim};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClaimRequest {
    /// `YYYY-MM-DD`
    pub claim_date: String,
    #[validate(length(max = 1000, message = "description must be at most 1000 characters"))]
    pub description: String,
    pub amount: Decimal,
}

impl CreateClaimRequest {
    /// Parses the claim date into a domain submission
    pub fn into_new_claim(self) -> Result<NewClaim, CoreError> {
        let claim_date = parse_iso_date(&self.claim_date)?;
        Ok(NewClaim::new(claim_date, self.description, self.amount))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDto {
    pub id: i64,
    pub vehicle_id: i64,
    pub claim_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}

impl From<Claim> for ClaimDto {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id.value(),
            vehicle_id: claim.vehicle_id.value(),
            claim_date: claim.claim_date,
            description: claim.description,
            amount: claim.amount,
        }
    }
}
