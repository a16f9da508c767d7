//! Policy DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{parse_iso_date, CoreError};
use domain_policy::{InsurancePolicy, PolicyTerms};

/// Body of both policy registration and policy update
///
/// Dates are `YYYY-MM-DD`. A missing `endDate` registers an open-ended
/// policy. A blank `provider` is stored as no provider.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PolicyUpsertRequest {
    #[validate(length(max = 100, message = "provider must be at most 100 characters"))]
    pub provider: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl PolicyUpsertRequest {
    /// Parses the dates into domain terms
    ///
    /// Interval rules are left to `PolicyTerms::validate`.
    pub fn into_terms(self) -> Result<PolicyTerms, CoreError> {
        let parse = |raw: Option<String>| raw.as_deref().map(parse_iso_date).transpose();

        Ok(PolicyTerms {
            provider: self.provider.filter(|p| !p.trim().is_empty()),
            start_date: parse(self.start_date)?,
            end_date: parse(self.end_date)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyResponse {
    pub id: i64,
    pub vehicle_id: i64,
    pub provider: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl From<InsurancePolicy> for PolicyResponse {
    fn from(policy: InsurancePolicy) -> Self {
        Self {
            id: policy.id.value(),
            vehicle_id: policy.vehicle_id.value(),
            start_date: policy.start_date(),
            end_date: policy.end_date(),
            provider: policy.provider,
        }
    }
}

/// Answer to "was this vehicle insured on this date?"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceValidityResponse {
    pub vehicle_id: i64,
    pub date: NaiveDate,
    pub valid: bool,
}
