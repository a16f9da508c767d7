//! History events
//!
//! A `HistoryEvent` is derived on every request and never stored. Each
//! variant carries its date, a rendered description and the id of the record
//! it came from.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, PolicyId};
use domain_claims::Claim;
use domain_policy::InsurancePolicy;

/// Tag identifying the kind of a history event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HistoryEventType {
    PolicyStarted,
    PolicyEnded,
    ClaimRegistered,
}

impl HistoryEventType {
    /// Position among events sharing a date
    ///
    /// Cover lapsing is reported before anything new starts or is claimed.
    pub const fn same_day_rank(self) -> u8 {
        match self {
            HistoryEventType::PolicyEnded => 0,
            HistoryEventType::PolicyStarted => 1,
            HistoryEventType::ClaimRegistered => 2,
        }
    }
}

/// One dated entry of a vehicle's timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEvent {
    PolicyStarted {
        policy_id: PolicyId,
        date: NaiveDate,
        description: String,
    },
    PolicyEnded {
        policy_id: PolicyId,
        date: NaiveDate,
        description: String,
    },
    ClaimRegistered {
        claim_id: ClaimId,
        date: NaiveDate,
        description: String,
    },
}

/// Composite ordering key of a history event
///
/// Field order is significant: the derived `Ord` compares date first, then
/// rank, then tag, then reference id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HistorySortKey {
    pub date: NaiveDate,
    pub rank: u8,
    pub event_type: HistoryEventType,
    pub ref_id: i64,
}

impl HistoryEvent {
    pub fn policy_started(policy: &InsurancePolicy) -> Self {
        let date = policy.start_date();
        HistoryEvent::PolicyStarted {
            policy_id: policy.id,
            date,
            description: format!(
                "Policy #{} ({}) started on {}",
                policy.id,
                policy.provider_label(),
                date
            ),
        }
    }

    /// Returns `None` for an open-ended policy
    pub fn policy_ended(policy: &InsurancePolicy) -> Option<Self> {
        let date = policy.end_date()?;
        Some(HistoryEvent::PolicyEnded {
            policy_id: policy.id,
            date,
            description: format!(
                "Policy #{} ({}) ended on {}",
                policy.id,
                policy.provider_label(),
                date
            ),
        })
    }

    pub fn claim_registered(claim: &Claim) -> Self {
        HistoryEvent::ClaimRegistered {
            claim_id: claim.id,
            date: claim.claim_date,
            description: format!(
                "Claim #{} on {} for amount {} — {}",
                claim.id, claim.claim_date, claim.amount, claim.description
            ),
        }
    }

    pub fn event_type(&self) -> HistoryEventType {
        match self {
            HistoryEvent::PolicyStarted { .. } => HistoryEventType::PolicyStarted,
            HistoryEvent::PolicyEnded { .. } => HistoryEventType::PolicyEnded,
            HistoryEvent::ClaimRegistered { .. } => HistoryEventType::ClaimRegistered,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            HistoryEvent::PolicyStarted { date, .. }
            | HistoryEvent::PolicyEnded { date, .. }
            | HistoryEvent::ClaimRegistered { date, .. } => *date,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            HistoryEvent::PolicyStarted { description, .. }
            | HistoryEvent::PolicyEnded { description, .. }
            | HistoryEvent::ClaimRegistered { description, .. } => description,
        }
    }

    /// Id of the originating policy or claim
    ///
    /// Every variant carries one, so no event sorts as "missing id".
    pub fn ref_id(&self) -> i64 {
        match self {
            HistoryEvent::PolicyStarted { policy_id, .. }
            | HistoryEvent::PolicyEnded { policy_id, .. } => policy_id.value(),
            HistoryEvent::ClaimRegistered { claim_id, .. } => claim_id.value(),
        }
    }

    pub fn sort_key(&self) -> HistorySortKey {
        let event_type = self.event_type();
        HistorySortKey {
            date: self.date(),
            rank: event_type.same_day_rank(),
            event_type,
            ref_id: self.ref_id(),
        }
    }
}

impl Ord for HistoryEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.description().cmp(other.description()))
    }
}

impl PartialOrd for HistoryEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
