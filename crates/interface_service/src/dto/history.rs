//! History DTOs

use chrono::NaiveDate;
use serde::Serialize;

use domain_history::{HistoryEvent, HistoryEventType};

/// One timeline entry as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEventDto {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub event_type: HistoryEventType,
    pub description: String,
    pub ref_id: i64,
}

impl From<HistoryEvent> for HistoryEventDto {
    fn from(event: HistoryEvent) -> Self {
        Self {
            date: event.date(),
            event_type: event.event_type(),
            ref_id: event.ref_id(),
            description: event.description().to_string(),
        }
    }
}
