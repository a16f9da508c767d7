//! Vehicle History Domain
//!
//! Builds the chronological history of a vehicle from two independent record
//! types: policies (which start and possibly end) and claims.
//!
//! # Ordering
//!
//! Events are sorted by:
//!
//! ```text
//! date  ->  same-day rank  ->  event type  ->  reference id
//!           PolicyEnded   0
//!           PolicyStarted 1
//!           ClaimRegistered 2
//! ```
//!
//! so a policy lapsing on the same day another begins is reported first.
//! The key is total over (date, type, reference id), which makes the
//! timeline independent of the order storage returns records in.

pub mod event;
pub mod aggregator;

pub use event::{HistoryEvent, HistoryEventType, HistorySortKey};
pub use aggregator::{HistoryAggregator, merge_timeline};
