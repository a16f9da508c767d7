//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for timelines and errors that give
//! more meaningful failure messages than standard assertions.

use core_kernel::{CoreError, ErrorKind};
use domain_history::{HistoryEvent, HistoryEventType};

/// Asserts that events are in non-decreasing sort-key order
///
/// # Panics
///
/// Panics at the first adjacent pair that is out of order
pub fn assert_chronological(events: &[HistoryEvent]) {
    for (i, pair) in events.windows(2).enumerate() {
        assert!(
            pair[0].sort_key() <= pair[1].sort_key(),
            "Events {} and {} out of order: {:?} then {:?}",
            i,
            i + 1,
            pair[0].sort_key(),
            pair[1].sort_key()
        );
    }
}

/// Asserts the exact sequence of event types
pub fn assert_event_types(events: &[HistoryEvent], expected: &[HistoryEventType]) {
    let actual: Vec<_> = events.iter().map(HistoryEvent::event_type).collect();
    assert_eq!(
        actual.as_slice(),
        expected,
        "Event type sequence mismatch; descriptions: {:?}",
        events.iter().map(HistoryEvent::description).collect::<Vec<_>>()
    );
}

/// Asserts that an error is a not-found for the given entity
pub fn assert_not_found(err: &CoreError, entity: &str) {
    match err {
        CoreError::NotFound { entity: actual, .. } => assert_eq!(
            actual, entity,
            "Expected {entity} not found, got {actual} not found"
        ),
        other => panic!("Expected NotFound for {entity}, got {other:?}"),
    }
}

/// Asserts the boundary classification of an error
pub fn assert_error_kind(err: &CoreError, expected: ErrorKind) {
    assert_eq!(
        err.kind(),
        expected,
        "Error kind mismatch for \"{err}\""
    );
}
