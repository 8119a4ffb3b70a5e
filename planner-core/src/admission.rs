//! Admission checks for new events.
//!
//! Events within one day may not overlap. Ranges are half-open, so an event
//! ending at 10:00 and another starting at 10:00 can share a day.

use crate::error::ValidationError;
use crate::event::{Event, EventDraft};
use crate::time::TimeOfDay;

/// Check a draft against the events already on its day.
///
/// Checks run in order: empty title, then a non-positive range, then overlap.
pub fn admit(existing: &[Event], draft: &EventDraft) -> Result<(), ValidationError> {
    if draft.title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if draft.end <= draft.start {
        return Err(ValidationError::InvalidRange);
    }
    if !can_admit(existing, draft.start, draft.end) {
        return Err(ValidationError::Overlap);
    }
    Ok(())
}

/// Whether `[start, end)` is a non-empty range that no existing event intersects.
pub fn can_admit(existing: &[Event], start: TimeOfDay, end: TimeOfDay) -> bool {
    if end <= start {
        return false;
    }
    let (start, end) = (start.minutes(), end.minutes());

    !existing
        .iter()
        .any(|event| intersects(start, end, event.start_minutes(), event.end_minutes()))
}

fn intersects(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> bool {
    a_start < b_end && a_end > b_start
}
