//! Planner event types.
//!
//! Events are stored per day, so they carry only a time of day. The JSON form
//! uses camelCase field names (`startTime`, `endTime`), and older records that
//! only carry a `time` field are normalized to `startTime` while loading.

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::time::{self, SLOT_MINUTES, TimeOfDay};

/// A timed event inside a day bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredEvent")]
pub struct Event {
    pub title: String,
    pub start_time: TimeOfDay,
    /// Absent only on legacy records; such events last one slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<TimeOfDay>,
    pub urgent: bool,
    pub important: bool,
    pub completed: bool,
}

impl Event {
    /// Start of the event in minutes past midnight.
    pub fn start_minutes(&self) -> u32 {
        self.start_time.minutes()
    }

    /// End of the event in minutes, `start + 30` when no end is recorded.
    pub fn end_minutes(&self) -> u32 {
        match self.end_time {
            Some(end) => end.minutes(),
            None => self.start_time.plus_minutes(SLOT_MINUTES),
        }
    }

    /// Number of timeline slots this event covers.
    pub fn duration_slots(&self) -> usize {
        time::duration_slots(self.start_time, self.end_time)
    }
}

/// Candidate event fields as entered by the user, before admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub urgent: bool,
    pub important: bool,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, start: TimeOfDay, end: TimeOfDay) -> Self {
        EventDraft {
            title: title.into(),
            start,
            end,
            urgent: false,
            important: false,
        }
    }

    pub fn urgent(mut self, urgent: bool) -> Self {
        self.urgent = urgent;
        self
    }

    pub fn important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    /// Build the event that gets stored once the draft has been admitted.
    pub fn into_event(self) -> Event {
        Event {
            title: self.title,
            start_time: self.start,
            end_time: Some(self.end),
            urgent: self.urgent,
            important: self.important,
            completed: false,
        }
    }
}

/// On-disk shape of an event, accepting the legacy `time` field.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEvent {
    title: String,
    start_time: Option<TimeOfDay>,
    time: Option<TimeOfDay>,
    end_time: Option<TimeOfDay>,
    #[serde(default)]
    urgent: bool,
    #[serde(default)]
    important: bool,
    #[serde(default)]
    completed: bool,
}

impl TryFrom<StoredEvent> for Event {
    type Error = PlannerError;

    fn try_from(stored: StoredEvent) -> Result<Self, Self::Error> {
        let start_time = stored.start_time.or(stored.time).ok_or_else(|| {
            PlannerError::Serialization(format!("Event '{}' has no start time", stored.title))
        })?;

        Ok(Event {
            title: stored.title,
            start_time,
            end_time: stored.end_time,
            urgent: stored.urgent,
            important: stored.important,
            completed: stored.completed,
        })
    }
}
