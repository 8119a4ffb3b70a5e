//! Priority scoring and display ordering.

use std::cmp::Reverse;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Priority score: 2 for urgent plus 1 for important.
pub fn score(event: &Event) -> u8 {
    (if event.urgent { 2 } else { 0 }) + (if event.important { 1 } else { 0 })
}

/// Events in display order, each paired with its index in `events`.
///
/// Higher scores come first; equal scores are ordered by start time. The sort
/// is stable, so remaining ties keep insertion order.
pub fn rank(events: &[Event]) -> Vec<(usize, &Event)> {
    let mut ranked: Vec<(usize, &Event)> = events.iter().enumerate().collect();
    ranked.sort_by_key(|(_, event)| (Reverse(score(event)), event.start_time));
    ranked
}

/// The four priority classes, used as render hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityClass {
    High,
    Urgent,
    Important,
    Normal,
}

impl PriorityClass {
    pub fn of(event: &Event) -> Self {
        match (event.urgent, event.important) {
            (true, true) => PriorityClass::High,
            (true, false) => PriorityClass::Urgent,
            (false, true) => PriorityClass::Important,
            (false, false) => PriorityClass::Normal,
        }
    }

    /// Stable style class name, e.g. `p-high`.
    pub fn class_name(&self) -> &'static str {
        match self {
            PriorityClass::High => "p-high",
            PriorityClass::Urgent => "p-urgent",
            PriorityClass::Important => "p-important",
            PriorityClass::Normal => "p-normal",
        }
    }
}

impl fmt::Display for PriorityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class_name())
    }
}
