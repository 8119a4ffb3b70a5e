//! Day timeline projection.
//!
//! A day is laid out as 48 half-hour rows. Each event appears once, in the
//! row of its start time, with a card tall enough to cover every row it
//! spans. Events sharing a start row are stacked: the first in priority order
//! sits flush, each following one is shifted right and narrowed.

use serde::Serialize;

use crate::date_key::DateKey;
use crate::event::Event;
use crate::priority::{self, PriorityClass};
use crate::time::{TimeOfDay, time_options};

/// Height of one half-hour row in pixels.
pub const ROW_HEIGHT: u32 = 50;

/// Vertical gap kept between consecutive cards.
pub const CARD_GAP: u32 = 4;

/// Horizontal shift per stacking level.
pub const STACK_STEP: u32 = 15;

const STACK_LEFT_BASE: u32 = 4;
const STACK_INSET_BASE: u32 = 14;
const STACK_Z_BASE: u32 = 10;

#[derive(Debug, Clone, Serialize)]
pub struct DayTimeline {
    pub date: DateKey,
    pub slots: Vec<TimelineSlot>,
}

impl DayTimeline {
    /// Iterate over the slots that have at least one event starting in them.
    pub fn occupied(&self) -> impl Iterator<Item = &TimelineSlot> {
        self.slots.iter().filter(|slot| !slot.events.is_empty())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineSlot {
    pub index: usize,
    pub label: TimeOfDay,
    pub events: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    /// Position of the event in its day bucket.
    pub index: usize,
    pub title: String,
    pub start: TimeOfDay,
    pub end: Option<TimeOfDay>,
    pub urgent: bool,
    pub important: bool,
    pub completed: bool,
    pub priority: PriorityClass,
    pub duration_slots: usize,
    /// 0-based position among events starting in the same slot.
    pub stack: usize,
    pub layout: CardLayout,
}

/// Pixel hints for drawing an event card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardLayout {
    pub height_px: u32,
    /// Offset from the left edge; `None` keeps the default placement.
    pub left_px: Option<u32>,
    /// Amount subtracted from the full row width.
    pub width_inset_px: Option<u32>,
    pub z_index: Option<u32>,
}

impl CardLayout {
    pub fn new(duration_slots: usize, stack: usize) -> Self {
        let height_px = (duration_slots as u32 * ROW_HEIGHT).saturating_sub(CARD_GAP);

        if stack == 0 {
            return CardLayout {
                height_px,
                left_px: None,
                width_inset_px: None,
                z_index: None,
            };
        }

        let shift = stack as u32 * STACK_STEP;
        CardLayout {
            height_px,
            left_px: Some(STACK_LEFT_BASE + shift),
            width_inset_px: Some(STACK_INSET_BASE + shift),
            z_index: Some(STACK_Z_BASE + stack as u32),
        }
    }
}

/// Lay out the events of `date` on the 48-slot grid.
///
/// Events whose start time is off the half-hour grid have no row and are not
/// placed.
pub fn project_day(date: DateKey, events: &[Event]) -> DayTimeline {
    let mut slots: Vec<TimelineSlot> = time_options()
        .enumerate()
        .map(|(index, label)| TimelineSlot {
            index,
            label,
            events: Vec::new(),
        })
        .collect();

    for (index, event) in priority::rank(events) {
        let Some(slot_index) = event.start_time.slot() else {
            continue;
        };
        let slot = &mut slots[slot_index];

        let stack = slot.events.len();
        let duration_slots = event.duration_slots();

        slot.events.push(TimelineEntry {
            index,
            title: event.title.clone(),
            start: event.start_time,
            end: event.end_time,
            urgent: event.urgent,
            important: event.important,
            completed: event.completed,
            priority: PriorityClass::of(event),
            duration_slots,
            stack,
            layout: CardLayout::new(duration_slots, stack),
        });
    }

    DayTimeline { date, slots }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event(title: &str, start: &str, end: Option<&str>, urgent: bool, important: bool) -> Event {
        Event {
            title: title.to_string(),
            start_time: start.parse().unwrap(),
            end_time: end.map(|e| e.parse().unwrap()),
            urgent,
            important,
            completed: false,
        }
    }

    fn day() -> DateKey {
        "2026-03-02".parse().unwrap()
    }

    #[test]
    fn test_empty_day_has_48_labeled_slots() {
        let timeline = project_day(day(), &[]);

        assert_eq!(timeline.slots.len(), 48);
        assert_eq!(timeline.slots[0].label.to_string(), "00:00");
        assert_eq!(timeline.slots[19].label.to_string(), "09:30");
        assert_eq!(timeline.slots[47].label.to_string(), "23:30");
        assert_eq!(timeline.occupied().count(), 0);
    }

    #[test]
    fn test_event_rooted_at_start_slot_only() {
        let events = vec![make_event("workshop", "09:00", Some("11:30"), false, false)];
        let timeline = project_day(day(), &events);

        let occupied: Vec<usize> = timeline.occupied().map(|s| s.index).collect();
        assert_eq!(occupied, vec![18]);

        let entry = &timeline.slots[18].events[0];
        assert_eq!(entry.duration_slots, 5);
        assert_eq!(entry.stack, 0);
        assert_eq!(entry.layout.height_px, 5 * ROW_HEIGHT - CARD_GAP);
        assert_eq!(entry.layout.left_px, None);
    }

    #[test]
    fn test_legacy_event_without_end_is_one_slot() {
        let events = vec![make_event("old", "07:00", None, false, false)];
        let timeline = project_day(day(), &events);

        let entry = &timeline.slots[14].events[0];
        assert_eq!(entry.duration_slots, 1);
        assert_eq!(entry.layout.height_px, 46);
    }

    #[test]
    fn test_shared_start_slot_stacks_by_priority() {
        let events = vec![
            make_event("normal", "10:00", Some("10:30"), false, false),
            make_event("urgent", "10:00", Some("11:00"), true, false),
            make_event("high", "10:00", Some("12:00"), true, true),
        ];
        let timeline = project_day(day(), &events);

        let slot = &timeline.slots[20];
        let order: Vec<(&str, usize, usize)> = slot
            .events
            .iter()
            .map(|e| (e.title.as_str(), e.stack, e.index))
            .collect();
        assert_eq!(order, vec![("high", 0, 2), ("urgent", 1, 1), ("normal", 2, 0)]);

        let second = slot.events[1].layout;
        assert_eq!(second.left_px, Some(19));
        assert_eq!(second.width_inset_px, Some(29));
        assert_eq!(second.z_index, Some(11));

        let third = slot.events[2].layout;
        assert_eq!(third.left_px, Some(34));
        assert_eq!(third.width_inset_px, Some(44));
        assert_eq!(third.z_index, Some(12));
    }

    #[test]
    fn test_off_grid_start_is_not_placed() {
        let events = vec![make_event("odd", "09:15", Some("10:00"), false, false)];
        let timeline = project_day(day(), &events);
        assert_eq!(timeline.occupied().count(), 0);
    }

    #[test]
    fn test_entries_carry_completion() {
        let mut event = make_event("done", "13:00", Some("13:30"), false, true);
        event.completed = true;
        let timeline = project_day(day(), &[event]);

        let entry = &timeline.slots[26].events[0];
        assert!(entry.completed);
        assert_eq!(entry.priority, PriorityClass::Important);
    }
}
