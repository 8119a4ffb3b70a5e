//! Month grid projection.
//!
//! Produces plain cell data for one month: leading filler cells so the 1st
//! lands in its weekday column (weeks start on Sunday), then one cell per day
//! with its holiday label, color marker and the top-ranked event previews.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::date_key::DateKey;
use crate::error::{PlannerError, PlannerResult};
use crate::event::Event;
use crate::holiday::HolidayTable;
use crate::priority::{self, PriorityClass};
use crate::store::{Backend, EventStore};

/// Maximum number of event previews shown in a day cell.
pub const PREVIEW_LIMIT: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Trailing days of the previous month.
    pub leading: Vec<FillerCell>,
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FillerCell {
    pub day: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayCell {
    pub date: DateKey,
    pub day: u32,
    pub is_today: bool,
    pub holiday: Option<String>,
    pub marker: DayMarker,
    pub previews: Vec<EventPreview>,
    /// Events beyond the preview limit.
    pub overflow: usize,
}

impl DayCell {
    pub fn is_holiday(&self) -> bool {
        self.holiday.is_some()
    }
}

/// Color of the day number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayMarker {
    /// Sundays and holidays.
    Red,
    /// Saturdays.
    Blue,
    Plain,
}

impl DayMarker {
    pub fn for_day(weekday: Weekday, is_holiday: bool) -> Self {
        if is_holiday || weekday == Weekday::Sun {
            DayMarker::Red
        } else if weekday == Weekday::Sat {
            DayMarker::Blue
        } else {
            DayMarker::Plain
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventPreview {
    /// Position of the event in its day bucket.
    pub index: usize,
    pub title: String,
    pub priority: PriorityClass,
    pub completed: bool,
}

/// Build the grid for `month` (1-12) of `year`. Reads only; never mutates.
pub fn project_month<B: Backend>(
    year: i32,
    month: u32,
    store: &EventStore<B>,
    holidays: &HolidayTable,
    today: NaiveDate,
) -> PlannerResult<MonthGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(PlannerError::InvalidMonth { year, month })?;
    let days_in_month = days_in_month(first).ok_or(PlannerError::InvalidMonth { year, month })?;

    let leading = leading_fillers(first);

    let days = first
        .iter_days()
        .take(days_in_month as usize)
        .map(|date| day_cell(date, store.get(date.into()), holidays, today))
        .collect();

    Ok(MonthGrid {
        year,
        month,
        leading,
        days,
    })
}

fn day_cell(date: NaiveDate, events: &[Event], holidays: &HolidayTable, today: NaiveDate) -> DayCell {
    let key = DateKey::new(date);
    let holiday = holidays.lookup(key).map(str::to_string);
    let marker = DayMarker::for_day(date.weekday(), holiday.is_some());

    let previews = priority::rank(events)
        .into_iter()
        .take(PREVIEW_LIMIT)
        .map(|(index, event)| EventPreview {
            index,
            title: event.title.clone(),
            priority: PriorityClass::of(event),
            completed: event.completed,
        })
        .collect();

    DayCell {
        date: key,
        day: date.day(),
        is_today: date == today,
        holiday,
        marker,
        previews,
        overflow: events.len().saturating_sub(PREVIEW_LIMIT),
    }
}

fn leading_fillers(first: NaiveDate) -> Vec<FillerCell> {
    let offset = first.weekday().num_days_from_sunday();
    let Some(last_of_prev) = first.pred_opt() else {
        return Vec::new();
    };
    let days_in_prev = last_of_prev.day();

    (0..offset)
        .map(|i| FillerCell {
            day: days_in_prev - offset + 1 + i,
        })
        .collect()
}

fn days_in_month(first: NaiveDate) -> Option<u32> {
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)?
    };
    Some((next - first).num_days() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventDraft;
    use crate::store::MemoryBackend;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with(date: NaiveDate, events: Vec<Event>) -> EventStore<MemoryBackend> {
        let mut store = EventStore::load(MemoryBackend::new());
        for event in events {
            store.add(date.into(), event).unwrap();
        }
        store
    }

    fn make_event(title: &str, start: &str, end: &str, urgent: bool, important: bool) -> Event {
        EventDraft::new(title, start.parse().unwrap(), end.parse().unwrap())
            .urgent(urgent)
            .important(important)
            .into_event()
    }

    #[test]
    fn test_days_and_fillers_march_2026() {
        let store = EventStore::load(MemoryBackend::new());
        let grid = project_month(2026, 3, &store, &HolidayTable::default(), ymd(2026, 1, 1)).unwrap();

        // March 1st 2026 is a Sunday.
        assert!(grid.leading.is_empty());
        assert_eq!(grid.days.len(), 31);
        assert_eq!(grid.days[0].date.to_string(), "2026-03-01");
    }

    #[test]
    fn test_leading_fillers_use_previous_month_days() {
        let store = EventStore::load(MemoryBackend::new());
        // April 1st 2026 is a Wednesday.
        let grid = project_month(2026, 4, &store, &HolidayTable::default(), ymd(2026, 1, 1)).unwrap();

        let fillers: Vec<u32> = grid.leading.iter().map(|c| c.day).collect();
        assert_eq!(fillers, vec![29, 30, 31]);
        assert_eq!(grid.days.len(), 30);
    }

    #[test]
    fn test_february_lengths() {
        let store = EventStore::load(MemoryBackend::new());
        let holidays = HolidayTable::default();
        let today = ymd(2026, 1, 1);

        assert_eq!(project_month(2026, 2, &store, &holidays, today).unwrap().days.len(), 28);
        assert_eq!(project_month(2028, 2, &store, &holidays, today).unwrap().days.len(), 29);
        assert_eq!(project_month(2026, 12, &store, &holidays, today).unwrap().days.len(), 31);
    }

    #[test]
    fn test_invalid_month() {
        let store = EventStore::load(MemoryBackend::new());
        let result = project_month(2026, 13, &store, &HolidayTable::default(), ymd(2026, 1, 1));
        assert!(matches!(result, Err(PlannerError::InvalidMonth { month: 13, .. })));
    }

    #[test]
    fn test_today_and_markers() {
        let store = EventStore::load(MemoryBackend::new());
        let holidays = HolidayTable::korea_2026();
        let grid = project_month(2026, 3, &store, &holidays, ymd(2026, 3, 4)).unwrap();

        let today: Vec<u32> = grid.days.iter().filter(|c| c.is_today).map(|c| c.day).collect();
        assert_eq!(today, vec![4]);

        assert_eq!(grid.days[0].marker, DayMarker::Red); // Sunday, also a holiday
        assert_eq!(grid.days[1].marker, DayMarker::Red); // Monday substitute holiday
        assert_eq!(grid.days[2].marker, DayMarker::Plain);
        assert_eq!(grid.days[6].marker, DayMarker::Blue); // Saturday
        assert_eq!(grid.days[7].marker, DayMarker::Red); // Sunday
    }

    #[test]
    fn test_today_in_another_month_is_not_marked() {
        let store = EventStore::load(MemoryBackend::new());
        let grid = project_month(2026, 3, &store, &HolidayTable::default(), ymd(2026, 4, 4)).unwrap();
        assert!(grid.days.iter().all(|c| !c.is_today));
    }

    #[test]
    fn test_previews_show_top_three_with_overflow() {
        let day = ymd(2026, 3, 10);
        let store = store_with(
            day,
            vec![
                make_event("normal-late", "16:00", "17:00", false, false),
                make_event("important", "10:00", "11:00", false, true),
                make_event("normal-early", "08:00", "09:00", false, false),
                make_event("high", "12:00", "13:00", true, true),
                make_event("urgent", "14:00", "15:00", true, false),
            ],
        );

        let grid = project_month(2026, 3, &store, &HolidayTable::default(), ymd(2026, 1, 1)).unwrap();
        let cell = &grid.days[9];

        let titles: Vec<&str> = cell.previews.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["high", "urgent", "important"]);
        assert_eq!(cell.previews[0].index, 3);
        assert_eq!(cell.previews[0].priority, PriorityClass::High);
        assert_eq!(cell.overflow, 2);
    }

    #[test]
    fn test_day_without_events() {
        let store = EventStore::load(MemoryBackend::new());
        let grid = project_month(2026, 3, &store, &HolidayTable::default(), ymd(2026, 1, 1)).unwrap();
        assert!(grid.days.iter().all(|c| c.previews.is_empty() && c.overflow == 0));
    }
}
