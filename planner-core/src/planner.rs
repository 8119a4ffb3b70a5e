//! Application state: the event store plus the month and day being viewed.

use chrono::{Datelike, Months, NaiveDate};

use crate::admission;
use crate::date_key::DateKey;
use crate::error::PlannerResult;
use crate::event::{Event, EventDraft};
use crate::holiday::HolidayTable;
use crate::month::{self, MonthGrid};
use crate::store::{Backend, EventStore};
use crate::timeline::{self, DayTimeline};

pub struct Planner<B: Backend> {
    store: EventStore<B>,
    holidays: HolidayTable,
    /// First day of the month on display.
    current_month: NaiveDate,
    selected: Option<DateKey>,
}

impl<B: Backend> Planner<B> {
    /// Load events from `backend` and point at the month containing `today`.
    pub fn new(backend: B, today: NaiveDate) -> Self {
        Planner {
            store: EventStore::load(backend),
            holidays: HolidayTable::korea_2026(),
            current_month: first_of_month(today),
            selected: None,
        }
    }

    pub fn holidays(&self) -> &HolidayTable {
        &self.holidays
    }

    pub fn store(&self) -> &EventStore<B> {
        &self.store
    }

    // MONTH NAVIGATION:

    /// `(year, month)` on display, month in 1-12.
    pub fn current_month(&self) -> (i32, u32) {
        (self.current_month.year(), self.current_month.month())
    }

    pub fn show_month(&mut self, year: i32, month: u32) -> bool {
        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(first) => {
                self.current_month = first;
                true
            }
            None => false,
        }
    }

    pub fn next_month(&mut self) {
        if let Some(next) = self.current_month.checked_add_months(Months::new(1)) {
            self.current_month = next;
        }
    }

    pub fn prev_month(&mut self) {
        if let Some(prev) = self.current_month.checked_sub_months(Months::new(1)) {
            self.current_month = prev;
        }
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.current_month = first_of_month(today);
    }

    // DAY SELECTION:

    pub fn select(&mut self, date: DateKey) {
        self.selected = Some(date);
    }

    pub fn selected(&self) -> Option<DateKey> {
        self.selected
    }

    // EVENTS:

    pub fn events(&self, date: DateKey) -> &[Event] {
        self.store.get(date)
    }

    /// Admit `draft` on `date` and store it.
    ///
    /// Validation failures leave the store untouched. A
    /// `PlannerError::Persistence` means the event was added in memory only.
    pub fn add_event(&mut self, date: DateKey, draft: EventDraft) -> PlannerResult<()> {
        admission::admit(self.store.get(date), &draft)?;

        let event = draft.into_event();
        tracing::info!(%date, title = %event.title, start = %event.start_time, "event added");
        self.store.add(date, event)
    }

    pub fn remove_event(&mut self, date: DateKey, index: usize) -> PlannerResult<Option<Event>> {
        let removed = self.store.remove(date, index)?;
        if let Some(event) = &removed {
            tracing::info!(%date, title = %event.title, "event removed");
        }
        Ok(removed)
    }

    pub fn toggle_completed(&mut self, date: DateKey, index: usize) -> PlannerResult<Option<bool>> {
        self.store.toggle_completed(date, index)
    }

    // PROJECTIONS:

    /// Grid for the month on display.
    pub fn month_grid(&self, today: NaiveDate) -> PlannerResult<MonthGrid> {
        let (year, month) = self.current_month();
        month::project_month(year, month, &self.store, &self.holidays, today)
    }

    pub fn day_timeline(&self, date: DateKey) -> DayTimeline {
        timeline::project_day(date, self.store.get(date))
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
