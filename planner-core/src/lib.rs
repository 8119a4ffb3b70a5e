//! Core of a personal month/day planner.
//!
//! This crate holds the scheduling and rendering model used by planner-cli:
//! - `store` keeps day buckets of events and writes them through a `Backend`
//! - `admission` rejects empty titles, empty ranges and overlapping events
//! - `priority` ranks events by urgency and importance
//! - `month` and `timeline` project the store into plain data for display
//!
//! `Planner` ties these together with the month and day being viewed.

pub mod admission;
pub mod config;
pub mod date_key;
pub mod error;
pub mod event;
pub mod holiday;
pub mod month;
pub mod planner;
pub mod priority;
pub mod store;
pub mod time;
pub mod timeline;

pub use date_key::DateKey;
pub use error::{PlannerError, PlannerResult, ValidationError};
pub use event::{Event, EventDraft};
pub use planner::Planner;
pub use time::TimeOfDay;
