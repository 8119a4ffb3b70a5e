//! Half-hour slot arithmetic.
//!
//! Times of day are `HH:MM` strings on a 30-minute grid. A day has
//! [`SLOTS_PER_DAY`] slots and slot `i` starts at `i * SLOT_MINUTES` minutes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};

/// Length of one timeline slot in minutes.
pub const SLOT_MINUTES: u32 = 30;

/// Number of slots in a day.
pub const SLOTS_PER_DAY: usize = 48;

/// Parse `"HH:MM"` into minutes past midnight.
///
/// Only a numeric parse of both halves is performed, so `"25:00"` yields
/// `1500`. Values too large to count in minutes are `InvalidTime`. Use
/// [`TimeOfDay`] when the value must be a real time of day.
pub fn to_minutes(time: &str) -> PlannerResult<u32> {
    let (hour, minute) = split_time(time)?;
    hour.checked_mul(60)
        .and_then(|m| m.checked_add(minute))
        .ok_or_else(|| PlannerError::InvalidTime(time.to_string()))
}

/// Format minutes past midnight as zero-padded `"HH:MM"`.
pub fn from_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Number of 30-minute slots covered by `[start, end)`, never less than 1.
///
/// A missing end or a non-positive duration counts as a single slot.
/// Durations that are not a multiple of 30 minutes round up.
pub fn duration_slots(start: TimeOfDay, end: Option<TimeOfDay>) -> usize {
    let Some(end) = end else {
        return 1;
    };
    if end <= start {
        return 1;
    }
    let total = end.minutes() - start.minutes();
    total.div_ceil(SLOT_MINUTES) as usize
}

/// All grid times of a day, `00:00` through `23:30`.
pub fn time_options() -> impl Iterator<Item = TimeOfDay> {
    (0..SLOTS_PER_DAY).filter_map(TimeOfDay::from_slot)
}

fn split_time(time: &str) -> PlannerResult<(u32, u32)> {
    let invalid = || PlannerError::InvalidTime(time.to_string());

    let (hour, minute) = time.trim().split_once(':').ok_or_else(invalid)?;
    let hour = hour.parse::<u32>().map_err(|_| invalid())?;
    let minute = minute.parse::<u32>().map_err(|_| invalid())?;
    Ok((hour, minute))
}

/// A time of day in minute resolution, rendered as `HH:MM`.
///
/// Ordering follows the clock, which for the zero-padded string form is the
/// same as lexicographic ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(TimeOfDay(hour * 60 + minute))
    }

    /// Start time of grid slot `index`.
    pub fn from_slot(index: usize) -> Option<Self> {
        (index < SLOTS_PER_DAY).then(|| TimeOfDay(index as u32 * SLOT_MINUTES))
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn hour(self) -> u32 {
        self.0 / 60
    }

    pub fn minute(self) -> u32 {
        self.0 % 60
    }

    /// Grid slot this time starts, or `None` when it is off the half-hour grid.
    pub fn slot(self) -> Option<usize> {
        self.is_on_grid().then_some((self.0 / SLOT_MINUTES) as usize)
    }

    pub fn is_on_grid(self) -> bool {
        self.0 % SLOT_MINUTES == 0
    }

    /// Minutes offset from this time, which may run past midnight (`24:00`).
    pub fn plus_minutes(self, minutes: u32) -> u32 {
        self.0 + minutes
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", from_minutes(self.0))
    }
}

impl FromStr for TimeOfDay {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = split_time(s)?;
        TimeOfDay::from_hm(hour, minute).ok_or_else(|| PlannerError::InvalidTime(s.to_string()))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = PlannerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn test_to_minutes() {
        assert_eq!(to_minutes("00:00").unwrap(), 0);
        assert_eq!(to_minutes("01:30").unwrap(), 90);
        assert_eq!(to_minutes("23:30").unwrap(), 1410);
    }

    #[test]
    fn test_to_minutes_rejects_malformed() {
        assert!(matches!(to_minutes("0930"), Err(PlannerError::InvalidTime(_))));
        assert!(matches!(to_minutes("ab:cd"), Err(PlannerError::InvalidTime(_))));
        assert!(matches!(to_minutes(""), Err(PlannerError::InvalidTime(_))));
    }

    #[test]
    fn test_to_minutes_rejects_overflowing_numbers() {
        assert!(matches!(to_minutes("99999999:00"), Err(PlannerError::InvalidTime(_))));
        assert!(matches!(to_minutes("71582788:16"), Err(PlannerError::InvalidTime(_))));
        assert_eq!(to_minutes("25:00").unwrap(), 1500);
    }

    #[test]
    fn test_minutes_roundtrip_over_grid() {
        for time in time_options() {
            let text = time.to_string();
            assert_eq!(from_minutes(to_minutes(&text).unwrap()), text);
        }
        assert_eq!(from_minutes(90), "01:30");
    }

    #[test]
    fn test_time_options() {
        let options: Vec<String> = time_options().map(|t| t.to_string()).collect();
        assert_eq!(options.len(), SLOTS_PER_DAY);
        assert_eq!(options[0], "00:00");
        assert_eq!(options[1], "00:30");
        assert_eq!(options[47], "23:30");
    }

    #[test]
    fn test_duration_slots() {
        assert_eq!(duration_slots(t("09:00"), Some(t("10:00"))), 2);
        assert_eq!(duration_slots(t("09:00"), Some(t("09:30"))), 1);
        assert_eq!(duration_slots(t("09:00"), Some(t("12:30"))), 7);
    }

    #[test]
    fn test_duration_slots_rounds_up_off_grid() {
        assert_eq!(duration_slots(t("09:00"), Some(t("09:15"))), 1);
        assert_eq!(duration_slots(t("09:00"), Some(t("10:01"))), 3);
    }

    #[test]
    fn test_duration_slots_minimum_one() {
        assert_eq!(duration_slots(t("09:00"), None), 1);
        assert_eq!(duration_slots(t("09:00"), Some(t("09:00"))), 1);
        assert_eq!(duration_slots(t("10:00"), Some(t("09:00"))), 1);
    }

    #[test]
    fn test_time_of_day_parse_bounds() {
        assert_eq!(t("9:05").to_string(), "09:05");
        assert!("24:00".parse::<TimeOfDay>().is_err());
        assert!("12:60".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_slot_index() {
        assert_eq!(t("00:00").slot(), Some(0));
        assert_eq!(t("09:30").slot(), Some(19));
        assert_eq!(t("23:30").slot(), Some(47));
        assert_eq!(t("09:15").slot(), None);
        assert_eq!(TimeOfDay::from_slot(48), None);
    }

    #[test]
    fn test_ordering_matches_string_ordering() {
        let mut times = vec![t("10:00"), t("09:30"), t("00:30"), t("23:00")];
        let mut strings: Vec<String> = times.iter().map(|t| t.to_string()).collect();
        times.sort();
        strings.sort();
        let sorted: Vec<String> = times.iter().map(|t| t.to_string()).collect();
        assert_eq!(sorted, strings);
    }
}
