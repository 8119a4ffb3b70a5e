//! Public holiday table.
//!
//! Holidays only affect how a day is labeled and colored; they are never
//! stored with events.

use serde::Serialize;

use crate::date_key::DateKey;

/// South Korean public holidays for 2026, including substitute days.
const KR_2026: &[((i32, u32, u32), &str)] = &[
    ((2026, 1, 1), "신정"),
    ((2026, 2, 16), "설날 연휴"),
    ((2026, 2, 17), "설날"),
    ((2026, 2, 18), "설날 연휴"),
    ((2026, 3, 1), "삼일절"),
    ((2026, 3, 2), "삼일절 대체공휴일"),
    ((2026, 5, 5), "어린이날"),
    ((2026, 5, 24), "부처님오신날"),
    ((2026, 5, 25), "부처님오신날 대체공휴일"),
    ((2026, 6, 3), "지방선거 (공휴일)"),
    ((2026, 6, 6), "현충일"),
    ((2026, 8, 15), "광복절"),
    ((2026, 8, 17), "광복절 대체공휴일"),
    ((2026, 9, 24), "추석 연휴"),
    ((2026, 9, 25), "추석"),
    ((2026, 9, 26), "추석 연휴"),
    ((2026, 10, 3), "개천절"),
    ((2026, 10, 5), "개천절 대체공휴일"),
    ((2026, 10, 9), "한글날"),
    ((2026, 12, 25), "성탄절"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holiday {
    pub date: DateKey,
    pub name: String,
}

/// Read-only list of holidays.
#[derive(Debug, Clone, Default)]
pub struct HolidayTable {
    holidays: Vec<Holiday>,
}

impl HolidayTable {
    pub fn korea_2026() -> Self {
        let holidays = KR_2026
            .iter()
            .filter_map(|&((y, m, d), name)| {
                DateKey::from_ymd(y, m, d).map(|date| Holiday {
                    date,
                    name: name.to_string(),
                })
            })
            .collect();
        HolidayTable { holidays }
    }

    /// Name of the holiday on `date`, if any.
    pub fn lookup(&self, date: DateKey) -> Option<&str> {
        self.holidays
            .iter()
            .find(|h| h.date == date)
            .map(|h| h.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.holidays.iter()
    }
}
