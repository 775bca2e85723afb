//! The detected reporting period.

use chrono::{Datelike, NaiveDate, Weekday};

/// Year, month, and day count governing array sizing and weekend math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MonthContext {
    pub year: i32,
    /// 1-12.
    pub month: u32,
    pub day_count: u32,
}

impl MonthContext {
    /// Builds a context with the day count taken from the calendar.
    pub fn from_calendar(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            day_count: Self::days_in(year, month),
        }
    }

    /// Calendar day count for `(year, month)`, leap-aware; 31 for an
    /// unrepresentable month.
    pub fn days_in(year: i32, month: u32) -> u32 {
        let first = NaiveDate::from_ymd_opt(year, month, 1);
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        match (first, next) {
            (Some(start), Some(end)) => (end - start).num_days() as u32,
            _ => 31,
        }
    }

    /// True when day-of-month `day` falls on Saturday or Sunday.
    /// Days outside the calendar are never weekends.
    pub fn is_weekend(&self, day: u32) -> bool {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
            .map(|date| matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
            .unwrap_or(false)
    }
}
