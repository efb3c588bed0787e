use crate::error::{CalverError, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// Calendar year and month of a commit, in the committer's recorded timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CommitMonth {
    pub year: i32,
    pub month: u32,
}

impl CommitMonth {
    /// Create a new commit month
    pub fn new(year: i32, month: u32) -> Self {
        CommitMonth { year, month }
    }

    /// Last three digits of the calendar year, as a number:
    /// 2024 -> 24, 2108 -> 108. A year ending in 000 yields 0, so the
    /// component is never empty and never carries a leading zero.
    pub fn short_year(&self) -> u32 {
        self.year.rem_euclid(1000) as u32
    }

    /// Inclusive wall-clock window spanning this month, from the first
    /// second of day one through 23:59:59 on the last day.
    pub fn window(&self) -> Result<MonthWindow> {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .ok_or_else(|| CalverError::date(format!("Invalid commit month: {}", self)))?;

        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .ok_or_else(|| CalverError::date(format!("Invalid commit month: {}", self)))?;

        let start = NaiveDateTime::new(first, NaiveTime::MIN);
        let end = NaiveDateTime::new(next_first, NaiveTime::MIN) - Duration::seconds(1);

        Ok(MonthWindow { start, end })
    }
}

impl fmt::Display for CommitMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Inclusive range of naive wall-clock datetimes covering one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl MonthWindow {
    /// Whether the given datetime falls inside the window, both boundaries
    /// included
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at <= self.end
    }
}
