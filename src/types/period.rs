//! Date and period selection types.
//!
//! Filters on the frames accept anything that can resolve to a date range:
//! a `NaiveDate`, a `"YYYY-MM-DD"` string, a [`Year`] or a [`Month`]. The
//! conversion traits here do that resolution so the frame methods stay small.

use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Year(pub i32);

impl Year {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl Display for Year {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A calendar month: year first, month (1..=12) second.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Month(pub i32, pub u32);

impl Month {
    pub fn new(year: i32, month: u32) -> Self {
        Self(year, month)
    }
    pub fn year(self) -> i32 {
        self.0
    }
    pub fn month(self) -> u32 {
        self.1
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.0, self.1)
    }
}

pub struct StartEndDate {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Anything that can stand in for a date (or a date range collapsed onto its
/// boundaries) in a frame filter.
pub trait AnyDate {
    fn get_date_range(self) -> Option<StartEndDate>;
}

impl AnyDate for NaiveDate {
    fn get_date_range(self) -> Option<StartEndDate> {
        Some(StartEndDate {
            start: self,
            end: self,
        })
    }
}

impl AnyDate for &str {
    fn get_date_range(self) -> Option<StartEndDate> {
        let naive = NaiveDate::parse_from_str(self, "%Y-%m-%d").ok()?;
        naive.get_date_range()
    }
}

impl AnyDate for String {
    fn get_date_range(self) -> Option<StartEndDate> {
        self.as_str().get_date_range()
    }
}

impl AnyDate for Year {
    fn get_date_range(self) -> Option<StartEndDate> {
        Some(StartEndDate {
            start: NaiveDate::from_ymd_opt(self.0, 1, 1)?,
            end: NaiveDate::from_ymd_opt(self.0, 12, 31)?,
        })
    }
}

impl AnyDate for Month {
    fn get_date_range(self) -> Option<StartEndDate> {
        Some(StartEndDate {
            start: NaiveDate::from_ymd_opt(self.year(), self.month(), 1)?,
            end: NaiveDate::from_ymd_opt(
                self.year(),
                self.month(),
                days_in_month(self.year(), self.month())?,
            )?,
        })
    }
}

/// A span of whole days, used by `get_for_period` on the date-indexed frames.
pub trait DatePeriod {
    fn get_date_period(self) -> Option<StartEndDate>;
}

impl DatePeriod for Year {
    fn get_date_period(self) -> Option<StartEndDate> {
        self.get_date_range()
    }
}

impl DatePeriod for Month {
    fn get_date_period(self) -> Option<StartEndDate> {
        self.get_date_range()
    }
}

impl DatePeriod for (NaiveDate, NaiveDate) {
    fn get_date_period(self) -> Option<StartEndDate> {
        Some(StartEndDate {
            start: self.0,
            end: self.1,
        })
    }
}

pub struct StartEndMonth {
    pub start: Month,
    pub end: Month,
}

/// A span of whole months, used by the monthly frame.
pub trait MonthPeriod {
    fn get_month_period(self) -> Option<StartEndMonth>;
}

impl MonthPeriod for Year {
    fn get_month_period(self) -> Option<StartEndMonth> {
        Some(StartEndMonth {
            start: Month(self.0, 1),
            end: Month(self.0, 12),
        })
    }
}

impl MonthPeriod for Month {
    fn get_month_period(self) -> Option<StartEndMonth> {
        Some(StartEndMonth {
            start: self,
            end: self,
        })
    }
}

impl MonthPeriod for (Month, Month) {
    fn get_month_period(self) -> Option<StartEndMonth> {
        Some(StartEndMonth {
            start: self.0,
            end: self.1,
        })
    }
}

pub(crate) fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    Some((first_of_next - Duration::days(1)).day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2025, 2), Some(28));
        assert_eq!(days_in_month(2025, 12), Some(31));
        assert_eq!(days_in_month(2025, 13), None);
        assert_eq!(days_in_month(2025, 0), None);
    }

    #[test]
    fn year_resolves_to_full_range() {
        let range = Year(2025).get_date_range().unwrap();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }

    #[test]
    fn month_resolves_to_its_last_day() {
        let range = Month::new(2025, 10).get_date_range().unwrap();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2025, 10, 31).unwrap());
    }

    #[test]
    fn str_dates_parse_iso_only() {
        assert!("2025-10-02".get_date_range().is_some());
        assert!("02-10-2025".get_date_range().is_none());
        assert!("not a date".get_date_range().is_none());
    }

    #[test]
    fn year_as_month_period_spans_jan_to_dec() {
        let months = Year(2025).get_month_period().unwrap();
        assert_eq!(months.start, Month(2025, 1));
        assert_eq!(months.end, Month(2025, 12));
    }
}
