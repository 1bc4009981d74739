//! Shared primitive types used across the duty scheduler.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A staff member's unique, stable identity within a roster.
pub type StaffName = String;

/// Literal written wherever no eligible staff member could fill a slot.
pub const UNASSIGNED: &str = "UNASSIGNED";

/// Number of staff needed on every duty date (two primary room, one quiet room).
pub const SLOTS_PER_DATE: usize = 3;

/// The weekdays on which duty runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DutyDay {
    Monday,
    Tuesday,
    Wednesday,
}

impl DutyDay {
    pub const ALL: [DutyDay; 3] = [DutyDay::Monday, DutyDay::Tuesday, DutyDay::Wednesday];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday    => "Monday",
            Self::Tuesday   => "Tuesday",
            Self::Wednesday => "Wednesday",
        }
    }

    /// Maps a calendar weekday onto a duty day, if duty runs that day.
    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Mon => Some(Self::Monday),
            Weekday::Tue => Some(Self::Tuesday),
            Weekday::Wed => Some(Self::Wednesday),
            _ => None,
        }
    }
}

impl fmt::Display for DutyDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DutyDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| trimmed.to_string())
    }
}

/// An ISO week, keyed by ISO year so that week numbers from
/// different years never compare equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DutyWeek {
    pub iso_year: i32,
    pub iso_week: u32,
}

impl DutyWeek {
    pub fn of(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            iso_year: iso.year(),
            iso_week: iso.week(),
        }
    }
}

impl fmt::Display for DutyWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.iso_year, self.iso_week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duty_day_parses_case_insensitively() {
        assert_eq!("monday".parse::<DutyDay>(), Ok(DutyDay::Monday));
        assert_eq!(" Wednesday ".parse::<DutyDay>(), Ok(DutyDay::Wednesday));
        assert!("Thursday".parse::<DutyDay>().is_err());
    }

    #[test]
    fn iso_week_keeps_year_apart() {
        // 2025-12-29 is a Monday in ISO week 1 of 2026.
        let dec = NaiveDate::from_ymd_opt(2025, 12, 29).unwrap();
        let jan = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(DutyWeek::of(dec), DutyWeek { iso_year: 2026, iso_week: 1 });
        assert_eq!(DutyWeek::of(jan), DutyWeek { iso_year: 2026, iso_week: 2 });
    }
}
