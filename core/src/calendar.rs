//! Calendar loading: turns a tidy school calendar into sorted duty dates.
//!
//! Expected columns: `date`, `day_of_week`, `needs_duty`. Only rows with
//! `needs_duty == 1` become duty dates.

use crate::{
    error::{DutyError, DutyResult},
    model::DutyDate,
    types::DutyDay,
};
use chrono::{Datelike, NaiveDate};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::{fmt, io::Read, path::Path, str::FromStr};

/// `Monday, August 25, 2025`
pub const DEFAULT_DATE_FORMAT: &str = "%A, %B %d, %Y";

const REQUIRED_COLUMNS: [&str; 3] = ["date", "day_of_week", "needs_duty"];

pub fn load_calendar(path: impl AsRef<Path>, date_format: &str) -> DutyResult<Vec<DutyDate>> {
    let file = std::fs::File::open(path.as_ref())?;
    read_calendar(file, date_format)
}

/// Parse calendar CSV from any reader. Output is chronological.
pub fn read_calendar<R: Read>(reader: R, date_format: &str) -> DutyResult<Vec<DutyDate>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DutyError::MissingColumns { file: "calendar", columns: missing });
    }
    let column = |name: &str| headers.iter().position(|h| h == name).unwrap_or_default();
    let (date_col, day_col, duty_col) = (column("date"), column("day_of_week"), column("needs_duty"));

    let mut dates = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        // Header is row 1.
        let row = idx + 2;
        if !needs_duty(record.get(duty_col).unwrap_or_default()) {
            continue;
        }

        let raw = record.get(date_col).unwrap_or_default();
        let date = NaiveDate::parse_from_str(raw, date_format)
            .map_err(|_| DutyError::DateParse { row, value: raw.to_string() })?;

        let declared = record.get(day_col).unwrap_or_default();
        let actual = weekday_name(date);
        if !declared.is_empty() && !declared.eq_ignore_ascii_case(actual) {
            return Err(DutyError::WeekdayMismatch {
                row,
                date,
                actual: actual.to_string(),
                declared: declared.to_string(),
            });
        }
        if DutyDay::from_weekday(date.weekday()).is_none() {
            return Err(DutyError::UnsupportedWeekday { row, weekday: actual.to_string() });
        }

        dates.push(DutyDate::new(date)?);
    }

    if dates.is_empty() {
        return Err(DutyError::NoDutyDays);
    }
    dates.sort_by_key(|d| d.date);
    log::debug!("calendar: {} duty dates", dates.len());
    Ok(dates)
}

/// Spreadsheet exports may write the flag as `1`, `1.0` or ` 1 `.
fn needs_duty(cell: &str) -> bool {
    cell.trim().parse::<f64>().is_ok_and(|flag| flag == 1.0)
}

fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        chrono::Weekday::Mon => "Monday",
        chrono::Weekday::Tue => "Tuesday",
        chrono::Weekday::Wed => "Wednesday",
        chrono::Weekday::Thu => "Thursday",
        chrono::Weekday::Fri => "Friday",
        chrono::Weekday::Sat => "Saturday",
        chrono::Weekday::Sun => "Sunday",
    }
}

/// Restricts a run to one calendar month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthFilter {
    pub year:  i32,
    pub month: u32,
}

impl MonthFilter {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn apply(&self, dates: &[DutyDate]) -> Vec<DutyDate> {
        dates.iter().filter(|d| self.contains(d.date)).copied().collect()
    }
}

impl FromStr for MonthFilter {
    type Err = DutyError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DutyError::InvalidMonth { value: s.to_string() };
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
