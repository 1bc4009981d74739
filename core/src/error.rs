use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DutyError {
    #[error("Roster is empty: at least one staff member is required")]
    EmptyRoster,

    #[error("Staff name '{name}' appears more than once in the roster")]
    DuplicateStaff { name: String },

    #[error("Staff name '{name}' is reserved for unfilled slots")]
    ReservedStaffName { name: String },

    #[error("Row {row}: staff name is empty")]
    MissingStaffName { row: usize },

    #[error("Duty dates out of order: {next} follows {previous}")]
    DatesOutOfOrder { previous: NaiveDate, next: NaiveDate },

    #[error("{file} is missing required columns: {}", columns.join(", "))]
    MissingColumns { file: &'static str, columns: Vec<String> },

    #[error("Cannot parse date on row {row}: '{value}'")]
    DateParse { row: usize, value: String },

    #[error("Row {row}: {date} is a {actual}, but day_of_week says '{declared}'")]
    WeekdayMismatch {
        row: usize,
        date: NaiveDate,
        actual: String,
        declared: String,
    },

    #[error("Row {row}: duty is not scheduled on {weekday}")]
    UnsupportedWeekday { row: usize, weekday: String },

    #[error("{date} is a {weekday}; duty is not scheduled on that day")]
    NotADutyDay { date: NaiveDate, weekday: String },

    #[error("Row {row}, column '{column}': expected 1/0, got '{value}'")]
    InvalidFlag { row: usize, column: String, value: String },

    #[error("No duty days found in calendar (needs_duty = 1)")]
    NoDutyDays,

    #[error("Invalid month '{value}': expected YYYY-MM")]
    InvalidMonth { value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type DutyResult<T> = Result<T, DutyError>;
