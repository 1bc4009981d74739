//! Roster loading: staff names, weekday availability and pairing tags.
//!
//! The first column always holds the staff name, whatever its header.
//! Tag columns are optional; a missing or blank tag reads as `false`.

use crate::{
    error::{DutyError, DutyResult},
    model::{Availability, StaffMember},
    types::{DutyDay, UNASSIGNED},
};
use csv::{ReaderBuilder, StringRecord};
use std::{collections::HashSet, io::Read, path::Path};

pub const AVOID_PAIRING_COLUMN: &str = "avoid_pairing";
pub const PREFER_PAIRING_COLUMN: &str = "prefer_pairing";

pub fn load_roster(path: impl AsRef<Path>) -> DutyResult<Vec<StaffMember>> {
    let file = std::fs::File::open(path.as_ref())?;
    read_roster(file)
}

pub fn read_roster<R: Read>(reader: R) -> DutyResult<Vec<StaffMember>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let day_columns = DutyDay::ALL.map(|day| (day, find_column(&headers, day.as_str())));
    let missing: Vec<String> = day_columns
        .iter()
        .filter(|(_, col)| col.is_none())
        .map(|(day, _)| day.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DutyError::MissingColumns { file: "staff", columns: missing });
    }
    let avoid_col = find_column(&headers, AVOID_PAIRING_COLUMN);
    let prefer_col = find_column(&headers, PREFER_PAIRING_COLUMN);

    let mut roster = Vec::new();
    let mut seen = HashSet::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let row = idx + 2;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let name = record.get(0).unwrap_or_default().to_string();
        if name.is_empty() {
            return Err(DutyError::MissingStaffName { row });
        }
        if name == UNASSIGNED {
            return Err(DutyError::ReservedStaffName { name });
        }
        if !seen.insert(name.clone()) {
            return Err(DutyError::DuplicateStaff { name });
        }

        let mut availability = Availability::default();
        for (day, col) in day_columns {
            let available = read_flag(&record, col, day.as_str(), row)?;
            availability.set(day, available);
        }

        roster.push(StaffMember {
            name,
            availability,
            avoid_pairing: read_flag(&record, avoid_col, AVOID_PAIRING_COLUMN, row)?,
            prefer_pairing: read_flag(&record, prefer_col, PREFER_PAIRING_COLUMN, row)?,
        });
    }

    log::debug!("roster: {} staff", roster.len());
    Ok(roster)
}

fn find_column(headers: &[String], name: &str) -> Option<usize> {
    // Column 0 is the name column even if a spreadsheet export left it
    // headed `Unnamed: 0` or blank.
    headers
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, h)| h.eq_ignore_ascii_case(name))
        .map(|(i, _)| i)
}

fn read_flag(record: &StringRecord, col: Option<usize>, column: &str, row: usize) -> DutyResult<bool> {
    let value = col.and_then(|c| record.get(c)).unwrap_or_default();
    match value.to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" => Ok(false),
        "1" | "true" | "yes" => Ok(true),
        _ => Err(DutyError::InvalidFlag {
            row,
            column: column.to_string(),
            value: value.to_string(),
        }),
    }
}
