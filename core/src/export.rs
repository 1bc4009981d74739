//! CSV export of a finished schedule and its summary.

use crate::{
    calendar::DEFAULT_DATE_FORMAT,
    error::DutyResult,
    model::{Assignment, SummaryRow},
};
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

const SCHEDULE_HEADER: [&str; 5] = ["Date", "Day", "Main Room 1", "Main Room 2", "Quiet Room"];
const SUMMARY_HEADER: [&str; 4] =
    ["staff_name", "total_duties", "quiet_room_duties", "main_room_duties"];

#[derive(Serialize)]
struct ScheduleRecord {
    #[serde(rename = "Date")]
    date:        String,
    #[serde(rename = "Day")]
    day:         &'static str,
    #[serde(rename = "Main Room 1")]
    main_room_1: String,
    #[serde(rename = "Main Room 2")]
    main_room_2: String,
    #[serde(rename = "Quiet Room")]
    quiet_room:  String,
}

/// Header rows are written up front so an empty export still has them.
fn writer_with_header<W: Write>(writer: W, header: &[&str]) -> DutyResult<csv::Writer<W>> {
    let mut out = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    out.write_record(header)?;
    Ok(out)
}

pub fn write_schedule_csv<W: Write>(writer: W, assignments: &[Assignment]) -> DutyResult<()> {
    let mut out = writer_with_header(writer, &SCHEDULE_HEADER)?;
    for a in assignments {
        out.serialize(ScheduleRecord {
            date:        a.date.format(DEFAULT_DATE_FORMAT).to_string(),
            day:         a.day.as_str(),
            main_room_1: a.primary_1.to_string(),
            main_room_2: a.primary_2.to_string(),
            quiet_room:  a.quiet.to_string(),
        })?;
    }
    out.flush()?;
    Ok(())
}

/// Columns: `staff_name,total_duties,quiet_room_duties,main_room_duties`.
pub fn write_summary_csv<W: Write>(writer: W, summary: &[SummaryRow]) -> DutyResult<()> {
    let mut out = writer_with_header(writer, &SUMMARY_HEADER)?;
    for row in summary {
        out.serialize(row)?;
    }
    out.flush()?;
    Ok(())
}

pub fn schedule_file_name(on: NaiveDate) -> String {
    format!("lunch_duty_schedule_{}.csv", on.format("%Y%m%d"))
}

pub fn summary_file_name(on: NaiveDate) -> String {
    format!("duty_summary_{}.csv", on.format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::Slot,
        types::{DutyDay, DutyWeek},
    };

    #[test]
    fn schedule_csv_uses_display_headers() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 25).unwrap();
        let assignment = Assignment {
            date,
            day: DutyDay::Monday,
            week: DutyWeek::of(date),
            primary_1: Slot::Staff("Ada".into()),
            primary_2: Slot::Unassigned,
            quiet: Slot::Staff("Bo".into()),
        };
        let mut buf = Vec::new();
        write_schedule_csv(&mut buf, &[assignment]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Date,Day,Main Room 1,Main Room 2,Quiet Room\n\
             \"Monday, August 25, 2025\",Monday,Ada,UNASSIGNED,Bo\n"
        );
    }

    #[test]
    fn summary_csv_header() {
        let rows = [SummaryRow {
            staff_name: "Ada".into(),
            total_duties: 4,
            quiet_room_duties: 1,
            main_room_duties: 3,
        }];
        let mut buf = Vec::new();
        write_summary_csv(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "staff_name,total_duties,quiet_room_duties,main_room_duties\nAda,4,1,3\n"
        );
    }

    #[test]
    fn empty_exports_keep_their_headers() {
        let mut schedule = Vec::new();
        write_schedule_csv(&mut schedule, &[]).unwrap();
        assert_eq!(
            String::from_utf8(schedule).unwrap(),
            "Date,Day,Main Room 1,Main Room 2,Quiet Room\n"
        );

        let mut summary = Vec::new();
        write_summary_csv(&mut summary, &[]).unwrap();
        assert_eq!(
            String::from_utf8(summary).unwrap(),
            "staff_name,total_duties,quiet_room_duties,main_room_duties\n"
        );
    }

    #[test]
    fn file_names_are_date_stamped() {
        let on = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
        assert_eq!(schedule_file_name(on), "lunch_duty_schedule_20260109.csv");
        assert_eq!(summary_file_name(on), "duty_summary_20260109.csv");
    }
}
