//! Scheduling data model: duty dates, staff, slots and the run output.

use crate::{
    error::{DutyError, DutyResult},
    types::{DutyDay, DutyWeek, StaffName, UNASSIGNED},
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One calendar day requiring staffing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DutyDate {
    pub date: NaiveDate,
    pub day:  DutyDay,
    pub week: DutyWeek,
}

impl DutyDate {
    /// Derive weekday and ISO week from `date`.
    /// Fails if duty does not run on that weekday.
    pub fn new(date: NaiveDate) -> DutyResult<Self> {
        let day = DutyDay::from_weekday(date.weekday()).ok_or_else(|| {
            DutyError::NotADutyDay {
                date,
                weekday: date.weekday().to_string(),
            }
        })?;
        Ok(Self { date, day, week: DutyWeek::of(date) })
    }
}

/// Per-weekday availability flags.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Availability {
    pub monday:    bool,
    pub tuesday:   bool,
    pub wednesday: bool,
}

impl Availability {
    pub fn all() -> Self {
        Self { monday: true, tuesday: true, wednesday: true }
    }

    pub fn only(days: &[DutyDay]) -> Self {
        let mut availability = Self::default();
        for day in days {
            availability.set(*day, true);
        }
        availability
    }

    pub fn is_available(&self, day: DutyDay) -> bool {
        match day {
            DutyDay::Monday    => self.monday,
            DutyDay::Tuesday   => self.tuesday,
            DutyDay::Wednesday => self.wednesday,
        }
    }

    pub fn set(&mut self, day: DutyDay, available: bool) {
        match day {
            DutyDay::Monday    => self.monday = available,
            DutyDay::Tuesday   => self.tuesday = available,
            DutyDay::Wednesday => self.wednesday = available,
        }
    }
}

/// One schedulable person. Read-only for the duration of a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StaffMember {
    pub name:           StaffName,
    pub availability:   Availability,
    #[serde(default)]
    pub avoid_pairing:  bool,
    #[serde(default)]
    pub prefer_pairing: bool,
}

impl StaffMember {
    pub fn new(name: impl Into<StaffName>, availability: Availability) -> Self {
        Self {
            name: name.into(),
            availability,
            avoid_pairing: false,
            prefer_pairing: false,
        }
    }

    pub fn avoiding_pairing(mut self) -> Self {
        self.avoid_pairing = true;
        self
    }

    pub fn preferring_pairing(mut self) -> Self {
        self.prefer_pairing = true;
        self
    }
}

/// A filled duty slot: a staff member, or the unfilled marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Slot {
    Staff(StaffName),
    Unassigned,
}

impl Slot {
    pub fn staff_name(&self) -> Option<&str> {
        match self {
            Self::Staff(name) => Some(name),
            Self::Unassigned  => None,
        }
    }

    pub fn is_unassigned(&self) -> bool {
        matches!(self, Self::Unassigned)
    }
}

impl From<String> for Slot {
    fn from(value: String) -> Self {
        if value == UNASSIGNED {
            Self::Unassigned
        } else {
            Self::Staff(value)
        }
    }
}

impl From<Slot> for String {
    fn from(slot: Slot) -> Self {
        match slot {
            Slot::Staff(name) => name,
            Slot::Unassigned  => UNASSIGNED.to_string(),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Staff(name) => f.write_str(name),
            Self::Unassigned  => f.write_str(UNASSIGNED),
        }
    }
}

/// The three roles filled on one duty date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assignment {
    pub date:      NaiveDate,
    pub day:       DutyDay,
    pub week:      DutyWeek,
    pub primary_1: Slot,
    pub primary_2: Slot,
    pub quiet:     Slot,
}

impl Assignment {
    /// All three slots, quiet room last.
    pub fn slots(&self) -> [&Slot; 3] {
        [&self.primary_1, &self.primary_2, &self.quiet]
    }

    /// Staff actually scheduled on this date, sentinels excluded.
    pub fn staff(&self) -> impl Iterator<Item = &str> {
        self.slots().into_iter().filter_map(Slot::staff_name)
    }

    pub fn unfilled_count(&self) -> usize {
        self.slots().iter().filter(|s| s.is_unassigned()).count()
    }
}

/// Per-staff tally derived once all assignments are final.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryRow {
    pub staff_name:        StaffName,
    pub total_duties:      u32,
    pub quiet_room_duties: u32,
    pub main_room_duties:  u32,
}

/// Output of one scheduling run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Schedule {
    pub assignments: Vec<Assignment>,
    pub summary:     Vec<SummaryRow>,
}
