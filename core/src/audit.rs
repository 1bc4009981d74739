//! Post-hoc checks over a finished schedule.
//!
//! The engine never reports its own compromises. Callers run an audit
//! over the output to surface unfilled slots, avoid-pairing collisions,
//! repeat duties within a week and the overall spread of load.

use crate::{
    model::{Schedule, StaffMember},
    types::{DutyWeek, StaffName},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// A date carrying more than one avoid-pairing staff member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PairingConflict {
    pub date:  NaiveDate,
    pub staff: Vec<StaffName>,
}

/// Someone on duty more than once in the same ISO week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeekRepeat {
    pub staff_name: StaffName,
    pub week:       DutyWeek,
    pub duties:     u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleAudit {
    pub unfilled_slots:          usize,
    pub unfilled_dates:          Vec<NaiveDate>,
    pub avoid_pairing_conflicts: Vec<PairingConflict>,
    pub same_week_repeats:       Vec<WeekRepeat>,
    pub min_duties:              u32,
    pub max_duties:              u32,
}

impl ScheduleAudit {
    pub fn of(schedule: &Schedule, roster: &[StaffMember]) -> Self {
        let avoiders: HashSet<&str> = roster
            .iter()
            .filter(|m| m.avoid_pairing)
            .map(|m| m.name.as_str())
            .collect();

        let mut unfilled_slots = 0;
        let mut unfilled_dates = Vec::new();
        let mut avoid_pairing_conflicts = Vec::new();
        let mut per_week: BTreeMap<(DutyWeek, &str), u32> = BTreeMap::new();

        for assignment in &schedule.assignments {
            let unfilled = assignment.unfilled_count();
            if unfilled > 0 {
                unfilled_slots += unfilled;
                unfilled_dates.push(assignment.date);
            }

            let tagged: Vec<StaffName> = assignment
                .staff()
                .filter(|name| avoiders.contains(name))
                .map(str::to_string)
                .collect();
            if tagged.len() > 1 {
                avoid_pairing_conflicts.push(PairingConflict { date: assignment.date, staff: tagged });
            }

            for name in assignment.staff() {
                *per_week.entry((assignment.week, name)).or_default() += 1;
            }
        }

        let same_week_repeats = per_week
            .into_iter()
            .filter(|(_, duties)| *duties > 1)
            .map(|((week, name), duties)| WeekRepeat {
                staff_name: name.to_string(),
                week,
                duties,
            })
            .collect();

        let totals = schedule.summary.iter().map(|row| row.total_duties);
        Self {
            unfilled_slots,
            unfilled_dates,
            avoid_pairing_conflicts,
            same_week_repeats,
            min_duties: totals.clone().min().unwrap_or(0),
            max_duties: totals.max().unwrap_or(0),
        }
    }

    pub fn spread(&self) -> u32 {
        self.max_duties - self.min_duties
    }

    /// Everyone within one duty of everyone else.
    pub fn is_balanced(&self) -> bool {
        self.spread() <= 1
    }

    pub fn is_clean(&self) -> bool {
        self.unfilled_slots == 0
            && self.avoid_pairing_conflicts.is_empty()
            && self.same_week_repeats.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Assignment, Availability, Slot, SummaryRow};
    use crate::types::DutyDay;

    fn staff(name: &str) -> Slot {
        Slot::Staff(name.into())
    }

    fn row(name: &str, total: u32) -> SummaryRow {
        SummaryRow {
            staff_name:        name.into(),
            total_duties:      total,
            quiet_room_duties: 0,
            main_room_duties:  total,
        }
    }

    #[test]
    fn flags_every_kind_of_compromise() {
        let roster = vec![
            StaffMember::new("A", Availability::all()).avoiding_pairing(),
            StaffMember::new("B", Availability::all()).avoiding_pairing(),
            StaffMember::new("C", Availability::all()),
        ];
        let week = DutyWeek { iso_year: 2025, iso_week: 36 };
        let mon = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let tue = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap();
        let schedule = Schedule {
            assignments: vec![
                Assignment {
                    date: mon, day: DutyDay::Monday, week,
                    primary_1: staff("A"), primary_2: staff("B"), quiet: staff("C"),
                },
                Assignment {
                    date: tue, day: DutyDay::Tuesday, week,
                    primary_1: staff("C"), primary_2: Slot::Unassigned, quiet: staff("A"),
                },
            ],
            summary: vec![row("A", 2), row("C", 2), row("B", 1)],
        };

        let audit = ScheduleAudit::of(&schedule, &roster);
        assert_eq!(audit.unfilled_slots, 1);
        assert_eq!(audit.unfilled_dates, [tue]);
        assert_eq!(audit.avoid_pairing_conflicts.len(), 1);
        assert_eq!(audit.avoid_pairing_conflicts[0].staff, ["A", "B"]);
        let repeated: Vec<_> = audit.same_week_repeats.iter().map(|r| r.staff_name.as_str()).collect();
        assert_eq!(repeated, ["A", "C"]);
        assert_eq!(audit.spread(), 1);
        assert!(audit.is_balanced());
        assert!(!audit.is_clean());
    }

    #[test]
    fn empty_schedule_is_clean() {
        let audit = ScheduleAudit::of(&Schedule::default(), &[]);
        assert!(audit.is_clean());
        assert_eq!(audit.spread(), 0);
    }
}
