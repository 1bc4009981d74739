//! Per-staff duty tallies, derived once the run is complete.

use crate::{
    ledger::StaffLedger,
    model::{StaffMember, SummaryRow},
};

/// One row per roster member, heaviest load first. Equal totals keep
/// roster order.
pub fn summarize(roster: &[StaffMember], ledger: &StaffLedger) -> Vec<SummaryRow> {
    let mut rows: Vec<SummaryRow> = roster
        .iter()
        .map(|member| {
            let state = ledger.state(&member.name);
            SummaryRow {
                staff_name:        member.name.clone(),
                total_duties:      state.total_duties,
                quiet_room_duties: state.quiet_room_duties,
                main_room_duties:  state.total_duties - state.quiet_room_duties,
            }
        })
        .collect();
    rows.sort_by(|a, b| b.total_duties.cmp(&a.total_duties));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::Availability, types::DutyWeek};

    #[test]
    fn sorted_descending_and_stable() {
        let roster: Vec<_> = ["A", "B", "C"]
            .iter()
            .map(|n| StaffMember::new(*n, Availability::all()))
            .collect();
        let mut ledger = StaffLedger::new(&roster);
        let week = DutyWeek { iso_year: 2025, iso_week: 40 };
        ledger.record_duty("C", week);
        ledger.record_quiet_room("C");

        let rows = summarize(&roster, &ledger);
        let order: Vec<_> = rows.iter().map(|r| r.staff_name.as_str()).collect();
        assert_eq!(order, ["C", "A", "B"]);
        assert_eq!(rows[0].main_room_duties, 0);
        assert_eq!(rows[0].quiet_room_duties, 1);
    }
}
