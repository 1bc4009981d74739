//! The duty assignment engine.
//!
//! EXECUTION ORDER (per date, fixed, never reordered):
//!   1. Build the candidate pool (strict, then relaxed tiers)
//!   2. Rank by (total duties, quiet-room duties)
//!   3. Resolve pairing tags into up to three picks
//!   4. Pad with UNASSIGNED
//!   5. Shuffle, then give the quiet room to the lowest quiet-room count
//!   6. Update the ledger
//!
//! RULES:
//!   - Dates are processed strictly in chronological order.
//!   - The ledger belongs to one run and is mutated only in step 6.
//!   - All randomness flows through the RngBank, and only in step 5.
//!   - Sentinels never touch the ledger.

use crate::{
    error::{DutyError, DutyResult},
    event::DutyEvent,
    ledger::StaffLedger,
    model::{Assignment, DutyDate, Schedule, Slot, StaffMember},
    pairing,
    pool::{CandidatePool, PoolTier},
    rng::{DutyRng, RngBank, RngStream},
    summary,
    types::{SLOTS_PER_DATE, UNASSIGNED},
};
use std::collections::HashSet;

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The seed actually used, drawn from entropy if none was given.
    pub seed:     u64,
    pub schedule: Schedule,
    pub events:   Vec<DutyEvent>,
}

pub struct DutyEngine {
    roster:   Vec<StaffMember>,
    ledger:   StaffLedger,
    rng_bank: RngBank,
    events:   Vec<DutyEvent>,
}

impl DutyEngine {
    /// Validate the roster and zero every counter.
    pub fn new(roster: Vec<StaffMember>, seed: Option<u64>) -> DutyResult<Self> {
        if roster.is_empty() {
            return Err(DutyError::EmptyRoster);
        }
        if let Some(reserved) = roster.iter().find(|m| m.name == UNASSIGNED) {
            return Err(DutyError::ReservedStaffName { name: reserved.name.clone() });
        }
        let mut seen = HashSet::with_capacity(roster.len());
        if let Some(dup) = roster.iter().find(|m| !seen.insert(m.name.as_str())) {
            return Err(DutyError::DuplicateStaff { name: dup.name.clone() });
        }

        Ok(Self {
            ledger:   StaffLedger::new(&roster),
            rng_bank: RngBank::new(seed),
            events:   Vec::new(),
            roster,
        })
    }

    pub fn seed(&self) -> u64 {
        self.rng_bank.master_seed()
    }

    /// Schedule every date in order. Consumes the engine: counters
    /// never carry over into another run.
    pub fn run(mut self, dates: &[DutyDate]) -> DutyResult<RunReport> {
        let seed = self.seed();
        if dates.is_empty() {
            return Ok(RunReport { seed, schedule: Schedule::default(), events: self.events });
        }
        if let Some(pair) = dates.windows(2).find(|w| w[1].date < w[0].date) {
            return Err(DutyError::DatesOutOfOrder {
                previous: pair[0].date,
                next:     pair[1].date,
            });
        }

        let target_duties = target_duties(dates.len(), self.roster.len());
        self.emit(DutyEvent::RunInitialized {
            seed,
            dates: dates.len(),
            staff: self.roster.len(),
            target_duties,
        });
        log::info!(
            "scheduling {} dates for {} staff (seed={seed}, target={target_duties})",
            dates.len(),
            self.roster.len()
        );

        let mut rng = self.rng_bank.for_stream(RngStream::RoleShuffle);
        let assignments = dates
            .iter()
            .map(|date| self.schedule_date(date, target_duties, &mut rng))
            .collect();

        let schedule = Schedule {
            assignments,
            summary: summary::summarize(&self.roster, &self.ledger),
        };
        Ok(RunReport { seed, schedule, events: self.events })
    }

    fn schedule_date(
        &mut self,
        date: &DutyDate,
        target_duties: u32,
        rng: &mut DutyRng,
    ) -> Assignment {
        let (tier, candidates, picked, mut selected) = {
            let pool = CandidatePool::build(&self.roster, &self.ledger, date, target_duties);
            let tier = pool.tier;
            let candidates = pool.members.len();
            let picks = pairing::pick_staff(&pool.ranked(&self.ledger));
            let selected: [Slot; SLOTS_PER_DATE] = std::array::from_fn(|i| {
                picks
                    .get(i)
                    .map(|m| Slot::Staff(m.name.clone()))
                    .unwrap_or(Slot::Unassigned)
            });
            (tier, candidates, picks.len(), selected)
        };

        if tier != PoolTier::Strict {
            self.emit(DutyEvent::PoolRelaxed { date: date.date, tier, candidates });
        }
        let unfilled = SLOTS_PER_DATE - picked;
        if unfilled > 0 {
            log::warn!("{}: {unfilled} slot(s) left UNASSIGNED", date.date);
            self.emit(DutyEvent::SlotsUnfilled { date: date.date, count: unfilled });
        }

        rng.shuffle(&mut selected);
        // Stable: staff with equal quiet-room counts keep their shuffled order.
        selected.sort_by_key(|slot| match slot {
            Slot::Staff(name) => self.ledger.state(name).quiet_room_duties,
            Slot::Unassigned  => u32::MAX,
        });
        let [quiet, primary_1, primary_2] = selected;

        for name in [&quiet, &primary_1, &primary_2].into_iter().filter_map(|s| s.staff_name()) {
            self.ledger.record_duty(name, date.week);
        }
        if let Some(name) = quiet.staff_name() {
            self.ledger.record_quiet_room(name);
        }

        self.emit(DutyEvent::DateScheduled { date: date.date, tier });
        Assignment {
            date: date.date,
            day: date.day,
            week: date.week,
            primary_1,
            primary_2,
            quiet,
        }
    }

    fn emit(&mut self, event: DutyEvent) {
        log::debug!("{}: {event:?}", event.event_type());
        self.events.push(event);
    }
}

/// Average slots per person, rounded down. A soft ceiling only.
pub fn target_duties(date_count: usize, staff_count: usize) -> u32 {
    (date_count * SLOTS_PER_DATE / staff_count) as u32
}

/// Assign staff to every date. Convenience wrapper over [`DutyEngine`].
pub fn assign(
    dates: &[DutyDate],
    roster: &[StaffMember],
    seed: Option<u64>,
) -> DutyResult<Schedule> {
    Ok(DutyEngine::new(roster.to_vec(), seed)?.run(dates)?.schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Availability;
    use chrono::NaiveDate;

    #[test]
    fn target_is_floor_of_average() {
        assert_eq!(target_duties(10, 4), 7);
        assert_eq!(target_duties(1, 5), 0);
    }

    #[test]
    fn empty_roster_is_rejected() {
        assert!(matches!(DutyEngine::new(vec![], Some(1)), Err(DutyError::EmptyRoster)));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let roster = vec![
            StaffMember::new("Ada", Availability::all()),
            StaffMember::new("Ada", Availability::all()),
        ];
        assert!(matches!(
            DutyEngine::new(roster, Some(1)),
            Err(DutyError::DuplicateStaff { name }) if name == "Ada"
        ));
    }

    #[test]
    fn sentinel_name_cannot_be_staff() {
        let roster = vec![
            StaffMember::new(UNASSIGNED, Availability::all()),
            StaffMember::new("Bo", Availability::all()),
            StaffMember::new("Cy", Availability::all()),
        ];
        assert!(matches!(
            DutyEngine::new(roster, Some(1)),
            Err(DutyError::ReservedStaffName { .. })
        ));
    }

    #[test]
    fn dates_must_not_go_backwards() {
        let roster = vec![StaffMember::new("Ada", Availability::all())];
        let later = DutyDate::new(NaiveDate::from_ymd_opt(2025, 9, 3).unwrap()).unwrap();
        let earlier = DutyDate::new(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()).unwrap();
        let engine = DutyEngine::new(roster, Some(1)).unwrap();
        assert!(matches!(
            engine.run(&[later, earlier]),
            Err(DutyError::DatesOutOfOrder { .. })
        ));
    }

    #[test]
    fn relaxation_and_underfill_are_logged() {
        let roster = vec![
            StaffMember::new("Ada", Availability::all()),
            StaffMember::new("Bo", Availability::all()),
        ];
        let date = DutyDate::new(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()).unwrap();
        let report = DutyEngine::new(roster, Some(3)).unwrap().run(&[date]).unwrap();

        let kinds: Vec<_> = report.events.iter().map(DutyEvent::event_type).collect();
        assert_eq!(
            kinds,
            ["run_initialized", "pool_relaxed", "slots_unfilled", "date_scheduled"]
        );
        assert_eq!(report.seed, 3);
    }
}
