//! Per-staff running counters for one scheduling run.
//!
//! RULE: The ledger is owned by exactly one engine and mutated only
//! after a date's roles are final. It is never shared between runs.

use crate::{
    model::StaffMember,
    types::{DutyWeek, StaffName},
};
use std::collections::HashMap;

/// Counters for one staff member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaffState {
    pub total_duties:      u32,
    pub quiet_room_duties: u32,
    /// `None` until the first duty; never equal to any real week.
    pub last_duty_week:    Option<DutyWeek>,
}

impl StaffState {
    pub fn worked_in(&self, week: DutyWeek) -> bool {
        self.last_duty_week == Some(week)
    }

    /// Ranking key: lowest load first, then least quiet-room use.
    pub fn load_key(&self) -> (u32, u32) {
        (self.total_duties, self.quiet_room_duties)
    }
}

pub struct StaffLedger {
    states: HashMap<StaffName, StaffState>,
}

impl StaffLedger {
    pub fn new(roster: &[StaffMember]) -> Self {
        Self {
            states: roster
                .iter()
                .map(|m| (m.name.clone(), StaffState::default()))
                .collect(),
        }
    }

    pub fn state(&self, name: &str) -> StaffState {
        self.states.get(name).copied().unwrap_or_default()
    }

    pub fn record_duty(&mut self, name: &str, week: DutyWeek) {
        if let Some(state) = self.states.get_mut(name) {
            state.total_duties += 1;
            state.last_duty_week = Some(week);
        }
    }

    pub fn record_quiet_room(&mut self, name: &str) {
        if let Some(state) = self.states.get_mut(name) {
            state.quiet_room_duties += 1;
        }
    }
}
