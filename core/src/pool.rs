//! Candidate pool construction: the relaxation cascade.
//!
//! Tiers are tried in order; the first one admitting at least
//! SLOTS_PER_DATE staff wins. Availability is checked by every tier
//! and is never relaxed.

use crate::{
    ledger::{StaffLedger, StaffState},
    model::{DutyDate, StaffMember},
    types::SLOTS_PER_DATE,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PoolTier {
    /// Available, not yet on duty this week, at or under the fairness target.
    Strict,
    /// Available and at or under the fairness target.
    IgnoreCooldown,
    /// Everyone available on the weekday.
    AvailabilityOnly,
}

impl PoolTier {
    /// Priority order. Cooldown gives way before fairness.
    pub const CASCADE: [PoolTier; 3] = [
        PoolTier::Strict,
        PoolTier::IgnoreCooldown,
        PoolTier::AvailabilityOnly,
    ];

    pub fn admits(
        &self,
        member: &StaffMember,
        state: &StaffState,
        date: &DutyDate,
        target_duties: u32,
    ) -> bool {
        if !member.availability.is_available(date.day) {
            return false;
        }
        let under_target = state.total_duties <= target_duties;
        match self {
            Self::Strict           => under_target && !state.worked_in(date.week),
            Self::IgnoreCooldown   => under_target,
            Self::AvailabilityOnly => true,
        }
    }
}

/// Staff eligible for one date, in roster order until ranked.
pub struct CandidatePool<'a> {
    pub tier:    PoolTier,
    pub members: Vec<&'a StaffMember>,
}

impl<'a> CandidatePool<'a> {
    pub fn build(
        roster: &'a [StaffMember],
        ledger: &StaffLedger,
        date: &DutyDate,
        target_duties: u32,
    ) -> Self {
        PoolTier::CASCADE
            .into_iter()
            .map(|tier| Self::for_tier(tier, roster, ledger, date, target_duties))
            .find(|pool| pool.members.len() >= SLOTS_PER_DATE)
            .unwrap_or_else(|| {
                Self::for_tier(PoolTier::AvailabilityOnly, roster, ledger, date, target_duties)
            })
    }

    fn for_tier(
        tier: PoolTier,
        roster: &'a [StaffMember],
        ledger: &StaffLedger,
        date: &DutyDate,
        target_duties: u32,
    ) -> Self {
        let members = roster
            .iter()
            .filter(|m| tier.admits(m, &ledger.state(&m.name), date, target_duties))
            .collect();
        Self { tier, members }
    }

    /// Ascending by (total duties, quiet-room duties). Stable, so equal
    /// loads keep roster order.
    pub fn ranked(mut self, ledger: &StaffLedger) -> Vec<&'a StaffMember> {
        self.members.sort_by_key(|m| ledger.state(&m.name).load_key());
        self.members
    }
}
