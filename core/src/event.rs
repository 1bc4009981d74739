//! Diagnostic event log for a scheduling run.
//!
//! RULE: Events record what the engine decided. Nothing reads them back
//! to make a decision, so removing a variant never changes a schedule.

use crate::pool::PoolTier;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Every event emitted during a run.
/// Variants may be appended, never reordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DutyEvent {
    RunInitialized {
        seed:          u64,
        dates:         usize,
        staff:         usize,
        target_duties: u32,
    },
    PoolRelaxed {
        date:       NaiveDate,
        tier:       PoolTier,
        candidates: usize,
    },
    SlotsUnfilled {
        date:  NaiveDate,
        count: usize,
    },
    DateScheduled {
        date: NaiveDate,
        tier: PoolTier,
    },
}

impl DutyEvent {
    /// Stable string name for the variant.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::RunInitialized { .. } => "run_initialized",
            Self::PoolRelaxed { .. }    => "pool_relaxed",
            Self::SlotsUnfilled { .. }  => "slots_unfilled",
            Self::DateScheduled { .. }  => "date_scheduled",
        }
    }
}
