//! Pairing-tag resolution over a ranked candidate pool.
//!
//! Precedence, strongest first:
//!   1. fill all SLOTS_PER_DATE slots when anyone is left,
//!   2. at most AVOID_PAIRING_CAP avoid-pairing staff per date,
//!   3. schedule prefer-pairing staff together.
//!
//! Someone carrying both tags is treated as avoid-pairing first: the
//! prefer-pairing pass never pushes the avoid count past the cap.

use crate::{model::StaffMember, types::SLOTS_PER_DATE};

/// Most avoid-pairing staff allowed on one date before the last resort pass.
pub const AVOID_PAIRING_CAP: usize = 1;

/// Prefer-pairing staff needed for the pairing pass to be kept.
const MIN_PAIR: usize = 2;

/// Pick up to SLOTS_PER_DATE staff from `ranked`, best first.
/// Returns fewer only when the pool itself is smaller.
pub fn pick_staff<'a>(ranked: &[&'a StaffMember]) -> Vec<&'a StaffMember> {
    let mut picks = prefer_pairing_picks(ranked);
    fill_within_avoid_cap(ranked, &mut picks);
    if picks.len() < SLOTS_PER_DATE {
        log::trace!("avoid-pairing cap relaxed, {} of {SLOTS_PER_DATE} picked", picks.len());
        fill_ignoring_avoid_cap(ranked, &mut picks);
    }
    picks
}

fn prefer_pairing_picks<'a>(ranked: &[&'a StaffMember]) -> Vec<&'a StaffMember> {
    let tagged: Vec<&StaffMember> = ranked.iter().copied().filter(|m| m.prefer_pairing).collect();
    if tagged.len() < MIN_PAIR {
        return Vec::new();
    }

    let mut picks = Vec::with_capacity(SLOTS_PER_DATE);
    for member in tagged {
        if picks.len() == SLOTS_PER_DATE {
            break;
        }
        if member.avoid_pairing && avoid_count(&picks) >= AVOID_PAIRING_CAP {
            continue;
        }
        picks.push(member);
    }

    if picks.len() >= MIN_PAIR {
        picks
    } else {
        Vec::new()
    }
}

fn fill_within_avoid_cap<'a>(ranked: &[&'a StaffMember], picks: &mut Vec<&'a StaffMember>) {
    for member in ranked {
        if picks.len() == SLOTS_PER_DATE {
            return;
        }
        if is_picked(picks, member) {
            continue;
        }
        if member.avoid_pairing && avoid_count(picks) >= AVOID_PAIRING_CAP {
            continue;
        }
        picks.push(*member);
    }
}

fn fill_ignoring_avoid_cap<'a>(ranked: &[&'a StaffMember], picks: &mut Vec<&'a StaffMember>) {
    for member in ranked {
        if picks.len() == SLOTS_PER_DATE {
            return;
        }
        if !is_picked(picks, member) {
            picks.push(*member);
        }
    }
}

fn avoid_count(picks: &[&StaffMember]) -> usize {
    picks.iter().filter(|m| m.avoid_pairing).count()
}

fn is_picked(picks: &[&StaffMember], member: &StaffMember) -> bool {
    picks.iter().any(|p| p.name == member.name)
}
