//! Deterministic random number generation.
//!
//! RULE: Nothing in the engine may call any platform RNG directly.
//! All randomness flows through a DutyRng derived from the run's master
//! seed. When the caller gives no seed, one master seed is drawn from OS
//! entropy up front and recorded, so every run can be replayed.
//!
//! Randomness only ever reorders candidates that are already selected.
//! It never decides who is eligible.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG stream.
pub struct DutyRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl DutyRng {
    /// Create a stream from the master seed and a stable stream index.
    /// The index must never change once assigned.
    pub fn new(master_seed: u64, stream_index: u64) -> Self {
        let derived_seed = master_seed ^ (stream_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Shuffle `items` in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}

/// Resolves the master seed for one run.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    /// Use `seed` when given, otherwise draw one from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            master_seed: seed.unwrap_or_else(rand::random),
        }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn for_stream(&self, stream: RngStream) -> DutyRng {
        DutyRng::new(self.master_seed, stream as u64).with_name(stream.name())
    }
}

/// Stable stream slot assignments.
/// NEVER reorder or remove entries, only append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum RngStream {
    RoleShuffle = 0,
}

impl RngStream {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RoleShuffle => "role_shuffle",
        }
    }
}
