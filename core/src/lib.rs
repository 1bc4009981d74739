//! Weekly lunch-duty scheduling.
//!
//! A greedy, fairness-aware assignment of three staff (two primary room,
//! one quiet room) to every duty date, walking dates in order and relaxing
//! constraints only when the strict candidate pool runs short.

pub mod audit;
pub mod calendar;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod export;
pub mod ledger;
pub mod model;
pub mod pairing;
pub mod pool;
pub mod rng;
pub mod roster;
pub mod summary;
pub mod types;

pub use engine::{assign, DutyEngine, RunReport};
pub use error::{DutyError, DutyResult};
pub use model::{Assignment, Availability, DutyDate, Schedule, Slot, StaffMember, SummaryRow};
