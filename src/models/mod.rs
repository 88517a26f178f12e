//! Data structures for the group scheduler: players, pairings, roster, schedules.

mod pair;
mod roster;
mod schedule;

pub use pair::{PairKey, Pairing};
pub use roster::{Objectives, Roster, ScheduleError};
pub use schedule::{Schedule, ScoreResult, ScoreStats};
