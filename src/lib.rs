//! Golf group pairing scheduler: library with models, scheduling logic,
//! configuration parsing, and schedule export.

pub mod export;
pub mod logic;
pub mod models;
pub mod parse;

pub use export::{schedule_csv, schedule_summary};
pub use logic::{build_schedule, generate_schedule, score_schedule, BATCH_SIZE};
pub use models::{
    Objectives, PairKey, Pairing, Roster, Schedule, ScheduleError, ScoreResult, ScoreStats,
};
pub use parse::{parse_config, EXAMPLE_CONFIG};
