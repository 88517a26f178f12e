//! Scheduling logic: round building, scoring, and the search driver.

mod rounds;
mod scoring;
mod search;

pub use rounds::build_schedule;
pub use scoring::score_schedule;
pub use search::{generate_schedule, BATCH_SIZE};
