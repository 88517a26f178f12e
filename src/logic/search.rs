//! Search driver: random-restart search retaining the best candidate found.

use crate::logic::rounds::build_schedule;
use crate::logic::scoring::score_schedule;
use crate::models::{Roster, Schedule, ScheduleError};
use rand::Rng;

/// Iterations per progress report.
pub const BATCH_SIZE: u32 = 100;

/// Generate `iterations` independent candidates and return the best-scoring
/// one with its score attached. A strictly higher score replaces the current
/// best, so ties keep the earliest candidate found.
///
/// `on_progress` receives a non-decreasing completion percentage in 0..=100
/// after each batch of [`BATCH_SIZE`] iterations; the final call reports 100.
/// The roster is validated up front, and nothing is attempted on failure.
pub fn generate_schedule<R, F>(
    roster: &Roster,
    iterations: u32,
    rng: &mut R,
    mut on_progress: F,
) -> Result<Schedule, ScheduleError>
where
    R: Rng,
    F: FnMut(f64),
{
    roster.validate()?;

    let mut best: Option<Schedule> = None;
    let mut best_score = i64::MIN;

    let mut done = 0;
    while done < iterations {
        let batch = BATCH_SIZE.min(iterations - done);
        for _ in 0..batch {
            let mut candidate = build_schedule(roster, rng);
            let result = score_schedule(roster, &candidate);
            if best.is_none() || result.score > best_score {
                best_score = result.score;
                candidate.score = Some(result);
                best = Some(candidate);
            }
        }
        done += batch;
        on_progress(f64::from(done) / f64::from(iterations) * 100.0);
    }

    best.ok_or(ScheduleError::NoCandidates)
}
