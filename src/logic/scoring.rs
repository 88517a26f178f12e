//! Scoring: deterministic fitness of a candidate schedule.

use crate::models::{Roster, Schedule, ScoreResult, ScoreStats};

/// Penalty per occurrence beyond a preferred pair's cap (independent of the
/// objective weights).
const PREFERRED_OVERUSE_PENALTY: f64 = 50.0;
/// Penalty per forbidden-pair occurrence. The round builder never produces
/// these; scored anyway in case a schedule arrives from elsewhere.
const FORBIDDEN_PAIR_PENALTY: f64 = 100.0;
/// Penalty applied per unit of max-min sit-out spread once it exceeds the
/// tolerance.
const SITOUT_SPREAD_PENALTY: f64 = 5.0;
const SITOUT_SPREAD_TOLERANCE: u32 = 2;

/// Score a candidate against the roster's objectives. Pure function of its
/// inputs: the same candidate always yields the same result.
pub fn score_schedule(roster: &Roster, schedule: &Schedule) -> ScoreResult {
    let objectives = roster.objectives;
    let mut score = 0.0;
    let mut stats = ScoreStats::default();

    for &count in schedule.pair_counts.values() {
        if count == 1 {
            score += f64::from(objectives.unique_pairings) * 2.0;
            stats.unique_pairs += 1;
        } else if count == 2 {
            score += f64::from(objectives.unique_pairings);
        } else {
            score -= f64::from(count.saturating_sub(2)) * f64::from(objectives.max_pair_repeats);
        }
        stats.pair_repeats += count.saturating_sub(1);
    }

    for &count in schedule.sit_outs.values() {
        stats.total_sitouts += count;
        if count == 0 {
            score += f64::from(objectives.minimize_sitouts);
        } else if count == 1 {
            score += f64::from(objectives.minimize_sitouts) / 2.0;
        } else {
            score -= f64::from(count - 1) * f64::from(objectives.minimize_sitouts);
        }
    }

    for (key, &limit) in &roster.preferred_pairs {
        let count = schedule.pair_count(key);
        if count > 0 && count <= limit {
            score += f64::from(objectives.preferred_pairs) * f64::from(limit - count + 1);
            stats.preferred_used += count;
        } else if count > limit {
            score -= f64::from(count - limit) * PREFERRED_OVERUSE_PENALTY;
        }
    }

    for key in &roster.forbidden_pairs {
        let count = schedule.pair_count(key);
        if count > 0 {
            score -= f64::from(count) * FORBIDDEN_PAIR_PENALTY;
        }
    }

    let max_sitouts = schedule.sit_outs.values().copied().max().unwrap_or(0);
    let min_sitouts = schedule.sit_outs.values().copied().min().unwrap_or(0);
    let spread = max_sitouts - min_sitouts;
    if spread > SITOUT_SPREAD_TOLERANCE {
        score -= f64::from(spread) * SITOUT_SPREAD_PENALTY;
    }

    ScoreResult {
        score: score.round() as i64,
        stats,
    }
}
