//! Round building: construct one full candidate schedule from a roster.

use crate::models::{PairKey, Roster, Schedule};
use rand::seq::SliceRandom;
use rand::Rng;

/// Bonus for a pair that has not occurred yet in this candidate.
const FRESH_PAIR_BONUS: i64 = 10;
/// Bonus for a preferred pair still under its cap.
const PREFERRED_UNDER_CAP_BONUS: i64 = 5;
/// Penalty per prior occurrence when a pair would repeat.
const REPEAT_PENALTY_PER_COUNT: i64 = 3;

/// Build one candidate schedule covering every week of the roster.
///
/// 1. Shuffle each week's available players (the sole source of randomness).
/// 2. Scan the permutation left to right; for each unpaired player, pick the
///    later unpaired partner with the strictly highest local score. Forbidden
///    pairs are never considered.
/// 3. Players left without a partner are recorded as sit-outs for that week.
///
/// Pair and sit-out counts accumulate across the weeks of this one candidate.
/// Always terminates with a valid assignment; there is no infeasible outcome.
pub fn build_schedule<R: Rng>(roster: &Roster, rng: &mut R) -> Schedule {
    let mut schedule = Schedule::new(&roster.players);

    for week in &roster.weeks {
        let mut shuffled: Vec<&str> = roster
            .available_players(week)
            .iter()
            .map(String::as_str)
            .collect();
        if shuffled.is_empty() {
            continue;
        }
        shuffled.shuffle(rng);

        let mut paired = vec![false; shuffled.len()];
        for i in 0..shuffled.len() {
            if paired[i] {
                continue;
            }
            let mut best_partner: Option<usize> = None;
            let mut best_score = i64::MIN;
            for j in (i + 1)..shuffled.len() {
                if paired[j] {
                    continue;
                }
                let key = PairKey::new(shuffled[i], shuffled[j]);
                if roster.forbidden_pairs.contains(&key) {
                    continue;
                }
                let score = partner_score(roster, &schedule, &key);
                if score > best_score {
                    best_score = score;
                    best_partner = Some(j);
                }
            }
            if let Some(j) = best_partner {
                paired[i] = true;
                paired[j] = true;
                schedule.record_pair(week, shuffled[i], shuffled[j]);
            }
        }

        for (i, player) in shuffled.iter().enumerate() {
            if !paired[i] {
                schedule.record_sitout(week, player);
            }
        }
    }

    schedule
}

/// Local desirability of forming this pair right now, given the counts
/// accumulated so far in the candidate.
fn partner_score(roster: &Roster, schedule: &Schedule, key: &PairKey) -> i64 {
    let count = i64::from(schedule.pair_count(key));
    let mut score = 0;
    if count == 0 {
        score += FRESH_PAIR_BONUS;
    }
    if let Some(&limit) = roster.preferred_pairs.get(key) {
        if count < i64::from(limit) {
            score += PREFERRED_UNDER_CAP_BONUS;
        }
    }
    if count > 0 {
        score -= count * REPEAT_PENALTY_PER_COUNT;
    }
    score
}
