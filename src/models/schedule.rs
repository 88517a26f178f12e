//! Schedule candidates and score results.

use crate::models::pair::{PairKey, Pairing};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Statistics view of a scored schedule (for API / display).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoreStats {
    /// Pairs that occurred exactly once across the whole schedule.
    pub unique_pairs: u32,
    /// Sit-outs summed over all players and weeks.
    pub total_sitouts: u32,
    /// Preferred-pair occurrences that fell within their cap.
    pub preferred_used: u32,
    /// Occurrences beyond the first time a pair played together.
    pub pair_repeats: u32,
}

/// Scalar fitness score (larger is better) plus its stats breakdown.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: i64,
    pub stats: ScoreStats,
}

/// One candidate schedule: per-week results plus the cumulative pair and
/// sit-out counters, rebuilt from scratch for every candidate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Schedule {
    /// Week label -> ordered pairing/sit-out results. Weeks with nobody
    /// available have no entry.
    pub rounds: HashMap<String, Vec<Pairing>>,
    /// Pair -> number of weeks that pair occurred together.
    pub pair_counts: HashMap<PairKey, u32>,
    /// Player -> number of weeks sat out. Every roster player has an entry.
    pub sit_outs: HashMap<String, u32>,
    /// Attached once this candidate is retained as the best found.
    pub score: Option<ScoreResult>,
}

impl Schedule {
    /// Empty schedule with a zero sit-out entry for every roster player.
    pub fn new(players: &[String]) -> Self {
        Self {
            rounds: HashMap::new(),
            pair_counts: HashMap::new(),
            sit_outs: players.iter().map(|p| (p.clone(), 0)).collect(),
            score: None,
        }
    }

    /// Append a pair to a week's results and bump its running count.
    pub fn record_pair(&mut self, week: &str, a: &str, b: &str) {
        self.rounds
            .entry(week.to_string())
            .or_default()
            .push(Pairing::Pair {
                a: a.to_string(),
                b: b.to_string(),
            });
        *self.pair_counts.entry(PairKey::new(a, b)).or_insert(0) += 1;
    }

    /// Append a sit-out to a week's results and bump the player's counter.
    pub fn record_sitout(&mut self, week: &str, player: &str) {
        self.rounds
            .entry(week.to_string())
            .or_default()
            .push(Pairing::Sitout {
                player: player.to_string(),
            });
        *self.sit_outs.entry(player.to_string()).or_insert(0) += 1;
    }

    /// How many weeks this pair played together (0 if never).
    pub fn pair_count(&self, key: &PairKey) -> u32 {
        self.pair_counts.get(key).copied().unwrap_or(0)
    }

    /// The results for one week, empty if the week had nobody available.
    pub fn week_results(&self, week: &str) -> &[Pairing] {
        self.rounds.get(week).map(Vec::as_slice).unwrap_or(&[])
    }
}
