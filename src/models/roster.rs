//! Roster: the validated input model for a generation request.

use crate::models::pair::PairKey;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Errors that can occur while building a roster or generating a schedule.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScheduleError {
    /// Roster has no players.
    NoPlayers,
    /// Roster has no weeks.
    NoWeeks,
    /// A player name was empty after trimming.
    EmptyPlayerName,
    /// A player with this name already exists (names are unique, case-insensitive).
    DuplicatePlayerName(String),
    /// A constraint or availability line references a name not in the player list.
    UnknownPlayer(String),
    /// A pair constraint lists the same player twice.
    PlayerPairedWithSelf(String),
    /// The search finished without producing a single candidate.
    NoCandidates,
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::NoPlayers => write!(f, "No players specified - check your configuration"),
            ScheduleError::NoWeeks => write!(f, "No weeks specified - check your configuration"),
            ScheduleError::EmptyPlayerName => write!(f, "Player names must not be empty"),
            ScheduleError::DuplicatePlayerName(name) => {
                write!(f, "Player '{}' is listed more than once", name)
            }
            ScheduleError::UnknownPlayer(name) => {
                write!(f, "'{}' is not in the player list - check your configuration", name)
            }
            ScheduleError::PlayerPairedWithSelf(name) => {
                write!(f, "'{}' cannot be paired with themselves", name)
            }
            ScheduleError::NoCandidates => {
                write!(f, "Failed to generate a schedule - try again")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

/// Objective weights scaling the terms of the fitness score. Each is kept in
/// the 1..=10 range; out-of-range values are clamped at the input boundary.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Objectives {
    pub unique_pairings: u32,
    pub minimize_sitouts: u32,
    pub preferred_pairs: u32,
    pub max_pair_repeats: u32,
}

impl Default for Objectives {
    fn default() -> Self {
        Self {
            unique_pairings: 8,
            minimize_sitouts: 6,
            preferred_pairs: 7,
            max_pair_repeats: 3,
        }
    }
}

impl Objectives {
    /// Return a copy with every weight clamped into 1..=10.
    pub fn clamped(self) -> Self {
        Self {
            unique_pairings: self.unique_pairings.clamp(1, 10),
            minimize_sitouts: self.minimize_sitouts.clamp(1, 10),
            preferred_pairs: self.preferred_pairs.clamp(1, 10),
            max_pair_repeats: self.max_pair_repeats.clamp(1, 10),
        }
    }
}

/// Full input model for one generation request: who plays, when, who may or
/// may not pair up, and how the score terms are weighted. Immutable for the
/// duration of a search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Roster {
    /// Player names in entry order. Names are identities (exact string match).
    pub players: Vec<String>,
    /// Week labels in schedule order.
    pub weeks: Vec<String>,
    /// Week label -> players eligible to play that week. Players absent from a
    /// week's list are not considered for that week at all.
    pub availability: HashMap<String, Vec<String>>,
    /// Weeks flagged for aggregate display emphasis (no scoring effect).
    pub aggregate_weeks: HashSet<String>,
    /// Pair -> maximum desired number of times together across the horizon.
    pub preferred_pairs: HashMap<PairKey, u32>,
    /// Pairs that must never be scheduled together.
    pub forbidden_pairs: HashSet<PairKey>,
    pub objectives: Objectives,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// Create an empty roster with default objective weights.
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            weeks: Vec::new(),
            availability: HashMap::new(),
            aggregate_weeks: HashSet::new(),
            preferred_pairs: HashMap::new(),
            forbidden_pairs: HashSet::new(),
            objectives: Objectives::default(),
        }
    }

    /// Add a player. Names must be non-empty and unique (case-insensitive).
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<(), ScheduleError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ScheduleError::EmptyPlayerName);
        }
        let is_duplicate = self
            .players
            .iter()
            .any(|p| p.eq_ignore_ascii_case(trimmed));
        if is_duplicate {
            return Err(ScheduleError::DuplicatePlayerName(trimmed.to_string()));
        }
        self.players.push(trimmed.to_string());
        Ok(())
    }

    /// Add a week label (duplicates are ignored).
    pub fn add_week(&mut self, label: impl Into<String>) {
        let label = label.into();
        if !self.weeks.contains(&label) {
            self.weeks.push(label);
        }
    }

    /// Flag a week for aggregate display emphasis.
    pub fn mark_aggregate(&mut self, label: impl Into<String>) {
        self.aggregate_weeks.insert(label.into());
    }

    /// Set the list of players available in a week (replaces any previous list).
    pub fn set_availability(&mut self, week: impl Into<String>, players: Vec<String>) {
        self.availability.insert(week.into(), players);
    }

    /// Players available in a week, empty if none were listed.
    pub fn available_players(&self, week: &str) -> &[String] {
        self.availability
            .get(week)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Record that `a` and `b` should play together at most `max_times` weeks.
    pub fn add_preferred_pair(
        &mut self,
        a: &str,
        b: &str,
        max_times: u32,
    ) -> Result<(), ScheduleError> {
        let key = self.pair_key(a, b)?;
        self.preferred_pairs.insert(key, max_times.max(1));
        Ok(())
    }

    /// Record that `a` and `b` must never be scheduled together.
    pub fn add_forbidden_pair(&mut self, a: &str, b: &str) -> Result<(), ScheduleError> {
        let key = self.pair_key(a, b)?;
        self.forbidden_pairs.insert(key);
        Ok(())
    }

    /// Build a pair key from two names, requiring both to be known and distinct.
    fn pair_key(&self, a: &str, b: &str) -> Result<PairKey, ScheduleError> {
        if a == b {
            return Err(ScheduleError::PlayerPairedWithSelf(a.to_string()));
        }
        for name in [a, b] {
            if !self.players.iter().any(|p| p == name) {
                return Err(ScheduleError::UnknownPlayer(name.to_string()));
            }
        }
        Ok(PairKey::new(a, b))
    }

    /// Check the roster invariants before a search starts: at least one player
    /// and one week, every constraint built from two distinct known names, and
    /// every availability entry referencing known players.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.players.is_empty() {
            return Err(ScheduleError::NoPlayers);
        }
        if self.weeks.is_empty() {
            return Err(ScheduleError::NoWeeks);
        }
        let known: HashSet<&str> = self.players.iter().map(String::as_str).collect();
        for key in self.preferred_pairs.keys().chain(self.forbidden_pairs.iter()) {
            let (a, b) = key.players();
            if a == b {
                return Err(ScheduleError::PlayerPairedWithSelf(a.to_string()));
            }
            for name in [a, b] {
                if !known.contains(name) {
                    return Err(ScheduleError::UnknownPlayer(name.to_string()));
                }
            }
        }
        for names in self.availability.values() {
            for name in names {
                if !known.contains(name.as_str()) {
                    return Err(ScheduleError::UnknownPlayer(name.clone()));
                }
            }
        }
        Ok(())
    }
}
