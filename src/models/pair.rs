//! PairKey and Pairing: the unordered pair identity and per-week result entries.

use serde::{Deserialize, Serialize};

/// Canonical identity of an unordered player pair: the two names sorted and
/// joined with `|`, so `(A,B)` and `(B,A)` always produce the same key.
/// Serializes as a plain string, which also makes it usable as a JSON map key.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairKey(String);

impl PairKey {
    /// Build the canonical key for two player names (order does not matter).
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self(format!("{}|{}", a, b))
        } else {
            Self(format!("{}|{}", b, a))
        }
    }

    /// The canonical string form, e.g. `"Alice|Bob"`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two player names in canonical (sorted) order.
    pub fn players(&self) -> (&str, &str) {
        // The key is only ever built via `new`, so the separator is present.
        self.0.split_once('|').unwrap_or((self.0.as_str(), ""))
    }
}

impl std::fmt::Display for PairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry in a week's result list: either two players paired together
/// or a single player sitting the week out.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pairing {
    /// Two distinct players scheduled together this week.
    Pair { a: String, b: String },
    /// A player who was available but got no partner this week.
    Sitout { player: String },
}

impl Pairing {
    /// The pair key for a `Pair` entry; `None` for sit-outs.
    pub fn key(&self) -> Option<PairKey> {
        match self {
            Pairing::Pair { a, b } => Some(PairKey::new(a, b)),
            Pairing::Sitout { .. } => None,
        }
    }
}
