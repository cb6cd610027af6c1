//! Pairing history: how often players have shared a table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{League, PlayerId};

/// An unordered pair of players.
///
/// The two IDs are stored in sorted order, so lookups are symmetric by
/// construction: `PairKey::new(a, b) == PairKey::new(b, a)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey(PlayerId, PlayerId);

impl PairKey {
    pub fn new(a: PlayerId, b: PlayerId) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
}

/// Teammate and opponent co-occurrence counts over the full match history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PairingHistory {
    teammate_counts: HashMap<PairKey, u32>,
    opponent_counts: HashMap<PairKey, u32>,
}

impl PairingHistory {
    /// How often two players have been teammates.
    pub fn teammate_count(&self, a: &PlayerId, b: &PlayerId) -> u32 {
        let key = PairKey::new(a.clone(), b.clone());
        self.teammate_counts.get(&key).copied().unwrap_or(0)
    }

    /// How often two players have faced each other.
    pub fn opponent_count(&self, a: &PlayerId, b: &PlayerId) -> u32 {
        let key = PairKey::new(a.clone(), b.clone());
        self.opponent_counts.get(&key).copied().unwrap_or(0)
    }

    /// The largest single count across both maps.
    ///
    /// Used as a global normalization constant for variety scoring. It is
    /// always computed over the full history, never scoped to a requested
    /// player subset.
    pub fn max_pairing_count(&self) -> u32 {
        self.teammate_counts
            .values()
            .chain(self.opponent_counts.values())
            .copied()
            .max()
            .unwrap_or(0)
    }

    fn record_teammates(&mut self, a: &PlayerId, b: &PlayerId) {
        let key = PairKey::new(a.clone(), b.clone());
        *self.teammate_counts.entry(key).or_insert(0) += 1;
    }

    fn record_opponents(&mut self, a: &PlayerId, b: &PlayerId) {
        let key = PairKey::new(a.clone(), b.clone());
        *self.opponent_counts.entry(key).or_insert(0) += 1;
    }
}

/// Build the pairing history from the full match history.
///
/// Each match contributes one teammate pair per two-player team, and one
/// opponent pair per cross-team player pair (up to 4 in doubles, exactly
/// 1 in singles).
pub fn pairing_history(league: &League) -> PairingHistory {
    let mut history = PairingHistory::default();

    for m in &league.matches {
        for team in [&m.team1, &m.team2] {
            if let [p1, p2] = team.players() {
                history.record_teammates(p1, p2);
            }
        }

        for p1 in m.team1.players() {
            for p2 in m.team2.players() {
                history.record_opponents(p1, p2);
            }
        }
    }

    history
}
