//! Tournament model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, MatchId, PlayerId, TournamentId};

/// A tournament grouping a set of matches and participants.
///
/// Tournaments are stored as part of the league data but drive no derived
/// computation; match-making only looks at the flat match history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    /// Unique identifier
    pub id: TournamentId,

    /// Tournament name
    pub name: String,

    /// When the tournament started
    pub start_date: DateTime<Utc>,

    /// When the tournament ended, if finished
    pub end_date: Option<DateTime<Utc>>,

    /// Participating players
    pub participants: Vec<PlayerId>,

    /// Matches played in this tournament
    #[serde(default)]
    pub matches: Vec<MatchId>,

    /// Winning player, if decided
    pub winner: Option<PlayerId>,
}

impl Tournament {
    /// Create a new Tournament with a content-derived ID.
    pub fn new(name: impl Into<String>, start_date: DateTime<Utc>, participants: Vec<PlayerId>) -> Self {
        let name = name.into();
        let id = EntityId::generate(&[&name, &start_date.to_rfc3339()]);
        Self {
            id,
            name,
            start_date,
            end_date: None,
            participants,
            matches: Vec::new(),
            winner: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tournament_creation() {
        let start = "2025-08-01T10:00:00Z".parse().unwrap();
        let t = Tournament::new(
            "Summer Cup",
            start,
            vec![PlayerId::from("p1"), PlayerId::from("p2")],
        );

        assert_eq!(t.name, "Summer Cup");
        assert!(t.end_date.is_none());
        assert!(t.matches.is_empty());
        assert!(t.winner.is_none());
        assert!(!t.id.as_str().is_empty());
    }

    #[test]
    fn test_tournament_serialization() {
        let start = "2025-08-01T10:00:00Z".parse().unwrap();
        let t = Tournament::new("Summer Cup", start, vec![PlayerId::from("p1")]);

        let json = serde_json::to_string(&t).unwrap();
        let deserialized: Tournament = serde_json::from_str(&json).unwrap();
        assert_eq!(t.id, deserialized.id);
        assert_eq!(t.name, deserialized.name);
    }
}
