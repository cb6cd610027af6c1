//! Match result model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, MatchId, Team};

/// The kind of game a match was played as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    #[default]
    Casual,
    Tournament,
    League,
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameType::Casual => write!(f, "casual"),
            GameType::Tournament => write!(f, "tournament"),
            GameType::League => write!(f, "league"),
        }
    }
}

/// A single recorded match. Immutable once recorded; the match history is
/// an append-only sequence in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    /// Unique identifier
    pub id: MatchId,

    /// When the match was played
    pub date: DateTime<Utc>,

    /// First team (1 or 2 players)
    pub team1: Team,

    /// Second team (1 or 2 players)
    pub team2: Team,

    /// Goals scored by team 1
    pub team1_score: u32,

    /// Goals scored by team 2
    pub team2_score: u32,

    /// Game category
    #[serde(default)]
    pub game_type: GameType,

    /// Optional match duration in minutes
    pub duration_minutes: Option<u32>,

    /// Optional free-text note
    pub notes: Option<String>,
}

impl Match {
    /// Create a new Match with a content-derived ID (teams, date, scores).
    pub fn new(date: DateTime<Utc>, team1: Team, team2: Team, team1_score: u32, team2_score: u32) -> Self {
        let team1_ids: Vec<&str> = team1.players().iter().map(|p| p.as_str()).collect();
        let team2_ids: Vec<&str> = team2.players().iter().map(|p| p.as_str()).collect();
        let id = EntityId::generate(&[
            &team1_ids.join(","),
            &team2_ids.join(","),
            &date.to_rfc3339(),
            &team1_score.to_string(),
            &team2_score.to_string(),
        ]);

        Self {
            id,
            date,
            team1,
            team2,
            team1_score,
            team2_score,
            game_type: GameType::Casual,
            duration_minutes: None,
            notes: None,
        }
    }

    /// Builder method to set the game type.
    pub fn with_game_type(mut self, game_type: GameType) -> Self {
        self.game_type = game_type;
        self
    }

    /// Builder method to set the duration.
    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    /// Builder method to set a note.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// The winning side: `Some(1)`, `Some(2)`, or `None` for a tie.
    pub fn winner(&self) -> Option<u8> {
        if self.team1_score > self.team2_score {
            Some(1)
        } else if self.team2_score > self.team1_score {
            Some(2)
        } else {
            None
        }
    }

    /// Whether both sides fielded a single player.
    pub fn is_singles(&self) -> bool {
        self.team1.is_singles() && self.team2.is_singles()
    }

    /// Total goals scored across both teams.
    pub fn total_goals(&self) -> u32 {
        self.team1_score + self.team2_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerId;

    fn sample_date() -> DateTime<Utc> {
        "2025-08-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_match_creation() {
        let m = Match::new(sample_date(), Team::solo("p1"), Team::solo("p2"), 10, 7);
        assert_eq!(m.team1_score, 10);
        assert_eq!(m.team2_score, 7);
        assert_eq!(m.game_type, GameType::Casual);
        assert!(m.duration_minutes.is_none());
        assert!(m.notes.is_none());
        assert!(!m.id.as_str().is_empty());
    }

    #[test]
    fn test_match_id_deterministic() {
        let m1 = Match::new(sample_date(), Team::solo("p1"), Team::solo("p2"), 10, 7);
        let m2 = Match::new(sample_date(), Team::solo("p1"), Team::solo("p2"), 10, 7);
        assert_eq!(m1.id, m2.id);
    }

    #[test]
    fn test_match_id_differs_by_score() {
        let m1 = Match::new(sample_date(), Team::solo("p1"), Team::solo("p2"), 10, 7);
        let m2 = Match::new(sample_date(), Team::solo("p1"), Team::solo("p2"), 10, 8);
        assert_ne!(m1.id, m2.id);
    }

    #[test]
    fn test_winner_team1() {
        let m = Match::new(sample_date(), Team::solo("p1"), Team::solo("p2"), 3, 1);
        assert_eq!(m.winner(), Some(1));
    }

    #[test]
    fn test_winner_team2() {
        let m = Match::new(sample_date(), Team::solo("p1"), Team::solo("p2"), 1, 3);
        assert_eq!(m.winner(), Some(2));
    }

    #[test]
    fn test_winner_tie() {
        let m = Match::new(sample_date(), Team::solo("p1"), Team::solo("p2"), 2, 2);
        assert_eq!(m.winner(), None);

        let m = Match::new(sample_date(), Team::solo("p1"), Team::solo("p2"), 0, 0);
        assert_eq!(m.winner(), None);
    }

    #[test]
    fn test_is_singles() {
        let singles = Match::new(sample_date(), Team::solo("p1"), Team::solo("p2"), 5, 3);
        assert!(singles.is_singles());

        let doubles = Match::new(
            sample_date(),
            Team::pair("p1", "p2"),
            Team::pair("p3", "p4"),
            5,
            3,
        );
        assert!(!doubles.is_singles());

        // Mixed singles-vs-doubles is representable but not singles.
        let mixed = Match::new(sample_date(), Team::pair("p1", "p2"), Team::solo("p3"), 5, 3);
        assert!(!mixed.is_singles());
    }

    #[test]
    fn test_total_goals() {
        let m = Match::new(sample_date(), Team::solo("p1"), Team::solo("p2"), 5, 3);
        assert_eq!(m.total_goals(), 8);
    }

    #[test]
    fn test_match_builder() {
        let m = Match::new(sample_date(), Team::solo("p1"), Team::solo("p2"), 10, 9)
            .with_game_type(GameType::Tournament)
            .with_duration(15)
            .with_notes("Final");

        assert_eq!(m.game_type, GameType::Tournament);
        assert_eq!(m.duration_minutes, Some(15));
        assert_eq!(m.notes.as_deref(), Some("Final"));
    }

    #[test]
    fn test_match_serialization() {
        let m = Match::new(
            sample_date(),
            Team::pair("p1", "p2"),
            Team::pair("p3", "p4"),
            10,
            8,
        )
        .with_game_type(GameType::League);

        let json = serde_json::to_string(&m).unwrap();
        let deserialized: Match = serde_json::from_str(&json).unwrap();

        assert_eq!(m.id, deserialized.id);
        assert_eq!(deserialized.game_type, GameType::League);
        assert_eq!(deserialized.team1.players()[1], PlayerId::from("p2"));
    }

    #[test]
    fn test_game_type_serde_lowercase() {
        assert_eq!(serde_json::to_string(&GameType::Casual).unwrap(), r#""casual""#);
        assert_eq!(
            serde_json::to_string(&GameType::Tournament).unwrap(),
            r#""tournament""#
        );
        let parsed: GameType = serde_json::from_str(r#""league""#).unwrap();
        assert_eq!(parsed, GameType::League);
    }
}
