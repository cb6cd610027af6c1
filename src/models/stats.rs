//! Derived statistics models.
//!
//! Nothing here is persisted; stats are recomputed from the full match
//! history on every query.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Per-player statistics derived from the match history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Player ID
    pub player_id: PlayerId,

    /// Display name
    pub player_name: String,

    /// Matches played
    pub matches_played: u32,

    /// Wins
    pub wins: u32,

    /// Losses
    pub losses: u32,

    /// Ties
    pub ties: u32,

    /// Goals scored by the player's team
    pub goals_for: u32,

    /// Goals conceded by the player's team
    pub goals_against: u32,

    /// Win rate as a percentage (0.0 to 100.0)
    pub win_rate: f64,

    /// Goals for minus goals against
    pub goal_difference: i64,

    /// Average goals scored per match
    pub avg_goals_per_match: f64,

    /// Average goals conceded per match
    pub avg_goals_against_per_match: f64,
}

impl PlayerStats {
    /// Create PlayerStats with derived fields calculated from the counts.
    pub fn new(
        player_id: PlayerId,
        player_name: String,
        matches_played: u32,
        wins: u32,
        losses: u32,
        ties: u32,
        goals_for: u32,
        goals_against: u32,
    ) -> Self {
        let win_rate = if matches_played > 0 {
            wins as f64 / matches_played as f64 * 100.0
        } else {
            0.0
        };
        let (avg_goals_per_match, avg_goals_against_per_match) = if matches_played > 0 {
            (
                goals_for as f64 / matches_played as f64,
                goals_against as f64 / matches_played as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            player_id,
            player_name,
            matches_played,
            wins,
            losses,
            ties,
            goals_for,
            goals_against,
            win_rate,
            goal_difference: goals_for as i64 - goals_against as i64,
            avg_goals_per_match,
            avg_goals_against_per_match,
        }
    }
}

/// Statistics for every player observed in the match history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueStats {
    /// When these stats were computed
    pub computed_at: DateTime<Utc>,

    /// Number of matches the stats were derived from
    pub total_matches: u32,

    /// Per-player statistics, in ascending player-id order
    pub players: Vec<PlayerStats>,
}

impl LeagueStats {
    /// Create new LeagueStats.
    pub fn new(total_matches: u32, players: Vec<PlayerStats>) -> Self {
        Self {
            computed_at: Utc::now(),
            total_matches,
            players,
        }
    }

    /// Get stats for a player by ID.
    pub fn get_player(&self, id: &PlayerId) -> Option<&PlayerStats> {
        self.players.iter().find(|p| &p.player_id == id)
    }

    /// Get players sorted by win rate (descending).
    pub fn sorted_by_win_rate(&self) -> Vec<&PlayerStats> {
        let mut sorted: Vec<_> = self.players.iter().collect();
        sorted.sort_by(|a, b| {
            b.win_rate
                .partial_cmp(&a.win_rate)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_stats_derived_fields() {
        let stats = PlayerStats::new(PlayerId::from("p1"), "Alice".to_string(), 10, 6, 3, 1, 55, 40);

        assert!((stats.win_rate - 60.0).abs() < 1e-9);
        assert_eq!(stats.goal_difference, 15);
        assert!((stats.avg_goals_per_match - 5.5).abs() < 1e-9);
        assert!((stats.avg_goals_against_per_match - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_player_stats_zero_matches() {
        let stats = PlayerStats::new(PlayerId::from("p1"), "Alice".to_string(), 0, 0, 0, 0, 0, 0);

        assert_eq!(stats.win_rate, 0.0);
        assert_eq!(stats.goal_difference, 0);
        assert_eq!(stats.avg_goals_per_match, 0.0);
    }

    #[test]
    fn test_negative_goal_difference() {
        let stats = PlayerStats::new(PlayerId::from("p1"), "Alice".to_string(), 5, 0, 5, 0, 10, 25);
        assert_eq!(stats.goal_difference, -15);
    }

    #[test]
    fn test_league_stats_get_player() {
        let stats = LeagueStats::new(
            3,
            vec![PlayerStats::new(
                PlayerId::from("p1"),
                "Alice".to_string(),
                3,
                2,
                1,
                0,
                20,
                15,
            )],
        );

        assert!(stats.get_player(&PlayerId::from("p1")).is_some());
        assert!(stats.get_player(&PlayerId::from("p2")).is_none());
    }

    #[test]
    fn test_league_stats_sorted_by_win_rate() {
        let stats = LeagueStats::new(
            10,
            vec![
                PlayerStats::new(PlayerId::from("low"), "Low".to_string(), 10, 3, 7, 0, 20, 40),
                PlayerStats::new(PlayerId::from("high"), "High".to_string(), 10, 8, 2, 0, 50, 20),
            ],
        );

        let sorted = stats.sorted_by_win_rate();
        assert_eq!(sorted[0].player_name, "High");
        assert_eq!(sorted[1].player_name, "Low");
    }

    #[test]
    fn test_league_stats_serialization() {
        let stats = LeagueStats::new(
            1,
            vec![PlayerStats::new(
                PlayerId::from("p1"),
                "Alice".to_string(),
                1,
                1,
                0,
                0,
                10,
                8,
            )],
        );

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: LeagueStats = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.total_matches, 1);
        assert_eq!(deserialized.players[0].wins, 1);
    }
}
