//! League data container: the immutable per-invocation snapshot.

use serde::{Deserialize, Serialize};

use super::{GameType, Match, MatchId, Player, PlayerId, Tournament};

/// One row per participating player per match.
///
/// This is the expansion every derived statistic is computed from: which
/// side the player was on, their goals for/against, the outcome flags,
/// and who they played with and against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerMatchRecord {
    pub player_id: PlayerId,
    pub match_id: MatchId,
    /// Which side the player was on (1 or 2)
    pub team: u8,
    /// Teammate, if this was a two-player team
    pub teammate: Option<PlayerId>,
    /// Opposing players (1 or 2)
    pub opponents: Vec<PlayerId>,
    pub goals_for: u32,
    pub goals_against: u32,
    pub won: bool,
    pub lost: bool,
    pub tied: bool,
    pub game_type: GameType,
}

/// All league data: roster, match history, tournaments.
///
/// The match history is an append-only ordered sequence; everything derived
/// (stats, strengths, pairing history) is recomputed fresh from the full
/// snapshot on each call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct League {
    #[serde(default)]
    pub players: Vec<Player>,

    #[serde(default)]
    pub matches: Vec<Match>,

    #[serde(default)]
    pub tournaments: Vec<Tournament>,
}

impl League {
    /// Create a League from a roster and match history.
    pub fn new(players: Vec<Player>, matches: Vec<Match>) -> Self {
        Self {
            players,
            matches,
            tournaments: Vec::new(),
        }
    }

    /// Look up a player's display name, falling back to the raw ID.
    ///
    /// The returned slice borrows from either the roster or `id`, so both
    /// share the output lifetime.
    pub fn player_name<'a>(&'a self, id: &'a PlayerId) -> &'a str {
        self.players
            .iter()
            .find(|p| &p.id == id)
            .map(|p| p.name.as_str())
            .unwrap_or_else(|| id.as_str())
    }

    /// Expand the match history into one record per player per match.
    pub fn player_match_records(&self) -> Vec<PlayerMatchRecord> {
        let mut records = Vec::new();

        for m in &self.matches {
            let winner = m.winner();

            for player_id in m.team1.players() {
                records.push(PlayerMatchRecord {
                    player_id: player_id.clone(),
                    match_id: m.id.clone(),
                    team: 1,
                    teammate: m.team1.teammate_of(player_id).cloned(),
                    opponents: m.team2.players().to_vec(),
                    goals_for: m.team1_score,
                    goals_against: m.team2_score,
                    won: winner == Some(1),
                    lost: winner == Some(2),
                    tied: winner.is_none(),
                    game_type: m.game_type,
                });
            }

            for player_id in m.team2.players() {
                records.push(PlayerMatchRecord {
                    player_id: player_id.clone(),
                    match_id: m.id.clone(),
                    team: 2,
                    teammate: m.team2.teammate_of(player_id).cloned(),
                    opponents: m.team1.players().to_vec(),
                    goals_for: m.team2_score,
                    goals_against: m.team1_score,
                    won: winner == Some(2),
                    lost: winner == Some(1),
                    tied: winner.is_none(),
                    game_type: m.game_type,
                });
            }
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Team;
    use chrono::{DateTime, Utc};

    fn sample_date() -> DateTime<Utc> {
        "2025-08-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_empty_league() {
        let league = League::default();
        assert!(league.players.is_empty());
        assert!(league.matches.is_empty());
        assert!(league.player_match_records().is_empty());
    }

    #[test]
    fn test_player_name_lookup() {
        let league = League::new(vec![Player::new("p1", "Alice")], vec![]);
        assert_eq!(league.player_name(&PlayerId::from("p1")), "Alice");
        // Unknown IDs fall back to the raw ID.
        assert_eq!(league.player_name(&PlayerId::from("p9")), "p9");
    }

    #[test]
    fn test_player_match_records_mixed_teams() {
        // Doubles team1 vs singles team2: 3 records total.
        let m = Match::new(sample_date(), Team::pair("p1", "p2"), Team::solo("p3"), 4, 2);
        let league = League::new(vec![], vec![m.clone()]);

        let records = league.player_match_records();
        assert_eq!(records.len(), 3);

        let team1_records: Vec<_> = records.iter().filter(|r| r.team == 1).collect();
        assert_eq!(team1_records.len(), 2);
        for r in &team1_records {
            assert_eq!(r.match_id, m.id);
            assert_eq!(r.goals_for, 4);
            assert_eq!(r.goals_against, 2);
            assert!(r.won);
            assert!(!r.lost);
            assert!(!r.tied);
            assert_eq!(r.opponents, vec![PlayerId::from("p3")]);
        }
        assert_eq!(team1_records[0].teammate, Some(PlayerId::from("p2")));
        assert_eq!(team1_records[1].teammate, Some(PlayerId::from("p1")));

        let team2_record = records.iter().find(|r| r.team == 2).unwrap();
        assert_eq!(team2_record.player_id, PlayerId::from("p3"));
        assert_eq!(team2_record.teammate, None);
        assert_eq!(team2_record.goals_for, 2);
        assert_eq!(team2_record.goals_against, 4);
        assert!(!team2_record.won);
        assert!(team2_record.lost);
    }

    #[test]
    fn test_player_match_records_tie() {
        let m = Match::new(sample_date(), Team::solo("p1"), Team::solo("p2"), 5, 5);
        let league = League::new(vec![], vec![m]);

        let records = league.player_match_records();
        assert_eq!(records.len(), 2);
        for r in &records {
            assert!(r.tied);
            assert!(!r.won);
            assert!(!r.lost);
        }
    }

    #[test]
    fn test_league_serialization() {
        let league = League::new(
            vec![Player::new("p1", "Alice"), Player::new("p2", "Bob")],
            vec![Match::new(
                sample_date(),
                Team::solo("p1"),
                Team::solo("p2"),
                3,
                1,
            )],
        );

        let json = serde_json::to_string(&league).unwrap();
        let deserialized: League = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.players.len(), 2);
        assert_eq!(deserialized.matches.len(), 1);
        assert_eq!(deserialized.matches[0].team1_score, 3);
    }
}
