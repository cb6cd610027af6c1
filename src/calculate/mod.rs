//! Statistics calculation engine.
//!
//! Computes derived metrics from the match history:
//! - Per-player aggregates (wins, losses, ties, goals, win rate)
//! - Head-to-head records between two players
//!
//! Everything here is a pure function of the league snapshot; results are
//! recomputed fresh on every call.

use std::collections::BTreeMap;

use crate::models::{League, LeagueStats, PlayerId, PlayerStats};

#[derive(Debug, Default)]
struct Tally {
    matches_played: u32,
    wins: u32,
    losses: u32,
    ties: u32,
    goals_for: u32,
    goals_against: u32,
}

/// Compute per-player statistics from the full match history.
///
/// Each match is expanded into one record per participating player, then
/// grouped by player ID. Only players observed in at least one match
/// appear in the result; output is in ascending player-id order so
/// repeated runs are identical.
pub fn player_stats(league: &League) -> LeagueStats {
    // BTreeMap keeps the per-player output deterministic.
    let mut tallies: BTreeMap<PlayerId, Tally> = BTreeMap::new();

    for record in league.player_match_records() {
        let tally = tallies.entry(record.player_id).or_default();
        tally.matches_played += 1;
        tally.wins += record.won as u32;
        tally.losses += record.lost as u32;
        tally.ties += record.tied as u32;
        tally.goals_for += record.goals_for;
        tally.goals_against += record.goals_against;
    }

    let players = tallies
        .into_iter()
        .map(|(player_id, t)| {
            let name = league.player_name(&player_id).to_string();
            PlayerStats::new(
                player_id,
                name,
                t.matches_played,
                t.wins,
                t.losses,
                t.ties,
                t.goals_for,
                t.goals_against,
            )
        })
        .collect();

    LeagueStats::new(league.matches.len() as u32, players)
}

/// Head-to-head record between two players.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadToHead {
    pub p1_wins: u32,
    pub p2_wins: u32,
    pub ties: u32,
    pub total_matches: u32,
}

/// Compute the head-to-head record between two players.
///
/// Only matches where the two players were on opposite sides count;
/// doubles matches where they were teammates are skipped.
pub fn head_to_head(league: &League, player1: &PlayerId, player2: &PlayerId) -> HeadToHead {
    let mut result = HeadToHead::default();

    for m in &league.matches {
        let p1_team = if m.team1.contains(player1) {
            Some(1u8)
        } else if m.team2.contains(player1) {
            Some(2)
        } else {
            None
        };
        let p2_team = if m.team1.contains(player2) {
            Some(1u8)
        } else if m.team2.contains(player2) {
            Some(2)
        } else {
            None
        };

        let (Some(t1), Some(t2)) = (p1_team, p2_team) else {
            continue;
        };
        if t1 == t2 {
            continue;
        }

        match m.winner() {
            Some(w) if w == t1 => result.p1_wins += 1,
            Some(_) => result.p2_wins += 1,
            None => result.ties += 1,
        }
    }

    result.total_matches = result.p1_wins + result.p2_wins + result.ties;
    result
}
