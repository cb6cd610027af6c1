//! Player strength ratings.
//!
//! Converts aggregated stats into a bounded strength score per player:
//! 70% win rate, 30% goal contribution, damped toward a neutral anchor
//! for players with few matches so small samples cannot produce extreme
//! ratings.

use std::collections::HashMap;

use crate::calculate;
use crate::models::{League, PlayerId, PlayerStats};

/// Matches needed before a player's record carries full weight.
pub const FULL_CONFIDENCE_MATCHES: f64 = 10.0;

/// Rating assigned to a record with no information.
pub const NEUTRAL_STRENGTH: f64 = 0.5;

/// Strength floor and ceiling.
pub const MIN_STRENGTH: f64 = 0.1;
pub const MAX_STRENGTH: f64 = 1.0;

/// Compute the strength rating for a single player's stats.
pub fn strength_from_stats(stats: &PlayerStats) -> f64 {
    let win_rate = stats.win_rate / 100.0;
    let matches_played = stats.matches_played;
    let goal_diff_per_match = stats.goal_difference as f64 / matches_played.max(1) as f64;

    let experience_weight = (matches_played as f64 / FULL_CONFIDENCE_MATCHES).min(1.0);

    // 70% win rate, 30% goal contribution centered at 0.5 with the bonus
    // capped at +0.3 (reached at a goal difference of +0.9 per match).
    let base_strength = win_rate * 0.7 + ((goal_diff_per_match / 3.0).min(0.3) + 0.5) * 0.3;
    let strength =
        base_strength * experience_weight + NEUTRAL_STRENGTH * (1.0 - experience_weight);

    strength.clamp(MIN_STRENGTH, MAX_STRENGTH)
}

/// Compute strength ratings for every player observed in the history.
///
/// Players with no recorded matches have no entry and are therefore
/// excluded from match-making.
pub fn player_strengths(league: &League) -> HashMap<PlayerId, f64> {
    let stats = calculate::player_stats(league);

    stats
        .players
        .into_iter()
        .map(|p| {
            let strength = strength_from_stats(&p);
            (p.player_id, strength)
        })
        .collect()
}
