//! Match quality scoring.
//!
//! Combines a team-balance sub-score with a pairing-variety sub-score
//! into a single quality score for a candidate pairing. Pure function of
//! its inputs; missing data degrades the score instead of failing.

use std::collections::HashMap;

use super::PairingHistory;
use crate::models::PlayerId;

/// Weight of the balance sub-score in the final score.
const BALANCE_WEIGHT: f64 = 0.7;

/// Weight of the variety sub-score in the final score.
const VARIETY_WEIGHT: f64 = 0.3;

/// Variety score floor for heavily repeated pairings.
const VARIETY_FLOOR: f64 = 0.1;

/// Score the quality of a candidate match.
///
/// Returns the combined score and a human-readable rationale. If any
/// player lacks a strength entry (no match history), returns 0.0 with a
/// "Missing player strength data" rationale rather than an error.
pub fn score_match_quality(
    team1: &[PlayerId],
    team2: &[PlayerId],
    strengths: &HashMap<PlayerId, f64>,
    pairing_history: &PairingHistory,
    max_pairings: u32,
) -> (f64, String) {
    if !team1
        .iter()
        .chain(team2.iter())
        .all(|p| strengths.contains_key(p))
    {
        return (0.0, "Missing player strength data".to_string());
    }

    let team1_strength: f64 = team1.iter().map(|p| strengths[p]).sum();
    let team2_strength: f64 = team2.iter().map(|p| strengths[p]).sum();

    // Balance: closer team strengths score toward 1.0. The max(.., 1.0)
    // guards the degenerate near-zero total strength case.
    let max_strength = team1_strength.max(team2_strength);
    let balance_score = 1.0 - (team1_strength - team2_strength).abs() / max_strength.max(1.0);

    let variety_score = variety_score(team1, team2, pairing_history, max_pairings);

    let final_score = balance_score * BALANCE_WEIGHT + variety_score * VARIETY_WEIGHT;
    let reasoning = format!(
        "Team balance: {:.2}, Variety: {:.2}",
        balance_score, variety_score
    );

    (final_score, reasoning)
}

/// Variety: fewer historical pairings score higher.
///
/// Sums the teammate count inside each two-player team and every
/// cross-team opponent count, then normalizes against the worst case of
/// a doubles match (4 pairing contributions at the historical maximum).
fn variety_score(
    team1: &[PlayerId],
    team2: &[PlayerId],
    pairing_history: &PairingHistory,
    max_pairings: u32,
) -> f64 {
    let mut total_pairings = 0u32;

    for team in [team1, team2] {
        if let [p1, p2] = team {
            total_pairings += pairing_history.teammate_count(p1, p2);
        }
    }

    for p1 in team1 {
        for p2 in team2 {
            total_pairings += pairing_history.opponent_count(p1, p2);
        }
    }

    if max_pairings > 0 {
        (1.0 - total_pairings as f64 / (max_pairings as f64 * 4.0)).max(VARIETY_FLOOR)
    } else {
        1.0
    }
}
