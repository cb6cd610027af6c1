//! Match suggestion enumeration and ranking.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{pairing_history, player_strengths, score_match_quality};
use crate::models::{League, PlayerId};

/// The requested match format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Singles,
    Doubles,
}

impl MatchType {
    /// Minimum number of available players needed for this format.
    pub fn required_players(&self) -> usize {
        match self {
            MatchType::Singles => 2,
            MatchType::Doubles => 4,
        }
    }

    /// Parse from a string ("singles" or "doubles").
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "singles" => Some(MatchType::Singles),
            "doubles" => Some(MatchType::Doubles),
            _ => None,
        }
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::Singles => write!(f, "singles"),
            MatchType::Doubles => write!(f, "doubles"),
        }
    }
}

/// A suggested match with its quality score. Produced fresh per request,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSuggestion {
    pub team1: Vec<PlayerId>,
    pub team2: Vec<PlayerId>,
    pub score: f64,
    pub reasoning: String,
}

/// Generate ranked match suggestions for the available players.
///
/// Derives strengths and pairing history from the league once, scores
/// every candidate pairing, and returns the top `num_suggestions` by
/// score (stable on ties). Fewer available players than the format
/// requires yields an empty list, not an error. An empty match history
/// degrades every candidate to a zero score rather than failing.
///
/// Doubles enumeration is combinatorial (3 × C(n,4) candidates); callers
/// with large pools may want to cap the pool size or keep this off the
/// interactive path.
pub fn generate_suggestions(
    league: &League,
    available_players: &[PlayerId],
    match_type: MatchType,
    num_suggestions: usize,
) -> Vec<MatchSuggestion> {
    if available_players.len() < match_type.required_players() {
        return Vec::new();
    }

    let strengths = player_strengths(league);
    let history = pairing_history(league);
    let max_pairings = history.max_pairing_count();

    let mut suggestions = match match_type {
        MatchType::Singles => available_players
            .iter()
            .enumerate()
            .flat_map(|(i, p1)| {
                available_players[i + 1..].iter().map(move |p2| (p1, p2))
            })
            .map(|(p1, p2)| {
                let team1 = vec![p1.clone()];
                let team2 = vec![p2.clone()];
                let (score, reasoning) =
                    score_match_quality(&team1, &team2, &strengths, &history, max_pairings);
                MatchSuggestion {
                    team1,
                    team2,
                    score,
                    reasoning,
                }
            })
            .collect(),
        MatchType::Doubles => {
            enumerate_doubles(available_players, |team1, team2| {
                let (score, reasoning) =
                    score_match_quality(&team1, &team2, &strengths, &history, max_pairings);
                MatchSuggestion {
                    team1,
                    team2,
                    score,
                    reasoning,
                }
            })
        }
    };

    // Stable sort: tied scores keep enumeration order.
    suggestions.sort_by(|a: &MatchSuggestion, b: &MatchSuggestion| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    suggestions.truncate(num_suggestions);
    suggestions
}

/// Enumerate every distinct doubles split of the available players.
///
/// A (team1, team2) arrangement and its mirror describe the same match,
/// so candidates are deduplicated by a normalized signature: sort each
/// team, then sort the pair of teams. For any 4 chosen players this
/// yields exactly 3 distinct splits.
fn enumerate_doubles<F>(available_players: &[PlayerId], mut build: F) -> Vec<MatchSuggestion>
where
    F: FnMut(Vec<PlayerId>, Vec<PlayerId>) -> MatchSuggestion,
{
    let mut suggestions = Vec::new();
    let mut seen: HashSet<(Vec<PlayerId>, Vec<PlayerId>)> = HashSet::new();

    let n = available_players.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let team1 = [&available_players[i], &available_players[j]];
            let remaining: Vec<&PlayerId> = available_players
                .iter()
                .filter(|p| *p != team1[0] && *p != team1[1])
                .collect();

            for a in 0..remaining.len() {
                for b in (a + 1)..remaining.len() {
                    let team2 = [remaining[a], remaining[b]];

                    let mut sig1 = vec![team1[0].clone(), team1[1].clone()];
                    sig1.sort();
                    let mut sig2 = vec![team2[0].clone(), team2[1].clone()];
                    sig2.sort();
                    let signature = if sig1 <= sig2 {
                        (sig1, sig2)
                    } else {
                        (sig2, sig1)
                    };

                    if seen.insert(signature) {
                        suggestions.push(build(
                            vec![team1[0].clone(), team1[1].clone()],
                            vec![team2[0].clone(), team2[1].clone()],
                        ));
                    }
                }
            }
        }
    }

    suggestions
}
