//! Balanced match-making engine.
//!
//! Derives a strength rating per player from the match history, tracks
//! how often players have been paired, and enumerates/ranks candidate
//! pairings among a set of available players:
//!
//! - **strength**: bounded [0.1, 1.0] rating blending win rate and goal
//!   contribution, damped by experience
//! - **pairing**: symmetric teammate/opponent co-occurrence counts
//! - **scorer**: 70% team balance + 30% pairing variety per candidate
//! - **suggest**: candidate enumeration, dedup, ranking
//!
//! The whole engine is pure and synchronous: immutable snapshot in,
//! ranked suggestions out, full recomputation per call.

mod pairing;
mod scorer;
mod strength;
mod suggest;

pub use pairing::{pairing_history, PairKey, PairingHistory};
pub use scorer::score_match_quality;
pub use strength::{
    player_strengths, strength_from_stats, FULL_CONFIDENCE_MATCHES, MAX_STRENGTH, MIN_STRENGTH,
    NEUTRAL_STRENGTH,
};
pub use suggest::{generate_suggestions, MatchSuggestion, MatchType};
