//! Core data models for the league tracker.

use thiserror::Error;

mod ids;
mod league;
mod match_record;
mod player;
mod stats;
mod team;
mod tournament;

pub use ids::*;
pub use league::*;
pub use match_record::*;
pub use player::*;
pub use stats::*;
pub use team::*;
pub use tournament::*;

/// Errors raised when constructing model values from untrusted input.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Invalid team size: {0} (must be 1 or 2 players)")]
    InvalidTeamSize(usize),
}
