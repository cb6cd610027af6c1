//! # Foostrack
//!
//! A local table football league tracker with balanced match-making.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, teams, matches, stats)
//! - **calculate**: Per-player statistics and head-to-head records
//! - **matchmaking**: Strength ratings, pairing history, suggestion engine
//! - **storage**: JSONL data files (roster, match history, tournaments)
//! - **config**: Configuration loading and validation
//!
//! The stats and match-making layers are pure functions over an immutable
//! [`models::League`] snapshot; all I/O lives in `storage` and the CLI.

pub mod calculate;
pub mod config;
pub mod matchmaking;
pub mod models;
pub mod storage;

pub use models::*;
