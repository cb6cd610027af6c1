//! Filesystem data layer.
//!
//! JSONL files under a data directory are the source of truth:
//! - `players.jsonl`: roster
//! - `matches.jsonl`: append-only match history
//! - `tournaments.jsonl`: tournament records
//!
//! This is the ingestion boundary: malformed records (bad team sizes,
//! unparseable lines) are rejected or skipped here and never reach the
//! stats or match-making code.

mod jsonl;

pub use jsonl::{JsonlReader, JsonlWriter};

use std::path::PathBuf;
use thiserror::Error;

use crate::models::{League, Match, Player, Tournament};

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn players_path(&self) -> PathBuf {
        self.data_dir.join("players.jsonl")
    }

    pub fn matches_path(&self) -> PathBuf {
        self.data_dir.join("matches.jsonl")
    }

    pub fn tournaments_path(&self) -> PathBuf {
        self.data_dir.join("tournaments.jsonl")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

/// Read the full league snapshot from disk.
///
/// Missing files read as empty collections, so a fresh data directory is
/// a valid (empty) league.
pub fn read_league(config: &StorageConfig) -> Result<League, StorageError> {
    let players: Vec<Player> = JsonlReader::new(config.players_path()).read_all()?;
    let matches: Vec<Match> = JsonlReader::new(config.matches_path()).read_all()?;
    let tournaments: Vec<Tournament> = JsonlReader::new(config.tournaments_path()).read_all()?;

    let mut league = League::new(players, matches);
    league.tournaments = tournaments;
    Ok(league)
}

/// Append a player to the roster file.
pub fn append_player(config: &StorageConfig, player: &Player) -> Result<(), StorageError> {
    JsonlWriter::new(config.players_path()).append(player)
}

/// Append a match to the history file.
pub fn append_match(config: &StorageConfig, m: &Match) -> Result<(), StorageError> {
    JsonlWriter::new(config.matches_path()).append(m)
}
