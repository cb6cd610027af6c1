//! Team model: one or two players on a side.

use serde::{Deserialize, Serialize};

use super::{ModelError, PlayerId};

/// A team of 1 (singles) or 2 (doubles) players.
///
/// Team size is validated at construction and again when deserializing,
/// so a malformed record is rejected at the ingestion boundary and never
/// reaches the stats or match-making code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PlayerId>", into = "Vec<PlayerId>")]
pub struct Team {
    players: Vec<PlayerId>,
}

impl Team {
    /// Create a new Team, rejecting sizes outside 1..=2.
    pub fn new(players: Vec<PlayerId>) -> Result<Self, ModelError> {
        if players.is_empty() || players.len() > 2 {
            return Err(ModelError::InvalidTeamSize(players.len()));
        }
        Ok(Self { players })
    }

    /// Convenience constructor for a singles team.
    pub fn solo(player: impl Into<PlayerId>) -> Self {
        Self {
            players: vec![player.into()],
        }
    }

    /// Convenience constructor for a doubles team.
    pub fn pair(p1: impl Into<PlayerId>, p2: impl Into<PlayerId>) -> Self {
        Self {
            players: vec![p1.into(), p2.into()],
        }
    }

    /// The players on this team.
    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    /// Whether this is a one-player team.
    pub fn is_singles(&self) -> bool {
        self.players.len() == 1
    }

    /// Whether the given player is on this team.
    pub fn contains(&self, player: &PlayerId) -> bool {
        self.players.contains(player)
    }

    /// The teammate of the given player, if this is a doubles team.
    pub fn teammate_of(&self, player: &PlayerId) -> Option<&PlayerId> {
        if self.players.len() != 2 {
            return None;
        }
        self.players.iter().find(|p| *p != player)
    }
}

impl TryFrom<Vec<PlayerId>> for Team {
    type Error = ModelError;

    fn try_from(players: Vec<PlayerId>) -> Result<Self, Self::Error> {
        Team::new(players)
    }
}

impl From<Team> for Vec<PlayerId> {
    fn from(team: Team) -> Self {
        team.players
    }
}
