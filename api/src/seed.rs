//! Bootstrap file format read by the `seed` tool.
//!
//! ```toml
//! [[clubs]]
//! name = "Liverpool"
//! location = "Liverpool"
//! stats = { wins = 14, losses = 6, goals = 42, shots = 190, shots_on_target = 85 }
//!
//! [[players]]
//! name = "Mohamed Salah"
//! club = "Liverpool"
//! position = "FW"
//! stats = { goals = 18, assists = 9, shots = 70, shots_on_target = 40 }
//! ```

use serde::{Deserialize, Serialize};

use crate::records::{ClubStatsRecord, PlayerStatsRecord};
use crate::Position;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub clubs: Vec<SeedClub>,
    #[serde(default)]
    pub players: Vec<SeedPlayer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedClub {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub stats: ClubStatsRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPlayer {
    pub name: String,
    /// Name of the club, which must be present in the same file or the store.
    pub club: String,
    pub position: Position,
    #[serde(default)]
    pub stats: PlayerStatsRecord,
}
