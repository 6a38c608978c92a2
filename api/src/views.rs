use serde::{Deserialize, Serialize};

use crate::records::{ClubStatsRecord, PlayerStatsRecord};
use crate::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubView {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub stats: ClubStatsRecord,
    pub win_percentage: f64,
    pub goals_per_game: f64,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: i64,
    pub name: String,
    pub club: ClubView,
    pub position: Position,
    pub stats: PlayerStatsRecord,
    pub goal_contributions: i64,
    pub shots_accuracy: f64,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatsView {
    pub player: i64,
    #[serde(flatten)]
    pub stats: PlayerStatsRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubStatsView {
    pub club: i64,
    #[serde(flatten)]
    pub stats: ClubStatsRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerLeaders {
    pub top_scorers: Vec<PlayerView>,
    pub top_assisters: Vec<PlayerView>,
    pub top_passers: Vec<PlayerView>,
    pub top_shooters: Vec<PlayerView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubLeaders {
    pub top_scoring_clubs: Vec<ClubView>,
    pub top_winning_clubs: Vec<ClubView>,
    pub most_tackles_clubs: Vec<ClubView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub player_stats: PlayerLeaders,
    pub club_stats: ClubLeaders,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub players: Vec<PlayerView>,
    pub clubs: Vec<ClubView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
