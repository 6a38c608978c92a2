use serde::{Deserialize, Serialize};

use crate::Position;

/// Every counter kept for a player. Missing fields deserialize as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStatsRecord {
    // General
    pub goals: i32,
    pub assists: i32,
    pub appearances: i32,
    pub minutes_played: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub substitution_on: i32,
    pub substitution_off: i32,

    // Attack
    pub shots: i32,
    pub shots_on_target: i32,
    pub goals_from_header: i32,
    pub goals_from_penalty: i32,
    pub goals_from_freekick: i32,
    pub offsides: i32,
    pub passes: i32,
    pub crosses: i32,
    pub corners_taken: i32,

    // Defence
    pub interceptions: i32,
    pub blocks: i32,
    pub tackles: i32,
    pub clearances: i32,
    pub own_goals: i32,
    pub penalties_conceded: i32,
    pub aerial_battles_won: i32,
    pub aerial_battles_lost: i32,

    // Goalkeeping
    pub clean_sheets: i32,
    pub goals_conceded: i32,
    pub saves: i32,
    pub penalties_saved: i32,
    pub high_claims: i32,
    pub sweeper_clearances: i32,
    pub goal_kicks: i32,
}

/// Every counter kept for a club. Missing fields deserialize as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClubStatsRecord {
    // General
    pub wins: i32,
    pub losses: i32,
    pub goals: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,

    // Attack
    pub shots: i32,
    pub shots_on_target: i32,
    pub goals_from_header: i32,
    pub goals_from_penalty: i32,
    pub goals_from_freekick: i32,
    pub goals_from_inside_box: i32,
    pub goals_from_outside_box: i32,
    pub offsides: i32,

    // Defence
    pub clean_sheets: i32,
    pub goals_conceded: i32,
    pub saves: i32,
    pub blocks: i32,
    pub interceptions: i32,
    pub tackles: i32,
    pub clearances: i32,
    pub own_goals: i32,
    pub penalties_conceded: i32,
    pub fouls: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClub {
    pub name: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub club_id: i64,
    pub position: Position,
}

/// Partial update of a club; absent fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubChanges {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Partial update of a player; absent fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerChanges {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub club_id: Option<i64>,
    #[serde(default)]
    pub position: Option<Position>,
}
