use std::sync::Arc;

use stattrackr_api::Position;

use crate::metrics;
use crate::stats::{ClubStats, PlayerStats};

/// A club as read from the store, together with its stats.
#[derive(Debug, Clone, PartialEq)]
pub struct Club {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
    pub stats: ClubStats,
}

impl Club {
    pub fn win_percentage(&self) -> f64 {
        let r = self.stats.record();
        metrics::win_percentage(r.wins, r.losses)
    }

    pub fn goals_per_game(&self) -> f64 {
        let r = self.stats.record();
        metrics::goals_per_game(r.goals, r.wins, r.losses)
    }
}

/// A player as read from the store. The club is shared between all of its
/// players in one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub club: Arc<Club>,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
    pub stats: PlayerStats,
}

impl Player {
    pub fn position(&self) -> Position {
        self.stats.position()
    }

    pub fn goal_contributions(&self) -> i64 {
        let r = self.stats.record();
        metrics::goal_contributions(r.goals, r.assists)
    }

    pub fn shots_accuracy(&self) -> f64 {
        let r = self.stats.record();
        metrics::shot_accuracy(r.shots, r.shots_on_target)
    }
}
