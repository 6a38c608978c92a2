//! Stat records that are known to satisfy every consistency rule.
//!
//! `PlayerStats` carries the owner's position next to the counters, so a
//! value of this type never holds goalkeeping counters for an outfield
//! player. The fields are private: the only ways in are the checked
//! constructors and the all-zero starting point.

use stattrackr_api::records::{ClubStatsRecord, PlayerStatsRecord};
use stattrackr_api::Position;

use crate::fields::{ClubField, PlayerField, StatField};
use crate::validation::{self, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStats {
    position: Position,
    record: PlayerStatsRecord,
}

impl PlayerStats {
    pub fn new(position: Position, record: PlayerStatsRecord) -> Result<Self, ValidationError> {
        validation::validate_player_stats(&record, Some(position))?;
        Ok(Self { position, record })
    }

    pub fn zeroed(position: Position) -> Self {
        Self {
            position,
            record: PlayerStatsRecord::default(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn record(&self) -> &PlayerStatsRecord {
        &self.record
    }

    pub fn into_record(self) -> PlayerStatsRecord {
        self.record
    }

    pub fn get(&self, field: PlayerField) -> i32 {
        field.get(&self.record)
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.position == Position::Goalkeeper
    }

    /// Same counters under a different position, if they stay valid there.
    pub fn with_position(self, position: Position) -> Result<Self, ValidationError> {
        Self::new(position, self.record)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClubStats {
    record: ClubStatsRecord,
}

impl ClubStats {
    pub fn new(record: ClubStatsRecord) -> Result<Self, ValidationError> {
        validation::validate_club_stats(&record)?;
        Ok(Self { record })
    }

    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &ClubStatsRecord {
        &self.record
    }

    pub fn into_record(self) -> ClubStatsRecord {
        self.record
    }

    pub fn get(&self, field: ClubField) -> i32 {
        field.get(&self.record)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_player_stats_constructors() {
        let zero = PlayerStats::zeroed(Position::Midfielder);
        assert_eq!(zero.record(), &PlayerStatsRecord::default());
        assert!(!zero.is_goalkeeper());

        let keeper = PlayerStats::new(
            Position::Goalkeeper,
            PlayerStatsRecord {
                clean_sheets: 8,
                saves: 60,
                ..Default::default()
            },
        )
        .expect("Goalkeeper stats must be accepted for a goalkeeper");
        assert_eq!(keeper.get(PlayerField::Saves), 60);

        assert_eq!(
            keeper.clone().with_position(Position::Defender),
            Err(ValidationError::GoalkeeperStatOnNonGoalkeeper {
                field: "clean_sheets"
            })
        );
        let outfield = PlayerStats::zeroed(Position::Goalkeeper)
            .with_position(Position::Forward)
            .expect("Zeroed stats are valid for any position");
        assert_eq!(outfield.position(), Position::Forward);
    }

    #[test]
    fn test_club_stats_rejects_invalid() {
        let bad = ClubStatsRecord {
            goals: 5,
            shots: 10,
            shots_on_target: 4,
            ..Default::default()
        };
        assert_eq!(
            ClubStats::new(bad),
            Err(ValidationError::GoalsExceedShotsOnTarget)
        );
        assert_eq!(ClubStats::zeroed().get(ClubField::Wins), 0);
    }
}
