use derive_more::Display;
use stattrackr_api::records::{ClubStatsRecord, PlayerStatsRecord};
use stattrackr_api::Position;

use crate::fields::{ClubField, PlayerField, StatField};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[display(fmt = "Counter {field} must not be negative")]
    NegativeCounter { field: &'static str },

    #[display(fmt = "Shots on target cannot exceed total shots")]
    ShotsExceedTotal,

    #[display(fmt = "Goals cannot exceed shots on target")]
    GoalsExceedShotsOnTarget,

    #[display(fmt = "Sum of goal types cannot exceed total goals")]
    GoalTypeSumExceedsGoals,

    #[display(fmt = "Goalkeeper stat {field} can only be set for players with GK position")]
    GoalkeeperStatOnNonGoalkeeper { field: &'static str },
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, Copy)]
pub enum StatRecord<'a> {
    Player(&'a PlayerStatsRecord),
    Club(&'a ClubStatsRecord),
}

/// Checks the consistency rules of a stat record and reports the first one
/// that is broken. The goalkeeper rule only applies to players whose
/// position is known.
pub fn validate(record: StatRecord<'_>, position: Option<Position>) -> Result<(), ValidationError> {
    match record {
        StatRecord::Player(r) => validate_player_stats(r, position),
        StatRecord::Club(r) => validate_club_stats(r),
    }
}

pub fn validate_player_stats(
    record: &PlayerStatsRecord,
    position: Option<Position>,
) -> Result<(), ValidationError> {
    check_non_negative::<PlayerField>(record)?;
    check_shot_chain(record.shots, record.shots_on_target, record.goals)?;
    check_goal_types(&PlayerField::GOAL_TYPES, record, record.goals)?;
    match position {
        Some(Position::Goalkeeper) | None => {}
        Some(_) => {
            if let Some(field) = PlayerField::GOALKEEPING_ONLY
                .iter()
                .find(|f| f.get(record) != 0)
            {
                return Err(ValidationError::GoalkeeperStatOnNonGoalkeeper {
                    field: field.name(),
                });
            }
        }
    }
    Ok(())
}

pub fn validate_club_stats(record: &ClubStatsRecord) -> Result<(), ValidationError> {
    check_non_negative::<ClubField>(record)?;
    check_shot_chain(record.shots, record.shots_on_target, record.goals)?;
    check_goal_types(&ClubField::GOAL_TYPES, record, record.goals)
}

fn check_non_negative<F: StatField>(record: &F::Record) -> Result<(), ValidationError> {
    match F::all().iter().find(|f| f.get(record) < 0) {
        Some(field) => Err(ValidationError::NegativeCounter {
            field: field.name(),
        }),
        None => Ok(()),
    }
}

fn check_shot_chain(shots: i32, shots_on_target: i32, goals: i32) -> Result<(), ValidationError> {
    if shots_on_target > shots {
        return Err(ValidationError::ShotsExceedTotal);
    }
    if goals > shots_on_target {
        return Err(ValidationError::GoalsExceedShotsOnTarget);
    }
    Ok(())
}

fn check_goal_types<F: StatField>(
    types: &[F],
    record: &F::Record,
    goals: i32,
) -> Result<(), ValidationError> {
    // Summed in i64: each term fits in i32 but the sum may not.
    let sum: i64 = types.iter().map(|f| f.get(record) as i64).sum();
    if sum > goals as i64 {
        return Err(ValidationError::GoalTypeSumExceedsGoals);
    }
    Ok(())
}

pub fn validate_club_name(name: &str) -> Result<(), String> {
    validate_name("club", name, 100)
}

pub fn validate_player_name(name: &str) -> Result<(), String> {
    validate_name("player", name, 100)
}

pub fn validate_location(location: &str) -> Result<(), String> {
    validate_name("location", location, 100)
}

fn validate_name(what: &str, name: &str, max: usize) -> Result<(), String> {
    let len = name.trim().chars().count();
    if !(1..=max).contains(&len) {
        return Err(format!(
            "Failed {what} length check: 1 <= length={len} <= {max}"
        ));
    }
    if let Some(c) = name.chars().find(|c| c.is_control()) {
        return Err(format!(
            "Disallowed characters found in {what}: code={:x}",
            c as u32
        ));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn forward_stats() -> PlayerStatsRecord {
        PlayerStatsRecord {
            goals: 15,
            assists: 8,
            appearances: 20,
            shots: 65,
            shots_on_target: 35,
            passes: 500,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_records_pass() {
        assert_eq!(
            validate(StatRecord::Player(&forward_stats()), Some(Position::Forward)),
            Ok(())
        );
        assert_eq!(
            validate(StatRecord::Player(&PlayerStatsRecord::default()), None),
            Ok(())
        );
        let club = ClubStatsRecord {
            wins: 15,
            losses: 5,
            goals: 45,
            tackles: 320,
            shots: 200,
            shots_on_target: 95,
            ..Default::default()
        };
        assert_eq!(validate(StatRecord::Club(&club), None), Ok(()));
    }

    #[test]
    fn test_shots_on_target_exceed_shots() {
        let mut stats = forward_stats();
        stats.shots_on_target = stats.shots + 1;
        assert_eq!(
            validate_player_stats(&stats, Some(Position::Forward)),
            Err(ValidationError::ShotsExceedTotal)
        );
        let club = ClubStatsRecord {
            shots: 3,
            shots_on_target: 4,
            ..Default::default()
        };
        assert_eq!(
            validate_club_stats(&club),
            Err(ValidationError::ShotsExceedTotal)
        );
    }

    #[test]
    fn test_goals_exceed_shots_on_target() {
        let mut stats = forward_stats();
        stats.goals = stats.shots_on_target + 1;
        assert_eq!(
            validate_player_stats(&stats, Some(Position::Forward)),
            Err(ValidationError::GoalsExceedShotsOnTarget)
        );
    }

    #[test]
    fn test_goal_type_sum() {
        let mut stats = forward_stats();
        stats.goals_from_header = 5;
        stats.goals_from_penalty = 5;
        stats.goals_from_freekick = 5;
        assert_eq!(validate_player_stats(&stats, None), Ok(()));
        stats.goals_from_freekick = 6;
        assert_eq!(
            validate_player_stats(&stats, None),
            Err(ValidationError::GoalTypeSumExceedsGoals)
        );

        // Inside/outside box goals count towards the club sum.
        let club = ClubStatsRecord {
            goals: 10,
            shots: 20,
            shots_on_target: 10,
            goals_from_header: 2,
            goals_from_inside_box: 6,
            goals_from_outside_box: 3,
            ..Default::default()
        };
        assert_eq!(
            validate_club_stats(&club),
            Err(ValidationError::GoalTypeSumExceedsGoals)
        );
    }

    #[test]
    fn test_negative_counter() {
        let stats = PlayerStatsRecord {
            crosses: -1,
            ..Default::default()
        };
        assert_eq!(
            validate_player_stats(&stats, None),
            Err(ValidationError::NegativeCounter { field: "crosses" })
        );
        // Reported before any relational check.
        let club = ClubStatsRecord {
            shots: -5,
            ..Default::default()
        };
        assert_eq!(
            validate_club_stats(&club),
            Err(ValidationError::NegativeCounter { field: "shots" })
        );
    }

    #[test]
    fn test_goalkeeper_stats_on_outfield_player() {
        for field in PlayerField::GOALKEEPING_ONLY {
            let mut stats = PlayerStatsRecord::default();
            match field {
                PlayerField::CleanSheets => stats.clean_sheets = 1,
                PlayerField::Saves => stats.saves = 1,
                PlayerField::PenaltiesSaved => stats.penalties_saved = 1,
                PlayerField::HighClaims => stats.high_claims = 1,
                PlayerField::SweeperClearances => stats.sweeper_clearances = 1,
                PlayerField::GoalKicks => stats.goal_kicks = 1,
                _ => unreachable!(),
            }
            for position in [Position::Defender, Position::Midfielder, Position::Forward] {
                assert_eq!(
                    validate_player_stats(&stats, Some(position)),
                    Err(ValidationError::GoalkeeperStatOnNonGoalkeeper {
                        field: field.name()
                    }),
                    "{field} on {position}"
                );
            }
            assert_eq!(
                validate_player_stats(&stats, Some(Position::Goalkeeper)),
                Ok(())
            );
        }
        // Goals conceded is not a goalkeeper-only counter.
        let stats = PlayerStatsRecord {
            goals_conceded: 12,
            ..Default::default()
        };
        assert_eq!(validate_player_stats(&stats, Some(Position::Defender)), Ok(()));
    }

    #[test]
    fn test_validate_names() {
        assert!(validate_club_name("Liverpool").is_ok());
        assert!(validate_club_name("").is_err());
        assert!(validate_club_name("   ").is_err());
        assert!(validate_player_name(&"x".repeat(101)).is_err());
        assert!(validate_location("Bad\u{7}Place").is_err());
    }
}
