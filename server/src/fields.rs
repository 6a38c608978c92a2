//! Closed tables of the stat fields that ranking, filtering and validation
//! may refer to by name.

use stattrackr_api::records::{ClubStatsRecord, PlayerStatsRecord};

/// A named counter of a stat record.
pub trait StatField: Copy + Eq + std::fmt::Debug + 'static {
    type Record;

    fn all() -> &'static [Self];
    fn name(self) -> &'static str;
    fn get(self, record: &Self::Record) -> i32;

    fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.name() == name)
    }
}

macro_rules! stat_fields {
    ($(#[$meta:meta])* $name:ident for $record:ty { $($variant:ident => $field:ident,)* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)*
        }

        impl StatField for $name {
            type Record = $record;

            fn all() -> &'static [Self] {
                &[$($name::$variant,)*]
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($field),)*
                }
            }

            fn get(self, record: &$record) -> i32 {
                match self {
                    $($name::$variant => record.$field,)*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

stat_fields! {
    PlayerField for PlayerStatsRecord {
        Goals => goals,
        Assists => assists,
        Appearances => appearances,
        MinutesPlayed => minutes_played,
        YellowCards => yellow_cards,
        RedCards => red_cards,
        SubstitutionOn => substitution_on,
        SubstitutionOff => substitution_off,
        Shots => shots,
        ShotsOnTarget => shots_on_target,
        GoalsFromHeader => goals_from_header,
        GoalsFromPenalty => goals_from_penalty,
        GoalsFromFreekick => goals_from_freekick,
        Offsides => offsides,
        Passes => passes,
        Crosses => crosses,
        CornersTaken => corners_taken,
        Interceptions => interceptions,
        Blocks => blocks,
        Tackles => tackles,
        Clearances => clearances,
        OwnGoals => own_goals,
        PenaltiesConceded => penalties_conceded,
        AerialBattlesWon => aerial_battles_won,
        AerialBattlesLost => aerial_battles_lost,
        CleanSheets => clean_sheets,
        GoalsConceded => goals_conceded,
        Saves => saves,
        PenaltiesSaved => penalties_saved,
        HighClaims => high_claims,
        SweeperClearances => sweeper_clearances,
        GoalKicks => goal_kicks,
    }
}

stat_fields! {
    ClubField for ClubStatsRecord {
        Wins => wins,
        Losses => losses,
        Goals => goals,
        YellowCards => yellow_cards,
        RedCards => red_cards,
        Shots => shots,
        ShotsOnTarget => shots_on_target,
        GoalsFromHeader => goals_from_header,
        GoalsFromPenalty => goals_from_penalty,
        GoalsFromFreekick => goals_from_freekick,
        GoalsFromInsideBox => goals_from_inside_box,
        GoalsFromOutsideBox => goals_from_outside_box,
        Offsides => offsides,
        CleanSheets => clean_sheets,
        GoalsConceded => goals_conceded,
        Saves => saves,
        Blocks => blocks,
        Interceptions => interceptions,
        Tackles => tackles,
        Clearances => clearances,
        OwnGoals => own_goals,
        PenaltiesConceded => penalties_conceded,
        Fouls => fouls,
    }
}

impl PlayerField {
    /// Counters that only make sense for goalkeepers.
    pub const GOALKEEPING_ONLY: [PlayerField; 6] = [
        PlayerField::CleanSheets,
        PlayerField::Saves,
        PlayerField::PenaltiesSaved,
        PlayerField::HighClaims,
        PlayerField::SweeperClearances,
        PlayerField::GoalKicks,
    ];

    pub const GOAL_TYPES: [PlayerField; 3] = [
        PlayerField::GoalsFromHeader,
        PlayerField::GoalsFromPenalty,
        PlayerField::GoalsFromFreekick,
    ];
}

impl ClubField {
    pub const GOAL_TYPES: [ClubField; 5] = [
        ClubField::GoalsFromHeader,
        ClubField::GoalsFromPenalty,
        ClubField::GoalsFromFreekick,
        ClubField::GoalsFromInsideBox,
        ClubField::GoalsFromOutsideBox,
    ];
}

/// Maps public category names onto fields. Only the listed categories are
/// accepted for rankings.
pub struct CategoryTable<F: 'static> {
    entries: &'static [(&'static str, F)],
}

impl<F: Copy> CategoryTable<F> {
    pub const fn new(entries: &'static [(&'static str, F)]) -> Self {
        Self { entries }
    }

    pub fn resolve(&self, name: &str) -> Option<F> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, f)| *f)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }
}

pub const PLAYER_CATEGORIES: CategoryTable<PlayerField> = CategoryTable::new(&[
    ("goals", PlayerField::Goals),
    ("assists", PlayerField::Assists),
    ("passes", PlayerField::Passes),
    ("shots", PlayerField::Shots),
    ("tackles", PlayerField::Tackles),
    ("clean_sheets", PlayerField::CleanSheets),
]);

pub const CLUB_CATEGORIES: CategoryTable<ClubField> = CategoryTable::new(&[
    ("wins", ClubField::Wins),
    ("goals", ClubField::Goals),
    ("clean_sheets", ClubField::CleanSheets),
    ("tackles", ClubField::Tackles),
]);
