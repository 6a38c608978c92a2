use sea_orm::entity::prelude::*;

// Counters are signed so that bad input survives long enough to be
// rejected by validation instead of wrapping.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "player_stats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique, indexed)]
    pub player_id: i64,

    // General
    #[sea_orm(indexed)]
    pub goals: i32,
    #[sea_orm(indexed)]
    pub assists: i32,
    #[sea_orm(indexed)]
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::PlayerId",
        to = "super::players::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Players,
}

impl Related<super::players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Players.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
