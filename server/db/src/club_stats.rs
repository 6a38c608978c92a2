use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "club_stats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique, indexed)]
    pub club_id: i64,

    // General
    #[sea_orm(indexed)]
    pub wins: i32,
    pub losses: i32,
    #[sea_orm(indexed)]
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
    #[sea_orm(indexed)]
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clubs::Entity",
        from = "Column::ClubId",
        to = "super::clubs::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Clubs,
}

impl Related<super::clubs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clubs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
