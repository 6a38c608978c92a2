use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(Some(2))")]
pub enum Position {
    #[sea_orm(string_value = "GK")]
    Goalkeeper,
    #[sea_orm(string_value = "DF")]
    Defender,
    #[sea_orm(string_value = "MF")]
    Midfielder,
    #[sea_orm(string_value = "FW")]
    Forward,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(indexed)]
    pub name: String,
    #[sea_orm(indexed)]
    pub club_id: i64,
    #[sea_orm(indexed)]
    pub position: Position,
    pub created_at: TimeDateTimeWithTimeZone,
    pub updated_at: TimeDateTimeWithTimeZone,
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
    #[sea_orm(has_one = "super::player_stats::Entity")]
    PlayerStats,
}

impl Related<super::clubs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clubs.def()
    }
}

impl Related<super::player_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerStats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
