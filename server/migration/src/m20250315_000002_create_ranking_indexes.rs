use sea_orm_migration::prelude::*;
use stattrackr_db::{club_stats, player_stats, prelude::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

// Dashboard and top-N queries order by these counters; the single-column
// indexes come from the entity definitions.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        for (name, col) in [
            ("player-stats-passes-index", player_stats::Column::Passes),
            ("player-stats-shots-index", player_stats::Column::Shots),
            ("player-stats-tackles-index", player_stats::Column::Tackles),
            (
                "player-stats-clean-sheets-index",
                player_stats::Column::CleanSheets,
            ),
        ] {
            let mut index = Index::create();
            index
                .name(name)
                .if_not_exists()
                .table(PlayerStats)
                .col(col);
            m.create_index(index).await?;
        }
        let mut club_tackles_index = Index::create();
        club_tackles_index
            .name("club-stats-tackles-index")
            .if_not_exists()
            .table(ClubStats)
            .col(club_stats::Column::Tackles);
        m.create_index(club_tackles_index).await?;
        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(())
    }
}
