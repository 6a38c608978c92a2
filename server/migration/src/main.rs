use sea_orm_migration::prelude::*;

// Connection comes from DATABASE_URL, e.g. sqlite://stattrackr.sqlite?mode=rwc
#[async_std::main]
async fn main() {
    let _ = dotenvy::dotenv();
    cli::run_cli(migration::Migrator).await;
}
