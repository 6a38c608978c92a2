use anyhow::{anyhow, Context};
use clap::Parser;

use stattrackr_server::engine;

/// Re-validates every stored stats record and lists the ones that break a
/// consistency rule, e.g. after manual edits to the database.
#[derive(Parser, Debug)]
struct Config {
    #[arg(long)]
    db: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("sqlx", log::LevelFilter::Error)
        .init();
    let cfg = Config::parse();
    let db = sea_orm::Database::connect(&cfg.db)
        .await
        .context("Failed to connect to the database")?;
    let violations = engine::check_stored_stats(&db)
        .await
        .context("Failed to read stats")?;
    for v in violations.iter() {
        println!("{}: {}", v.entity, v.error);
    }
    if !violations.is_empty() {
        return Err(anyhow!("{} inconsistent records", violations.len()));
    }
    println!("All stats records are consistent");
    Ok(())
}
