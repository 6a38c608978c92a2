use anyhow::Context;
use clap::Parser;
use migration::MigratorTrait;

use stattrackr_api::seed::SeedFile;
use stattrackr_server::engine;

const DEFAULT_SEED: &str = include_str!("../../data/seed.toml");

/// Loads clubs and players into the database. Entries that already exist
/// are updated in place, so the tool can be re-run safely.
#[derive(Parser, Debug)]
struct Config {
    #[arg(long)]
    db: String,
    /// TOML seed file; the bundled sample data is used when omitted.
    #[arg(long)]
    file: Option<std::path::PathBuf>,
    /// Delete all clubs and players first.
    #[arg(long)]
    clean: bool,
    /// Apply pending migrations before seeding.
    #[arg(long)]
    migrate: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("sqlx", log::LevelFilter::Error)
        .init();
    let cfg = Config::parse();
    let text = match &cfg.file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .context(format!("Failed to read seed file {}", path.display()))?,
        None => DEFAULT_SEED.to_owned(),
    };
    let seed: SeedFile = toml::from_str(&text).context("Failed to parse seed file")?;
    let db = sea_orm::Database::connect(&cfg.db)
        .await
        .context("Failed to connect to the database")?;
    if cfg.migrate {
        migration::Migrator::up(&db, None)
            .await
            .context("Failed to apply DB migrations")?;
    }
    if cfg.clean {
        engine::delete_all(&db)
            .await
            .context("Failed to clean the database")?;
    }
    for club in seed.clubs {
        let name = club.name.clone();
        let id = engine::upsert_club(&db, club)
            .await
            .context(format!("Failed to seed club {name}"))?;
        log::info!("Seeded club {name} ({id})");
    }
    for player in seed.players {
        let name = player.name.clone();
        let id = engine::upsert_player(&db, player)
            .await
            .context(format!("Failed to seed player {name}"))?;
        log::info!("Seeded player {name} ({id})");
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bundled_seed_parses() {
        let seed: SeedFile = toml::from_str(DEFAULT_SEED).unwrap();
        assert_eq!(seed.clubs.len(), 2);
        assert_eq!(seed.players.len(), 2);
        assert!(seed
            .players
            .iter()
            .all(|p| seed.clubs.iter().any(|c| c.name == p.club)));
    }
}
