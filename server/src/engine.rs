//! Storage side of StatTrackr: every write goes through one transaction and
//! every stat write through validation. Readers produce the in-memory
//! entities that rankings and listings work on.

use derive_more::Display;
use sea_orm::prelude::TimeDateTimeWithTimeZone;
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionError, TransactionTrait,
};

use std::collections::HashMap;
use std::sync::Arc;

use stattrackr_api::records::{
    ClubChanges, ClubStatsRecord, NewClub, NewPlayer, PlayerChanges, PlayerStatsRecord,
};
use stattrackr_api::seed::{SeedClub, SeedPlayer};
use stattrackr_api::Position;
use stattrackr_db as db;

use crate::entity::{Club, Player};
use crate::stats::{ClubStats, PlayerStats};
use crate::validation::{self, ValidationError};

#[derive(Debug, Display, Eq, PartialEq)]
pub enum Error {
    #[display(fmt = "{_0}")]
    Validation(ValidationError),

    #[display(fmt = "{_0}")]
    InvalidArgument(String),

    #[display(fmt = "Not found: {_0}")]
    NotFound(String),

    #[display(fmt = "Club with name {_0} already exists")]
    ClubAlreadyExists(String),

    #[display(fmt = "Stored record is inconsistent: {_0}")]
    Corrupt(String),

    DbErr(DbErr),
}

impl std::error::Error for Error {}

impl From<DbErr> for Error {
    fn from(e: DbErr) -> Self {
        Error::DbErr(e)
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::Validation(e)
    }
}

impl From<TransactionError<Error>> for Error {
    fn from(e: TransactionError<Error>) -> Self {
        match e {
            TransactionError::Connection(e) => Error::DbErr(e),
            TransactionError::Transaction(e) => e,
        }
    }
}

/// Everything the read side needs, taken from one transaction.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub clubs: Vec<Club>,
    pub players: Vec<Player>,
}

macro_rules! stats_mapping {
    ($to_record:ident, $to_active:ident, $record:ident, $table:ident, $owner:ident, [$($f:ident),* $(,)?]) => {
        fn $to_record(m: &db::$table::Model) -> $record {
            $record { $($f: m.$f,)* }
        }

        fn $to_active(owner_id: i64, r: &$record) -> db::$table::ActiveModel {
            db::$table::ActiveModel {
                $owner: Set(owner_id),
                $($f: Set(r.$f),)*
                ..Default::default()
            }
        }
    };
}

stats_mapping!(
    player_record_from_db,
    player_stats_to_db,
    PlayerStatsRecord,
    player_stats,
    player_id,
    [
        goals, assists, appearances, minutes_played, yellow_cards, red_cards, substitution_on,
        substitution_off, shots, shots_on_target, goals_from_header, goals_from_penalty,
        goals_from_freekick, offsides, passes, crosses, corners_taken, interceptions, blocks,
        tackles, clearances, own_goals, penalties_conceded, aerial_battles_won,
        aerial_battles_lost, clean_sheets, goals_conceded, saves, penalties_saved, high_claims,
        sweeper_clearances, goal_kicks,
    ]
);

stats_mapping!(
    club_record_from_db,
    club_stats_to_db,
    ClubStatsRecord,
    club_stats,
    club_id,
    [
        wins, losses, goals, yellow_cards, red_cards, shots, shots_on_target, goals_from_header,
        goals_from_penalty, goals_from_freekick, goals_from_inside_box, goals_from_outside_box,
        offsides, clean_sheets, goals_conceded, saves, blocks, interceptions, tackles, clearances,
        own_goals, penalties_conceded, fouls,
    ]
);

pub fn to_db_position(position: Position) -> db::players::Position {
    match position {
        Position::Goalkeeper => db::players::Position::Goalkeeper,
        Position::Defender => db::players::Position::Defender,
        Position::Midfielder => db::players::Position::Midfielder,
        Position::Forward => db::players::Position::Forward,
    }
}

pub fn from_db_position(position: db::players::Position) -> Position {
    match position {
        db::players::Position::Goalkeeper => Position::Goalkeeper,
        db::players::Position::Defender => Position::Defender,
        db::players::Position::Midfielder => Position::Midfielder,
        db::players::Position::Forward => Position::Forward,
    }
}

fn checked_club_name(name: &str) -> Result<String, Error> {
    validation::validate_club_name(name).map_err(Error::InvalidArgument)?;
    Ok(name.trim().to_owned())
}

fn checked_player_name(name: &str) -> Result<String, Error> {
    validation::validate_player_name(name).map_err(Error::InvalidArgument)?;
    Ok(name.trim().to_owned())
}

fn checked_location(location: &str) -> Result<String, Error> {
    validation::validate_location(location).map_err(Error::InvalidArgument)?;
    Ok(location.trim().to_owned())
}

// Building blocks. None of them opens a transaction, so they compose inside
// the public operations below.

async fn db_find_club<C: ConnectionTrait>(db: &C, club_id: i64) -> Result<db::clubs::Model, Error> {
    db::clubs::Entity::find_by_id(club_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound(format!("club {club_id}")))
}

async fn db_find_player<C: ConnectionTrait>(
    db: &C,
    player_id: i64,
) -> Result<db::players::Model, Error> {
    db::players::Entity::find_by_id(player_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound(format!("player {player_id}")))
}

async fn db_find_club_by_name<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<Option<db::clubs::Model>, Error> {
    Ok(db::clubs::Entity::find()
        .filter(db::clubs::Column::Name.eq(name))
        .one(db)
        .await?)
}

async fn db_insert_club<C: ConnectionTrait>(
    db: &C,
    name: String,
    location: String,
) -> Result<i64, Error> {
    if db_find_club_by_name(db, &name).await?.is_some() {
        return Err(Error::ClubAlreadyExists(name));
    }
    let now = TimeDateTimeWithTimeZone::now_utc();
    let club = db::clubs::ActiveModel {
        name: Set(name),
        location: Set(location),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let club_id = db::clubs::Entity::insert(club).exec(db).await?.last_insert_id;
    db::club_stats::Entity::insert(club_stats_to_db(club_id, &ClubStatsRecord::default()))
        .exec(db)
        .await?;
    Ok(club_id)
}

async fn db_insert_player<C: ConnectionTrait>(
    db: &C,
    name: String,
    club_id: i64,
    position: Position,
) -> Result<i64, Error> {
    db_find_club(db, club_id).await?;
    let now = TimeDateTimeWithTimeZone::now_utc();
    let player = db::players::ActiveModel {
        name: Set(name),
        club_id: Set(club_id),
        position: Set(to_db_position(position)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let player_id = db::players::Entity::insert(player)
        .exec(db)
        .await?
        .last_insert_id;
    db::player_stats::Entity::insert(player_stats_to_db(
        player_id,
        &PlayerStatsRecord::default(),
    ))
    .exec(db)
    .await?;
    Ok(player_id)
}

async fn db_player_stats_row<C: ConnectionTrait>(
    db: &C,
    player_id: i64,
) -> Result<Option<db::player_stats::Model>, Error> {
    Ok(db::player_stats::Entity::find()
        .filter(db::player_stats::Column::PlayerId.eq(player_id))
        .one(db)
        .await?)
}

async fn db_club_stats_row<C: ConnectionTrait>(
    db: &C,
    club_id: i64,
) -> Result<Option<db::club_stats::Model>, Error> {
    Ok(db::club_stats::Entity::find()
        .filter(db::club_stats::Column::ClubId.eq(club_id))
        .one(db)
        .await?)
}

async fn db_write_player_stats<C: ConnectionTrait>(
    db: &C,
    player_id: i64,
    record: PlayerStatsRecord,
) -> Result<PlayerStatsRecord, Error> {
    let player = db_find_player(db, player_id).await?;
    let stats = PlayerStats::new(from_db_position(player.position), record)?;
    let mut update = player_stats_to_db(player_id, stats.record());
    match db_player_stats_row(db, player_id).await? {
        Some(row) => {
            update.id = Set(row.id);
            db::player_stats::Entity::update(update).exec(db).await?;
        }
        None => {
            log::warn!("Player {player_id} had no stats row, creating one");
            db::player_stats::Entity::insert(update).exec(db).await?;
        }
    }
    db::players::Entity::update(db::players::ActiveModel {
        id: Set(player_id),
        updated_at: Set(TimeDateTimeWithTimeZone::now_utc()),
        ..Default::default()
    })
    .exec(db)
    .await?;
    Ok(stats.into_record())
}

async fn db_write_club_stats<C: ConnectionTrait>(
    db: &C,
    club_id: i64,
    record: ClubStatsRecord,
) -> Result<ClubStatsRecord, Error> {
    db_find_club(db, club_id).await?;
    let stats = ClubStats::new(record)?;
    let mut update = club_stats_to_db(club_id, stats.record());
    match db_club_stats_row(db, club_id).await? {
        Some(row) => {
            update.id = Set(row.id);
            db::club_stats::Entity::update(update).exec(db).await?;
        }
        None => {
            log::warn!("Club {club_id} had no stats row, creating one");
            db::club_stats::Entity::insert(update).exec(db).await?;
        }
    }
    db::clubs::Entity::update(db::clubs::ActiveModel {
        id: Set(club_id),
        updated_at: Set(TimeDateTimeWithTimeZone::now_utc()),
        ..Default::default()
    })
    .exec(db)
    .await?;
    Ok(stats.into_record())
}

async fn db_set_player_position<C: ConnectionTrait>(
    db: &C,
    player_id: i64,
    position: Position,
) -> Result<(), Error> {
    db::players::Entity::update(db::players::ActiveModel {
        id: Set(player_id),
        position: Set(to_db_position(position)),
        updated_at: Set(TimeDateTimeWithTimeZone::now_utc()),
        ..Default::default()
    })
    .exec(db)
    .await?;
    Ok(())
}

pub async fn create_club_with_stats(db: &DatabaseConnection, new_club: NewClub) -> Result<i64, Error> {
    let name = checked_club_name(&new_club.name)?;
    let location = checked_location(&new_club.location)?;
    let club_id = db
        .transaction::<_, i64, Error>(|txn| {
            Box::pin(async move { db_insert_club(txn, name, location).await })
        })
        .await?;
    log::info!("Created club {club_id}");
    Ok(club_id)
}

pub async fn create_player_with_stats(
    db: &DatabaseConnection,
    new_player: NewPlayer,
) -> Result<i64, Error> {
    let name = checked_player_name(&new_player.name)?;
    let player_id = db
        .transaction::<_, i64, Error>(|txn| {
            Box::pin(async move {
                db_insert_player(txn, name, new_player.club_id, new_player.position).await
            })
        })
        .await?;
    log::info!("Created player {player_id}");
    Ok(player_id)
}

/// Validates the record against the player's current position and replaces
/// all of the player's counters with it.
pub async fn update_player_stats(
    db: &DatabaseConnection,
    player_id: i64,
    record: PlayerStatsRecord,
) -> Result<PlayerStatsRecord, Error> {
    Ok(db
        .transaction::<_, PlayerStatsRecord, Error>(|txn| {
            Box::pin(async move { db_write_player_stats(txn, player_id, record).await })
        })
        .await?)
}

pub async fn update_club_stats(
    db: &DatabaseConnection,
    club_id: i64,
    record: ClubStatsRecord,
) -> Result<ClubStatsRecord, Error> {
    Ok(db
        .transaction::<_, ClubStatsRecord, Error>(|txn| {
            Box::pin(async move { db_write_club_stats(txn, club_id, record).await })
        })
        .await?)
}

pub async fn update_club(
    db: &DatabaseConnection,
    club_id: i64,
    changes: ClubChanges,
) -> Result<(), Error> {
    let name = changes.name.as_deref().map(checked_club_name).transpose()?;
    let location = changes
        .location
        .as_deref()
        .map(checked_location)
        .transpose()?;
    db.transaction::<_, (), Error>(|txn| {
        Box::pin(async move {
            let club = db_find_club(txn, club_id).await?;
            let mut update = db::clubs::ActiveModel {
                id: Set(club.id),
                updated_at: Set(TimeDateTimeWithTimeZone::now_utc()),
                ..Default::default()
            };
            if let Some(name) = name {
                if let Some(other) = db_find_club_by_name(txn, &name).await? {
                    if other.id != club.id {
                        return Err(Error::ClubAlreadyExists(name));
                    }
                }
                update.name = Set(name);
            }
            if let Some(location) = location {
                update.location = Set(location);
            }
            db::clubs::Entity::update(update).exec(txn).await?;
            Ok(())
        })
    })
    .await?;
    Ok(())
}

/// A position change is checked against the player's existing counters, so
/// a goalkeeper with saves cannot silently become an outfield player.
pub async fn update_player(
    db: &DatabaseConnection,
    player_id: i64,
    changes: PlayerChanges,
) -> Result<(), Error> {
    let name = changes
        .name
        .as_deref()
        .map(checked_player_name)
        .transpose()?;
    db.transaction::<_, (), Error>(|txn| {
        Box::pin(async move {
            let player = db_find_player(txn, player_id).await?;
            let mut update = db::players::ActiveModel {
                id: Set(player.id),
                updated_at: Set(TimeDateTimeWithTimeZone::now_utc()),
                ..Default::default()
            };
            if let Some(name) = name {
                update.name = Set(name);
            }
            if let Some(club_id) = changes.club_id {
                db_find_club(txn, club_id).await?;
                update.club_id = Set(club_id);
            }
            if let Some(position) = changes.position {
                if let Some(row) = db_player_stats_row(txn, player_id).await? {
                    PlayerStats::new(position, player_record_from_db(&row))?;
                }
                update.position = Set(to_db_position(position));
            }
            db::players::Entity::update(update).exec(txn).await?;
            Ok(())
        })
    })
    .await?;
    Ok(())
}

pub async fn delete_player(db: &DatabaseConnection, player_id: i64) -> Result<(), Error> {
    db.transaction::<_, (), Error>(|txn| {
        Box::pin(async move {
            db_find_player(txn, player_id).await?;
            db::player_stats::Entity::delete_many()
                .filter(db::player_stats::Column::PlayerId.eq(player_id))
                .exec(txn)
                .await?;
            db::players::Entity::delete_by_id(player_id).exec(txn).await?;
            Ok(())
        })
    })
    .await?;
    log::info!("Deleted player {player_id}");
    Ok(())
}

/// Deletes the club together with its players and every stats row they own.
pub async fn delete_club(db: &DatabaseConnection, club_id: i64) -> Result<(), Error> {
    let deleted_players = db
        .transaction::<_, usize, Error>(|txn| {
            Box::pin(async move {
                db_find_club(txn, club_id).await?;
                let player_ids: Vec<i64> = db::players::Entity::find()
                    .filter(db::players::Column::ClubId.eq(club_id))
                    .select_only()
                    .column(db::players::Column::Id)
                    .into_tuple()
                    .all(txn)
                    .await?;
                db::player_stats::Entity::delete_many()
                    .filter(db::player_stats::Column::PlayerId.is_in(player_ids.iter().copied()))
                    .exec(txn)
                    .await?;
                db::players::Entity::delete_many()
                    .filter(db::players::Column::ClubId.eq(club_id))
                    .exec(txn)
                    .await?;
                db::club_stats::Entity::delete_many()
                    .filter(db::club_stats::Column::ClubId.eq(club_id))
                    .exec(txn)
                    .await?;
                db::clubs::Entity::delete_by_id(club_id).exec(txn).await?;
                Ok(player_ids.len())
            })
        })
        .await?;
    log::info!("Deleted club {club_id} with {deleted_players} players");
    Ok(())
}

fn club_from_db(
    club: db::clubs::Model,
    stats: Option<db::club_stats::Model>,
) -> Result<Club, Error> {
    let stats = match stats {
        Some(row) => ClubStats::new(club_record_from_db(&row))
            .map_err(|e| Error::Corrupt(format!("club {}: {e}", club.id)))?,
        None => ClubStats::zeroed(),
    };
    Ok(Club {
        id: club.id,
        name: club.name,
        location: club.location,
        created_at: club.created_at,
        updated_at: club.updated_at,
        stats,
    })
}

fn player_from_db(
    player: db::players::Model,
    stats: Option<db::player_stats::Model>,
    club: Arc<Club>,
) -> Result<Player, Error> {
    let position = from_db_position(player.position);
    let stats = match stats {
        Some(row) => PlayerStats::new(position, player_record_from_db(&row))
            .map_err(|e| Error::Corrupt(format!("player {}: {e}", player.id)))?,
        None => PlayerStats::zeroed(position),
    };
    Ok(Player {
        id: player.id,
        name: player.name,
        club,
        created_at: player.created_at,
        updated_at: player.updated_at,
        stats,
    })
}

pub async fn load_clubs<C: ConnectionTrait>(db: &C) -> Result<Vec<Club>, Error> {
    db::clubs::Entity::find()
        .find_also_related(db::club_stats::Entity)
        .order_by_asc(db::clubs::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(|(club, stats)| club_from_db(club, stats))
        .collect()
}

pub async fn load_club<C: ConnectionTrait>(db: &C, club_id: i64) -> Result<Club, Error> {
    let (club, stats) = db::clubs::Entity::find_by_id(club_id)
        .find_also_related(db::club_stats::Entity)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound(format!("club {club_id}")))?;
    club_from_db(club, stats)
}

async fn load_players_of<C: ConnectionTrait>(
    db: &C,
    clubs: &HashMap<i64, Arc<Club>>,
) -> Result<Vec<Player>, Error> {
    db::players::Entity::find()
        .find_also_related(db::player_stats::Entity)
        .order_by_asc(db::players::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(|(player, stats)| {
            let club = clubs.get(&player.club_id).cloned().ok_or_else(|| {
                Error::Corrupt(format!(
                    "player {} refers to missing club {}",
                    player.id, player.club_id
                ))
            })?;
            player_from_db(player, stats, club)
        })
        .collect()
}

pub async fn load_players<C: ConnectionTrait>(db: &C) -> Result<Vec<Player>, Error> {
    let clubs = load_clubs(db)
        .await?
        .into_iter()
        .map(|c| (c.id, Arc::new(c)))
        .collect::<HashMap<_, _>>();
    load_players_of(db, &clubs).await
}

pub async fn load_player<C: ConnectionTrait>(db: &C, player_id: i64) -> Result<Player, Error> {
    let (player, stats) = db::players::Entity::find_by_id(player_id)
        .find_also_related(db::player_stats::Entity)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound(format!("player {player_id}")))?;
    let club = load_club(db, player.club_id).await.map_err(|e| match e {
        Error::NotFound(_) => Error::Corrupt(format!(
            "player {} refers to missing club {}",
            player.id, player.club_id
        )),
        e => e,
    })?;
    player_from_db(player, stats, Arc::new(club))
}

/// Clubs and players read in one transaction, so both halves agree.
pub async fn load_snapshot(db: &DatabaseConnection) -> Result<Snapshot, Error> {
    Ok(db
        .transaction::<_, Snapshot, Error>(|txn| {
            Box::pin(async move {
                let clubs = load_clubs(txn).await?;
                let shared = clubs
                    .iter()
                    .map(|c| (c.id, Arc::new(c.clone())))
                    .collect::<HashMap<_, _>>();
                let players = load_players_of(txn, &shared).await?;
                Ok(Snapshot { clubs, players })
            })
        })
        .await?)
}

pub async fn load_player_stats<C: ConnectionTrait>(
    db: &C,
    player_id: i64,
) -> Result<PlayerStatsRecord, Error> {
    Ok(load_player(db, player_id).await?.stats.into_record())
}

pub async fn load_club_stats<C: ConnectionTrait>(
    db: &C,
    club_id: i64,
) -> Result<ClubStatsRecord, Error> {
    Ok(load_club(db, club_id).await?.stats.into_record())
}

/// Creates the club or brings an existing one (matched by name) in line
/// with the seed entry.
pub async fn upsert_club(db: &DatabaseConnection, seed: SeedClub) -> Result<i64, Error> {
    let name = checked_club_name(&seed.name)?;
    let location = checked_location(&seed.location)?;
    Ok(db
        .transaction::<_, i64, Error>(|txn| {
            Box::pin(async move {
                let club_id = match db_find_club_by_name(txn, &name).await? {
                    Some(club) => {
                        if club.location != location {
                            db::clubs::Entity::update(db::clubs::ActiveModel {
                                id: Set(club.id),
                                location: Set(location),
                                updated_at: Set(TimeDateTimeWithTimeZone::now_utc()),
                                ..Default::default()
                            })
                            .exec(txn)
                            .await?;
                        }
                        club.id
                    }
                    None => db_insert_club(txn, name, location).await?,
                };
                db_write_club_stats(txn, club_id, seed.stats).await?;
                Ok(club_id)
            })
        })
        .await?)
}

/// Creates the player or updates the one with the same name in the same
/// club. The club must already exist.
pub async fn upsert_player(db: &DatabaseConnection, seed: SeedPlayer) -> Result<i64, Error> {
    let name = checked_player_name(&seed.name)?;
    let club_name = seed.club.trim().to_owned();
    Ok(db
        .transaction::<_, i64, Error>(|txn| {
            Box::pin(async move {
                let club = db_find_club_by_name(txn, &club_name)
                    .await?
                    .ok_or_else(|| Error::NotFound(format!("club {club_name}")))?;
                let existing = db::players::Entity::find()
                    .filter(
                        Condition::all()
                            .add(db::players::Column::Name.eq(name.as_str()))
                            .add(db::players::Column::ClubId.eq(club.id)),
                    )
                    .order_by_asc(db::players::Column::Id)
                    .one(txn)
                    .await?;
                let player_id = match existing {
                    Some(player) => {
                        if from_db_position(player.position) != seed.position {
                            db_set_player_position(txn, player.id, seed.position).await?;
                        }
                        player.id
                    }
                    None => db_insert_player(txn, name, club.id, seed.position).await?,
                };
                // Validated against the new position; a failure rolls back
                // the position change too.
                db_write_player_stats(txn, player_id, seed.stats).await?;
                Ok(player_id)
            })
        })
        .await?)
}

/// Raw rows whose stored counters break a consistency rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub entity: String,
    pub error: ValidationError,
}

/// Runs validation over every stored stats row without building entities,
/// so that broken rows are reported rather than refused.
pub async fn check_stored_stats<C: ConnectionTrait>(db: &C) -> Result<Vec<Violation>, Error> {
    let mut violations = Vec::new();
    let players = db::players::Entity::find()
        .find_also_related(db::player_stats::Entity)
        .order_by_asc(db::players::Column::Id)
        .all(db)
        .await?;
    for (player, stats) in players {
        let Some(stats) = stats else {
            log::warn!("Player {} has no stats row", player.id);
            continue;
        };
        let record = player_record_from_db(&stats);
        if let Err(error) =
            validation::validate_player_stats(&record, Some(from_db_position(player.position)))
        {
            violations.push(Violation {
                entity: format!("player {} ({})", player.id, player.name),
                error,
            });
        }
    }
    let clubs = db::clubs::Entity::find()
        .find_also_related(db::club_stats::Entity)
        .order_by_asc(db::clubs::Column::Id)
        .all(db)
        .await?;
    for (club, stats) in clubs {
        let Some(stats) = stats else {
            log::warn!("Club {} has no stats row", club.id);
            continue;
        };
        if let Err(error) = validation::validate_club_stats(&club_record_from_db(&stats)) {
            violations.push(Violation {
                entity: format!("club {} ({})", club.id, club.name),
                error,
            });
        }
    }
    Ok(violations)
}

/// Removes every club, player and stats row.
pub async fn delete_all(db: &DatabaseConnection) -> Result<(), Error> {
    db.transaction::<_, (), Error>(|txn| {
        Box::pin(async move {
            db::player_stats::Entity::delete_many().exec(txn).await?;
            db::players::Entity::delete_many().exec(txn).await?;
            db::club_stats::Entity::delete_many().exec(txn).await?;
            db::clubs::Entity::delete_many().exec(txn).await?;
            Ok(())
        })
    })
    .await?;
    log::info!("Deleted all clubs and players");
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use sea_orm_migration::MigratorTrait;

    async fn test_db() -> DatabaseConnection {
        let db = sea_orm::Database::connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory sqlite DB.");
        migration::Migrator::up(&db, None)
            .await
            .expect("Applying initial DB migrations failed");
        db
    }

    fn new_club(name: &str, location: &str) -> NewClub {
        NewClub {
            name: name.to_owned(),
            location: location.to_owned(),
        }
    }

    fn new_player(name: &str, club_id: i64, position: Position) -> NewPlayer {
        NewPlayer {
            name: name.to_owned(),
            club_id,
            position,
        }
    }

    fn united_seed() -> SeedClub {
        SeedClub {
            name: "Manchester United".to_owned(),
            location: "Manchester".to_owned(),
            stats: ClubStatsRecord {
                wins: 15,
                losses: 5,
                goals: 45,
                tackles: 320,
                shots: 200,
                shots_on_target: 95,
                ..Default::default()
            },
        }
    }

    fn rashford_seed() -> SeedPlayer {
        SeedPlayer {
            name: "Marcus Rashford".to_owned(),
            club: "Manchester United".to_owned(),
            position: Position::Forward,
            stats: PlayerStatsRecord {
                goals: 15,
                assists: 8,
                appearances: 20,
                shots: 65,
                shots_on_target: 35,
                passes: 500,
                ..Default::default()
            },
        }
    }

    #[tokio::test]
    async fn test_create_with_zero_stats() {
        let db = test_db().await;
        let club_id = create_club_with_stats(&db, new_club(" Liverpool ", "Liverpool"))
            .await
            .unwrap();
        let player_id =
            create_player_with_stats(&db, new_player("Mohamed Salah", club_id, Position::Forward))
                .await
                .unwrap();
        let club = load_club(&db, club_id).await.unwrap();
        assert_eq!(club.name, "Liverpool");
        assert_eq!(club.stats.record(), &ClubStatsRecord::default());
        let player = load_player(&db, player_id).await.unwrap();
        assert_eq!(player.club.id, club_id);
        assert_eq!(player.position(), Position::Forward);
        assert_eq!(player.stats.record(), &PlayerStatsRecord::default());
        assert_eq!(
            load_player(&db, player_id + 1).await,
            Err(Error::NotFound(format!("player {}", player_id + 1)))
        );
    }

    #[tokio::test]
    async fn test_club_names_are_unique() {
        let db = test_db().await;
        let liverpool = create_club_with_stats(&db, new_club("Liverpool", "Liverpool"))
            .await
            .unwrap();
        assert_eq!(
            create_club_with_stats(&db, new_club("Liverpool", "Elsewhere")).await,
            Err(Error::ClubAlreadyExists("Liverpool".to_owned()))
        );
        let everton = create_club_with_stats(&db, new_club("Everton", "Liverpool"))
            .await
            .unwrap();
        assert_eq!(
            update_club(
                &db,
                everton,
                ClubChanges {
                    name: Some("Liverpool".to_owned()),
                    location: None,
                }
            )
            .await,
            Err(Error::ClubAlreadyExists("Liverpool".to_owned()))
        );
        // Renaming a club to its own name is fine.
        update_club(
            &db,
            liverpool,
            ClubChanges {
                name: Some("Liverpool".to_owned()),
                location: Some("Anfield".to_owned()),
            },
        )
        .await
        .unwrap();
        assert_eq!(load_club(&db, liverpool).await.unwrap().location, "Anfield");
        assert!(matches!(
            create_club_with_stats(&db, new_club("  ", "Nowhere")).await,
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(load_clubs(&db).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_player_requires_existing_club() {
        let db = test_db().await;
        assert_eq!(
            create_player_with_stats(&db, new_player("Nobody", 42, Position::Defender)).await,
            Err(Error::NotFound("club 42".to_owned()))
        );
        assert!(load_players(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_stats_updates_are_validated() {
        let db = test_db().await;
        let club_id = create_club_with_stats(&db, new_club("Liverpool", "Liverpool"))
            .await
            .unwrap();
        let salah =
            create_player_with_stats(&db, new_player("Mohamed Salah", club_id, Position::Forward))
                .await
                .unwrap();
        let good = PlayerStatsRecord {
            goals: 18,
            shots: 70,
            shots_on_target: 40,
            ..Default::default()
        };
        assert_eq!(
            update_player_stats(&db, salah, good.clone()).await,
            Ok(good.clone())
        );
        let bad = PlayerStatsRecord {
            shots_on_target: 80,
            ..good.clone()
        };
        assert_eq!(
            update_player_stats(&db, salah, bad).await,
            Err(Error::Validation(ValidationError::ShotsExceedTotal))
        );
        let saves = PlayerStatsRecord {
            saves: 3,
            ..good.clone()
        };
        assert_eq!(
            update_player_stats(&db, salah, saves).await,
            Err(Error::Validation(
                ValidationError::GoalkeeperStatOnNonGoalkeeper { field: "saves" }
            ))
        );
        // Rejected writes leave the stored record untouched.
        assert_eq!(load_player_stats(&db, salah).await, Ok(good));

        let club_stats = ClubStatsRecord {
            goals: 10,
            shots_on_target: 5,
            shots: 20,
            ..Default::default()
        };
        assert_eq!(
            update_club_stats(&db, club_id, club_stats).await,
            Err(Error::Validation(ValidationError::GoalsExceedShotsOnTarget))
        );
        assert_eq!(
            load_club_stats(&db, club_id).await,
            Ok(ClubStatsRecord::default())
        );
    }

    #[tokio::test]
    async fn test_position_change_revalidates_stats() {
        let db = test_db().await;
        let club_id = create_club_with_stats(&db, new_club("Liverpool", "Liverpool"))
            .await
            .unwrap();
        let alisson =
            create_player_with_stats(&db, new_player("Alisson", club_id, Position::Goalkeeper))
                .await
                .unwrap();
        update_player_stats(
            &db,
            alisson,
            PlayerStatsRecord {
                saves: 50,
                clean_sheets: 8,
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let to_forward = PlayerChanges {
            position: Some(Position::Forward),
            ..Default::default()
        };
        assert_eq!(
            update_player(&db, alisson, to_forward.clone()).await,
            Err(Error::Validation(
                ValidationError::GoalkeeperStatOnNonGoalkeeper {
                    field: "clean_sheets"
                }
            ))
        );
        assert_eq!(
            load_player(&db, alisson).await.unwrap().position(),
            Position::Goalkeeper
        );
        update_player_stats(&db, alisson, PlayerStatsRecord::default())
            .await
            .unwrap();
        update_player(&db, alisson, to_forward).await.unwrap();
        assert_eq!(
            load_player(&db, alisson).await.unwrap().position(),
            Position::Forward
        );
    }

    #[tokio::test]
    async fn test_delete_club_cascades() {
        let db = test_db().await;
        let united = create_club_with_stats(&db, new_club("Manchester United", "Manchester"))
            .await
            .unwrap();
        let liverpool = create_club_with_stats(&db, new_club("Liverpool", "Liverpool"))
            .await
            .unwrap();
        create_player_with_stats(&db, new_player("Marcus Rashford", united, Position::Forward))
            .await
            .unwrap();
        create_player_with_stats(&db, new_player("Bruno Fernandes", united, Position::Midfielder))
            .await
            .unwrap();
        let salah =
            create_player_with_stats(&db, new_player("Mohamed Salah", liverpool, Position::Forward))
                .await
                .unwrap();

        delete_club(&db, united).await.unwrap();
        let snapshot = load_snapshot(&db).await.unwrap();
        assert_eq!(snapshot.clubs.len(), 1);
        assert_eq!(
            snapshot.players.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![salah]
        );
        assert_eq!(
            db::player_stats::Entity::find().all(&db).await.unwrap().len(),
            1
        );
        assert_eq!(
            db::club_stats::Entity::find().all(&db).await.unwrap().len(),
            1
        );
        assert_eq!(
            delete_club(&db, united).await,
            Err(Error::NotFound(format!("club {united}")))
        );

        delete_player(&db, salah).await.unwrap();
        assert!(db::player_stats::Entity::find().all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let db = test_db().await;
        for _ in 0..2 {
            upsert_club(&db, united_seed()).await.unwrap();
            upsert_player(&db, rashford_seed()).await.unwrap();
        }
        let snapshot = load_snapshot(&db).await.unwrap();
        assert_eq!(snapshot.clubs.len(), 1);
        assert_eq!(snapshot.players.len(), 1);
        assert_eq!(snapshot.clubs[0].stats.record(), &united_seed().stats);
        assert_eq!(snapshot.players[0].stats.record(), &rashford_seed().stats);
        assert_eq!(snapshot.players[0].club.name, "Manchester United");

        // Seed entries go through validation like any other write.
        let broken = SeedPlayer {
            position: Position::Defender,
            stats: PlayerStatsRecord {
                goals: 40,
                ..rashford_seed().stats
            },
            ..rashford_seed()
        };
        assert_eq!(
            upsert_player(&db, broken).await,
            Err(Error::Validation(ValidationError::GoalsExceedShotsOnTarget))
        );
        // The position change was rolled back with the stats.
        let player = load_player(&db, snapshot.players[0].id).await.unwrap();
        assert_eq!(player.position(), Position::Forward);

        let orphan = SeedPlayer {
            club: "Nowhere FC".to_owned(),
            ..rashford_seed()
        };
        assert_eq!(
            upsert_player(&db, orphan).await,
            Err(Error::NotFound("club Nowhere FC".to_owned()))
        );

        assert!(check_stored_stats(&db).await.unwrap().is_empty());
        delete_all(&db).await.unwrap();
        assert!(load_clubs(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_check_stored_stats_reports_broken_rows() {
        let db = test_db().await;
        let club_id = upsert_club(&db, united_seed()).await.unwrap();
        let row = db_club_stats_row(&db, club_id).await.unwrap().unwrap();
        // Bypass validation to simulate a manual edit.
        db::club_stats::Entity::update(db::club_stats::ActiveModel {
            id: Set(row.id),
            shots_on_target: Set(500),
            ..Default::default()
        })
        .exec(&db)
        .await
        .unwrap();
        let violations = check_stored_stats(&db).await.unwrap();
        assert_eq!(
            violations,
            vec![Violation {
                entity: "club 1 (Manchester United)".to_owned(),
                error: ValidationError::ShotsExceedTotal,
            }]
        );
        assert!(matches!(
            load_club(&db, club_id).await,
            Err(Error::Corrupt(_))
        ));
    }
}
