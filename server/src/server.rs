use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use migration::MigratorTrait;
use sea_orm::Database;

use crate::config::*;
use crate::handlers::edit_club::*;
use crate::handlers::edit_player::*;
use crate::handlers::get_clubs::*;
use crate::handlers::get_dashboard::*;
use crate::handlers::get_index::*;
use crate::handlers::get_players::*;
use crate::handlers::get_search::*;
use crate::handlers::post_create_club::*;
use crate::handlers::post_create_player::*;
use crate::http_types::*;
use crate::server_state::*;

pub struct Handle {
    pub server: actix_web::dev::Server,
    pub addrs: Vec<std::net::SocketAddr>,
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let handle = create(config).await?;
    handle.server.await?;
    Ok(())
}

pub async fn create(config: Config) -> anyhow::Result<Handle> {
    let mut db_options = sea_orm::ConnectOptions::new(&config.db_path);
    db_options.max_connections(config.server_config.max_db_connections);
    let db = Database::connect(db_options)
        .await
        .context("Failed to connect to the database")?;
    if config.server_config.run_migrations {
        migration::Migrator::up(&db, None)
            .await
            .context("Failed to apply DB migrations")?;
    }
    let bind_address = config.server_config.bind_address.clone();
    let port = config.server_config.port;
    let workers = config.server_config.workers;

    let app_state = ServerState {
        config: config.server_config,
        reporting: config.reporting_config,
        db,
    };

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(app_state.clone())
            .app_data(web::JsonConfig::default().error_handler(|e, _| {
                AppHttpError::BadClientData(e.to_string()).into()
            }))
            .app_data(web::QueryConfig::default().error_handler(|e, _| {
                AppHttpError::BadClientData(e.to_string()).into()
            }))
            .app_data(web::PathConfig::default().error_handler(|e, _| {
                AppHttpError::BadClientData(e.to_string()).into()
            }))
            .service(get_index)
            .service(get_dashboard)
            .service(get_search)
            .service(get_players)
            .service(get_top_performers)
            .service(get_player)
            .service(get_player_stats)
            .service(post_create_player)
            .service(put_player)
            .service(put_player_stats)
            .service(delete_player)
            .service(get_clubs)
            .service(get_top_clubs)
            .service(get_club)
            .service(get_club_stats)
            .service(post_create_club)
            .service(put_club)
            .service(put_club_stats)
            .service(delete_club)
    })
    .workers(workers)
    .bind((bind_address.as_str(), port))?;
    let addrs = server.addrs();
    log::info!("Listening on {addrs:?}");
    let server = server.run(); // Does not actually run the server but creates a future.
    Ok(Handle { server, addrs })
}
