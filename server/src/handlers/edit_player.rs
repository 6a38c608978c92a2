use crate::handlers::prelude::*;

#[put("/api/players/{id:\\d+}")]
pub async fn put_player(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<PlayerChanges>,
) -> HttpResult {
    let player_id = *path;
    let state = server_state(&req)?;
    engine::update_player(&state.db, player_id, body.into_inner())
        .await
        .map_err(|e| engine_error(&format!("Failed to update player {player_id}"), e))?;
    let player = engine::load_player(&state.db, player_id)
        .await
        .map_err(|e| engine_error(&format!("Failed to load player {player_id}"), e))?;
    Ok(HttpResponse::Ok().json(reporting::player_view(&player)))
}

/// Replaces all counters; counters missing from the body are set to zero.
#[put("/api/players/{id:\\d+}/stats")]
pub async fn put_player_stats(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<PlayerStatsRecord>,
) -> HttpResult {
    let player_id = *path;
    let state = server_state(&req)?;
    let stats = engine::update_player_stats(&state.db, player_id, body.into_inner())
        .await
        .map_err(|e| engine_error(&format!("Failed to update stats of player {player_id}"), e))?;
    Ok(HttpResponse::Ok().json(PlayerStatsView {
        player: player_id,
        stats,
    }))
}

#[delete("/api/players/{id:\\d+}")]
pub async fn delete_player(req: HttpRequest, path: web::Path<i64>) -> HttpResult {
    let player_id = *path;
    let state = server_state(&req)?;
    engine::delete_player(&state.db, player_id)
        .await
        .map_err(|e| engine_error(&format!("Failed to delete player {player_id}"), e))?;
    Ok(HttpResponse::NoContent().finish())
}
