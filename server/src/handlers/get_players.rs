use crate::handlers::prelude::*;

#[get("/api/players")]
pub async fn get_players(
    req: HttpRequest,
    params: web::Query<HashMap<String, String>>,
) -> HttpResult {
    let state = server_state(&req)?;
    let players = engine::load_players(&state.db)
        .await
        .map_err(|e| engine_error("Failed to load players", e))?;
    let views = reporting::list_players(&players, query_pairs(&params), &state.reporting)?;
    Ok(HttpResponse::Ok().json(views))
}

#[get("/api/players/top_performers")]
pub async fn get_top_performers(req: HttpRequest, info: web::Query<RankingInfo>) -> HttpResult {
    let state = server_state(&req)?;
    let players = engine::load_players(&state.db)
        .await
        .map_err(|e| engine_error("Failed to load players", e))?;
    let views = reporting::top_players(
        &players,
        info.category.as_deref(),
        info.limit.as_deref(),
        &state.reporting,
    )?;
    Ok(HttpResponse::Ok().json(views))
}

#[get("/api/players/{id:\\d+}")]
pub async fn get_player(req: HttpRequest, path: web::Path<i64>) -> HttpResult {
    let player_id = *path;
    let state = server_state(&req)?;
    let player = engine::load_player(&state.db, player_id)
        .await
        .map_err(|e| engine_error(&format!("Failed to load player {player_id}"), e))?;
    Ok(HttpResponse::Ok().json(reporting::player_view(&player)))
}

#[get("/api/players/{id:\\d+}/stats")]
pub async fn get_player_stats(req: HttpRequest, path: web::Path<i64>) -> HttpResult {
    let player_id = *path;
    let state = server_state(&req)?;
    let stats = engine::load_player_stats(&state.db, player_id)
        .await
        .map_err(|e| engine_error(&format!("Failed to load stats of player {player_id}"), e))?;
    Ok(HttpResponse::Ok().json(PlayerStatsView {
        player: player_id,
        stats,
    }))
}
