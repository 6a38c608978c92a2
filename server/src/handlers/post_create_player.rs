use crate::handlers::prelude::*;

#[post("/api/players")]
pub async fn post_create_player(req: HttpRequest, body: web::Json<NewPlayer>) -> HttpResult {
    let state = server_state(&req)?;
    let new_player = body.into_inner();
    let name = new_player.name.clone();
    let player_id = engine::create_player_with_stats(&state.db, new_player)
        .await
        .map_err(|e| engine_error(&format!("Failed to create player {name}"), e))?;
    let player = engine::load_player(&state.db, player_id)
        .await
        .map_err(|e| engine_error(&format!("Failed to load new player {player_id}"), e))?;
    Ok(HttpResponse::Created().json(reporting::player_view(&player)))
}
