use crate::handlers::prelude::*;

#[get("/api/clubs")]
pub async fn get_clubs(
    req: HttpRequest,
    params: web::Query<HashMap<String, String>>,
) -> HttpResult {
    let state = server_state(&req)?;
    let clubs = engine::load_clubs(&state.db)
        .await
        .map_err(|e| engine_error("Failed to load clubs", e))?;
    let views = reporting::list_clubs(&clubs, query_pairs(&params), &state.reporting)?;
    Ok(HttpResponse::Ok().json(views))
}

#[get("/api/clubs/top_clubs")]
pub async fn get_top_clubs(req: HttpRequest, info: web::Query<RankingInfo>) -> HttpResult {
    let state = server_state(&req)?;
    let clubs = engine::load_clubs(&state.db)
        .await
        .map_err(|e| engine_error("Failed to load clubs", e))?;
    let views = reporting::top_clubs(
        &clubs,
        info.category.as_deref(),
        info.limit.as_deref(),
        &state.reporting,
    )?;
    Ok(HttpResponse::Ok().json(views))
}

#[get("/api/clubs/{id:\\d+}")]
pub async fn get_club(req: HttpRequest, path: web::Path<i64>) -> HttpResult {
    let club_id = *path;
    let state = server_state(&req)?;
    let club = engine::load_club(&state.db, club_id)
        .await
        .map_err(|e| engine_error(&format!("Failed to load club {club_id}"), e))?;
    Ok(HttpResponse::Ok().json(reporting::club_view(&club)))
}

#[get("/api/clubs/{id:\\d+}/stats")]
pub async fn get_club_stats(req: HttpRequest, path: web::Path<i64>) -> HttpResult {
    let club_id = *path;
    let state = server_state(&req)?;
    let stats = engine::load_club_stats(&state.db, club_id)
        .await
        .map_err(|e| engine_error(&format!("Failed to load stats of club {club_id}"), e))?;
    Ok(HttpResponse::Ok().json(ClubStatsView {
        club: club_id,
        stats,
    }))
}
