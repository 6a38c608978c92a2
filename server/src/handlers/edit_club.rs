use crate::handlers::prelude::*;

#[put("/api/clubs/{id:\\d+}")]
pub async fn put_club(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<ClubChanges>,
) -> HttpResult {
    let club_id = *path;
    let state = server_state(&req)?;
    engine::update_club(&state.db, club_id, body.into_inner())
        .await
        .map_err(|e| engine_error(&format!("Failed to update club {club_id}"), e))?;
    let club = engine::load_club(&state.db, club_id)
        .await
        .map_err(|e| engine_error(&format!("Failed to load club {club_id}"), e))?;
    Ok(HttpResponse::Ok().json(reporting::club_view(&club)))
}

/// Replaces all counters; counters missing from the body are set to zero.
#[put("/api/clubs/{id:\\d+}/stats")]
pub async fn put_club_stats(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<ClubStatsRecord>,
) -> HttpResult {
    let club_id = *path;
    let state = server_state(&req)?;
    let stats = engine::update_club_stats(&state.db, club_id, body.into_inner())
        .await
        .map_err(|e| engine_error(&format!("Failed to update stats of club {club_id}"), e))?;
    Ok(HttpResponse::Ok().json(ClubStatsView {
        club: club_id,
        stats,
    }))
}

/// Players of the club and all of their stats go with it.
#[delete("/api/clubs/{id:\\d+}")]
pub async fn delete_club(req: HttpRequest, path: web::Path<i64>) -> HttpResult {
    let club_id = *path;
    let state = server_state(&req)?;
    engine::delete_club(&state.db, club_id)
        .await
        .map_err(|e| engine_error(&format!("Failed to delete club {club_id}"), e))?;
    Ok(HttpResponse::NoContent().finish())
}
