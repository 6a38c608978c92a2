use crate::handlers::prelude::*;

#[post("/api/clubs")]
pub async fn post_create_club(req: HttpRequest, body: web::Json<NewClub>) -> HttpResult {
    let state = server_state(&req)?;
    let new_club = body.into_inner();
    let name = new_club.name.clone();
    let club_id = engine::create_club_with_stats(&state.db, new_club)
        .await
        .map_err(|e| engine_error(&format!("Failed to create club {name}"), e))?;
    let club = engine::load_club(&state.db, club_id)
        .await
        .map_err(|e| engine_error(&format!("Failed to load new club {club_id}"), e))?;
    Ok(HttpResponse::Created().json(reporting::club_view(&club)))
}
