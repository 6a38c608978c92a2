use crate::handlers::prelude::*;

#[derive(Deserialize, Debug)]
pub struct SearchInfo {
    pub q: Option<String>,
}

#[get("/api/search")]
pub async fn get_search(req: HttpRequest, info: web::Query<SearchInfo>) -> HttpResult {
    let state = server_state(&req)?;
    if info.q.as_deref().map_or(true, |q| q.trim().is_empty()) {
        return Err(crate::query::QueryError::EmptySearchQuery.into());
    }
    let snapshot = engine::load_snapshot(&state.db)
        .await
        .map_err(|e| engine_error("Failed to load search data", e))?;
    let results = reporting::search(
        &snapshot.players,
        &snapshot.clubs,
        info.q.as_deref(),
        &state.reporting,
    )?;
    Ok(HttpResponse::Ok().json(results))
}
