use crate::handlers::prelude::*;

#[get("/api/dashboard")]
pub async fn get_dashboard(req: HttpRequest) -> HttpResult {
    let state = server_state(&req)?;
    let snapshot = engine::load_snapshot(&state.db)
        .await
        .map_err(|e| engine_error("Failed to load dashboard data", e))?;
    let dashboard = reporting::dashboard(
        &snapshot.players,
        &snapshot.clubs,
        state.reporting.dashboard_size,
    );
    Ok(HttpResponse::Ok().json(dashboard))
}
