use actix_web::HttpRequest;
use sea_orm::DatabaseConnection;

use crate::config::{ReportingConfig, ServerConfig};
use crate::http_types::*;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub reporting: ReportingConfig,
    pub db: DatabaseConnection,
}

pub fn server_state(req: &HttpRequest) -> Result<&ServerState, AppHttpError> {
    req.app_data::<ServerState>().ok_or_else(move || {
        log::error!("Server state is not there");
        AppHttpError::Internal
    })
}
