use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use derive_more::Display;
use stattrackr_api::views::ErrorBody;

use crate::engine;
use crate::query::QueryError;
use crate::validation::ValidationError;

pub type HttpResult = Result<HttpResponse, AppHttpError>;

#[derive(Debug, Display)]
pub enum AppHttpError {
    #[display(fmt = "Internal error.")]
    Internal,

    #[display(fmt = "Bad request: {_0}")]
    BadClientData(String),

    #[display(fmt = "{_0}")]
    Validation(ValidationError),

    #[display(fmt = "{_0}")]
    Query(QueryError),

    #[display(fmt = "Not found: {_0}")]
    NotFound(String),

    #[display(fmt = "Club with name {_0} already exists")]
    ClubAlreadyExists(String),
}

impl std::error::Error for AppHttpError {}

impl actix_web::error::ResponseError for AppHttpError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            AppHttpError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            AppHttpError::BadClientData(_) => StatusCode::BAD_REQUEST,
            AppHttpError::Validation(_) => StatusCode::BAD_REQUEST,
            AppHttpError::Query(_) => StatusCode::BAD_REQUEST,
            AppHttpError::NotFound(_) => StatusCode::NOT_FOUND,
            AppHttpError::ClubAlreadyExists(_) => StatusCode::CONFLICT,
        }
    }
}

impl From<QueryError> for AppHttpError {
    fn from(e: QueryError) -> Self {
        AppHttpError::Query(e)
    }
}

/// Maps a storage error onto a response. Failures the client cannot fix are
/// logged with `context` and reported without details.
pub fn engine_error(context: &str, e: engine::Error) -> AppHttpError {
    match e {
        engine::Error::Validation(e) => AppHttpError::Validation(e),
        engine::Error::InvalidArgument(e) => AppHttpError::BadClientData(e),
        engine::Error::NotFound(what) => AppHttpError::NotFound(what),
        engine::Error::ClubAlreadyExists(name) => AppHttpError::ClubAlreadyExists(name),
        engine::Error::Corrupt(e) => {
            log::error!("{context}: inconsistent stored data: {e}");
            AppHttpError::Internal
        }
        engine::Error::DbErr(e) => {
            log::error!("{context}: {e:?}");
            AppHttpError::Internal
        }
    }
}
