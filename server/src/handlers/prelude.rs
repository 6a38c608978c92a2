pub use std::collections::HashMap;

pub use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse, Responder};
pub use serde::{Deserialize, Serialize};

pub use stattrackr_api::records::*;
pub use stattrackr_api::views::*;

pub use crate::engine;
pub use crate::http_types::*;
pub use crate::reporting;
pub use crate::server_state::*;

/// Query parameters of the ranking endpoints. Both are kept as strings so
/// that bad values surface as category/limit errors rather than as generic
/// deserialization failures.
#[derive(Deserialize, Debug)]
pub struct RankingInfo {
    pub category: Option<String>,
    pub limit: Option<String>,
}

pub fn query_pairs(params: &HashMap<String, String>) -> impl Iterator<Item = (&str, &str)> {
    params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
}
