use crate::handlers::prelude::*;
use actix_web::http::header;

#[get("/")]
pub async fn get_index() -> impl Responder {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/api/dashboard"))
        .finish()
}
