use actix_web::{web, HttpResponse, Responder};

use crate::link_controller::state::LinksState;

/// `GET /links`: the whole collection as a JSON array.
pub async fn process(state: web::Data<LinksState>) -> impl Responder {
    HttpResponse::Ok().json(state.list().await)
}
