use actix_web::{web, HttpResponse, Responder};
use links_common::LinkDraft;
use log::info;

use crate::link_controller::state::LinksState;

/// `POST /links`: stores the draft under a server-assigned id and answers
/// `201 Created` with the stored record. Any `id` in the body is ignored.
pub async fn process(state: web::Data<LinksState>, payload: web::Json<LinkDraft>) -> impl Responder {
    let link = state.create(payload.into_inner()).await;
    info!("created link {} ({:?})", link.id, link.title);
    HttpResponse::Created().json(link)
}
