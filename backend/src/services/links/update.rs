use actix_web::{web, HttpResponse};
use log::{info, warn};
use serde_json::Value;

use crate::error::ServiceError;
use crate::link_controller::state::LinksState;

/// `PATCH /links/{id}`: merges the body's fields into the stored record.
///
/// # Returns
/// - `200 OK` with the updated record.
/// - `404 Not Found` when no record has this id.
/// - `400 Bad Request` when the body is not a JSON object of link fields.
pub async fn process(
    state: web::Data<LinksState>,
    id: web::Path<String>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, ServiceError> {
    match state.patch(&id, payload.into_inner()).await {
        Ok(link) => {
            info!("updated link {}", link.id);
            Ok(HttpResponse::Ok().json(link))
        }
        Err(e) => {
            warn!("PATCH /links/{} rejected: {}", id, e);
            Err(e)
        }
    }
}
