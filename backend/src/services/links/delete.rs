use actix_web::{web, HttpResponse};
use log::{info, warn};

use crate::error::ServiceError;
use crate::link_controller::state::LinksState;

/// `DELETE /links/{id}`: removes the record and echoes it back, or `404`.
pub async fn process(state: web::Data<LinksState>, id: web::Path<String>) -> Result<HttpResponse, ServiceError> {
    match state.remove(&id).await {
        Ok(link) => {
            info!("deleted link {}", link.id);
            Ok(HttpResponse::Ok().json(link))
        }
        Err(e) => {
            warn!("DELETE /links/{} rejected: {}", id, e);
            Err(e)
        }
    }
}
