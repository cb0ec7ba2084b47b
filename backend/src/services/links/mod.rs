//! # Link Collection Service
//!
//! The REST collection the browser client mirrors. Records live in the
//! shared `LinksState`; nothing is written to disk.
//!
//! ## Sub-modules:
//! - `list`: returns every record.
//! - `create`: stores a new record under a server-assigned id.
//! - `update`: merges fields into an existing record.
//! - `delete`: removes a record.

mod create;
mod delete;
mod list;
mod update;

use actix_web::web::{delete, get, patch, post, scope};
use actix_web::Scope;

/// The base path of the collection.
const API_PATH: &str = links_common::remote::LINKS_PATH;

/// Configures and returns the Actix `Scope` for the collection.
///
/// # Registered Routes:
///
/// *   **`GET /links`** → `list::process`, `200` with a JSON array.
/// *   **`POST /links`** → `create::process`, `201` with the stored record.
/// *   **`PATCH /links/{id}`** → `update::process`, `200` or `404`.
/// *   **`DELETE /links/{id}`** → `delete::process`, `200` or `404`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{id}", patch().to(update::process))
        .route("/{id}", delete().to(delete::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link_controller::state::LinksState;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use links_common::{Link, LinkType};
    use serde_json::json;

    fn seeded() -> LinksState {
        LinksState::new(vec![Link {
            id: "1".to_string(),
            title: "Example".to_string(),
            url: "https://example.com".to_string(),
            link_type: LinkType::Code,
            description: "Test link".to_string(),
            paid: false,
        }])
    }

    #[actix_web::test]
    async fn test_list_returns_collection() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/links").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let links: Vec<Link> = test::read_body_json(resp).await;
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].title, "Example");
    }

    #[actix_web::test]
    async fn test_create_update_delete() {
        let state = LinksState::default();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/links")
            .set_json(json!({
                "title": "Rust",
                "url": "https://rust-lang.org",
                "type": "code",
                "description": "",
                "paid": false
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Link = test::read_body_json(resp).await;
        assert!(!created.id.is_empty());
        assert_eq!(created.link_type, LinkType::Code);

        let mut edited = created.clone();
        edited.title = "The Rust Book".to_string();
        edited.paid = true;
        let req = test::TestRequest::patch()
            .uri(&format!("/links/{}", created.id))
            .set_json(&edited)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(state.list().await, vec![edited]);

        let req = test::TestRequest::delete()
            .uri(&format!("/links/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(state.list().await.is_empty());
    }

    #[actix_web::test]
    async fn test_unknown_id_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/links/9")
            .set_json(json!({"title": "ghost"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri("/links/9").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_malformed_body_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/links")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::patch()
            .uri("/links/1")
            .set_json(json!("just a string"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }
}
