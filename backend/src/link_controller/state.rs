//! Holds the in-memory link collection served under `/links`.
//!
//! - `LinksState`: a clonable, thread-safe handle to the collection. It is
//!   injected into the Actix application state in `main.rs` and shared by
//!   every handler in `services::links`.
//! - `load_seed`: reads an initial collection from a JSON file, either a
//!   bare array of links or the `{"links": [...]}` document shape used by
//!   json-server.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use links_common::{Link, LinkDraft};
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::ConfigError;
use crate::error::ServiceError;

/// Shared, ordered link collection.
///
/// Insertion order is preserved, so `GET /links` lists records in the order
/// they were created.
#[derive(Clone, Default)]
pub struct LinksState {
    /// Protected by an `Arc<RwLock>` so list requests can read concurrently
    /// while mutations take the write lock.
    pub links: Arc<RwLock<Vec<Link>>>,
}

impl LinksState {
    /// Creates the state from an initial collection. Seed records without
    /// an id get one.
    pub fn new(seed: Vec<Link>) -> Self {
        let links = seed
            .into_iter()
            .map(|mut link| {
                if link.id.is_empty() {
                    link.id = new_id();
                }
                link
            })
            .collect();
        Self {
            links: Arc::new(RwLock::new(links)),
        }
    }

    pub async fn list(&self) -> Vec<Link> {
        self.links.read().await.clone()
    }

    /// Stores `draft` under a fresh id and returns the stored record.
    pub async fn create(&self, draft: LinkDraft) -> Link {
        let link = Link::from_draft(draft, new_id());
        self.links.write().await.push(link.clone());
        link
    }

    /// Merges the fields of `patch` into the record `id`. The id itself is
    /// never changed, whatever the body says.
    pub async fn patch(&self, id: &str, patch: Value) -> Result<Link, ServiceError> {
        let Value::Object(fields) = patch else {
            return Err(ServiceError::BadRequest("expected a JSON object".to_string()));
        };

        let mut links = self.links.write().await;
        let existing = links
            .iter_mut()
            .find(|link| link.id == id)
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;

        let mut merged = serde_json::to_value(&*existing).map_err(|e| ServiceError::BadRequest(e.to_string()))?;
        if let Value::Object(target) = &mut merged {
            for (key, value) in fields {
                if key != "id" {
                    target.insert(key, value);
                }
            }
        }
        let mut updated: Link = serde_json::from_value(merged).map_err(|e| ServiceError::BadRequest(e.to_string()))?;
        updated.id = id.to_string();
        *existing = updated.clone();
        Ok(updated)
    }

    /// Removes the record `id` and returns it.
    pub async fn remove(&self, id: &str) -> Result<Link, ServiceError> {
        let mut links = self.links.write().await;
        let index = links
            .iter()
            .position(|link| link.id == id)
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;
        Ok(links.remove(index))
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SeedFile {
    Document { links: Vec<Link> },
    Array(Vec<Link>),
}

/// Reads the initial collection from `path`.
pub fn load_seed(path: &Path) -> Result<Vec<Link>, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;
    let seed: SeedFile = serde_json::from_str(&raw).map_err(|source| ConfigError::SeedParse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match seed {
        SeedFile::Document { links } => links,
        SeedFile::Array(links) => links,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use links_common::LinkType;
    use serde_json::json;
    use std::io::Write;

    fn titled(title: &str) -> LinkDraft {
        LinkDraft {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn test_create_assigns_unique_ids_in_order() {
        let state = LinksState::default();
        let a = state.create(titled("a")).await;
        let b = state.create(titled("b")).await;
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(state.list().await, vec![a, b]);
    }

    #[actix_web::test]
    async fn test_patch_merges_fields_and_keeps_id() {
        let state = LinksState::new(vec![Link {
            id: "1".to_string(),
            title: "old".to_string(),
            url: "https://a.example".to_string(),
            ..Default::default()
        }]);
        let updated = state
            .patch("1", json!({"id": "999", "title": "new", "type": "music", "paid": true}))
            .await
            .unwrap();
        assert_eq!(updated.id, "1");
        assert_eq!(updated.title, "new");
        assert_eq!(updated.url, "https://a.example");
        assert_eq!(updated.link_type, LinkType::Music);
        assert!(updated.paid);
        assert_eq!(state.list().await, vec![updated]);
    }

    #[actix_web::test]
    async fn test_patch_and_remove_unknown_id() {
        let state = LinksState::default();
        assert!(matches!(state.patch("x", json!({})).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(state.remove("x").await, Err(ServiceError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_patch_rejects_non_object_body() {
        let state = LinksState::new(vec![Link {
            id: "1".to_string(),
            ..Default::default()
        }]);
        assert!(matches!(state.patch("1", json!([1, 2])).await, Err(ServiceError::BadRequest(_))));
    }

    #[actix_web::test]
    async fn test_seed_accepts_document_and_array() {
        let mut doc = tempfile::NamedTempFile::new().unwrap();
        write!(doc, r#"{{"links":[{{"id":1,"title":"Example","type":"code"}}]}}"#).unwrap();
        let links = load_seed(doc.path()).unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].id, "1");

        let mut array = tempfile::NamedTempFile::new().unwrap();
        write!(array, r#"[{{"title":"no id"}}]"#).unwrap();
        let state = LinksState::new(load_seed(array.path()).unwrap());
        let links = state.list().await;
        assert!(!links[0].id.is_empty());
    }

    #[test]
    fn test_seed_errors() {
        let missing = load_seed(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(missing, ConfigError::SeedRead { .. }));

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(bad, "{{\"links\": 5}}").unwrap();
        assert!(matches!(load_seed(bad.path()).unwrap_err(), ConfigError::SeedParse { .. }));
    }
}
