//! `LinkRemote` over HTTP with `gloo_net`.
//!
//! Any transport error, non-2xx status, or undecodable body becomes a
//! `RemoteError`; the store turns it into its local fallback.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use links_common::remote::{link_path, LINKS_PATH};
use links_common::{Link, LinkDraft, LinkRemote, Operation, RemoteError, RemoteResult};

pub struct HttpRemote {
    base: String,
}

impl HttpRemote {
    /// `base` is the service origin without a trailing slash, or empty for
    /// the page's own origin.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

fn transport(operation: Operation) -> impl Fn(gloo_net::Error) -> RemoteError {
    move |e| RemoteError::new(operation, e.to_string())
}

fn ensure_ok(operation: Operation, response: Response) -> RemoteResult<Response> {
    if response.ok() {
        Ok(response)
    } else {
        Err(RemoteError::status(operation, response.status()))
    }
}

#[async_trait(?Send)]
impl LinkRemote for HttpRemote {
    async fn list(&self) -> RemoteResult<Vec<Link>> {
        let op = Operation::List;
        let response = Request::get(&self.url(LINKS_PATH))
            .send()
            .await
            .map_err(transport(op))?;
        ensure_ok(op, response)?
            .json::<Vec<Link>>()
            .await
            .map_err(transport(op))
    }

    async fn create(&self, draft: &LinkDraft) -> RemoteResult<()> {
        let op = Operation::Create;
        let response = Request::post(&self.url(LINKS_PATH))
            .json(draft)
            .map_err(transport(op))?
            .send()
            .await
            .map_err(transport(op))?;
        ensure_ok(op, response).map(|_| ())
    }

    async fn update(&self, link: &Link) -> RemoteResult<()> {
        let op = Operation::Update;
        let response = Request::patch(&self.url(&link_path(&link.id)))
            .json(link)
            .map_err(transport(op))?
            .send()
            .await
            .map_err(transport(op))?;
        ensure_ok(op, response).map(|_| ())
    }

    async fn delete(&self, id: &str) -> RemoteResult<()> {
        let op = Operation::Delete;
        let response = Request::delete(&self.url(&link_path(id)))
            .send()
            .await
            .map_err(transport(op))?;
        ensure_ok(op, response).map(|_| ())
    }
}
