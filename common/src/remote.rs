//! The seam between the store and the `/links` REST collection.
//!
//! Implementations report every kind of failure (unreachable host, non-2xx
//! status, undecodable body) as the same [`RemoteError`]; the store never
//! needs to tell them apart.

use std::fmt;

use async_trait::async_trait;

use crate::model::{Link, LinkDraft};

/// Path of the collection on the REST service.
pub const LINKS_PATH: &str = "/links";

/// Path of a single record.
pub fn link_path(id: &str) -> String {
    format!("{}/{}", LINKS_PATH, id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// HTTP method used for the operation.
    pub fn method(&self) -> &'static str {
        match self {
            Operation::List => "GET",
            Operation::Create => "POST",
            Operation::Update => "PATCH",
            Operation::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method())
    }
}

/// A remote operation that did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{operation}: {reason}")]
pub struct RemoteError {
    pub operation: Operation,
    pub reason: String,
}

impl RemoteError {
    pub fn new(operation: Operation, reason: impl Into<String>) -> Self {
        Self {
            operation,
            reason: reason.into(),
        }
    }

    /// A response arrived with a status outside 2xx.
    pub fn status(operation: Operation, status: u16) -> Self {
        Self::new(operation, format!("bad request (status {})", status))
    }
}

pub type RemoteResult<T> = Result<T, RemoteError>;

/// CRUD access to the remote link collection.
///
/// Futures are not required to be `Send`: the browser client runs them on
/// the single-threaded local executor.
#[async_trait(?Send)]
pub trait LinkRemote {
    /// `GET /links`
    async fn list(&self) -> RemoteResult<Vec<Link>>;

    /// `POST /links`
    async fn create(&self, draft: &LinkDraft) -> RemoteResult<()>;

    /// `PATCH /links/{id}` with the full record.
    async fn update(&self, link: &Link) -> RemoteResult<()>;

    /// `DELETE /links/{id}`
    async fn delete(&self, id: &str) -> RemoteResult<()>;
}
