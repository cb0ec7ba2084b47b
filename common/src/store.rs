//! Session state for the link table.
//!
//! `LinkStore` mirrors the remote `/links` collection. The server is the
//! source of truth: every successful list replaces the local records
//! wholesale. When a call fails the store applies the user's intent locally
//! instead, marks the touched records [`SyncState::LocalOnly`], and keeps the
//! table usable until the next successful list reconciles it.
//!
//! Operations take `&self` and may overlap on a single-threaded executor.
//! Each one draws a sequence number when it is issued; the store remembers
//! the highest sequence number whose effect it has applied, and a list
//! response older than that is dropped instead of overwriting newer local
//! changes.

use std::cell::RefCell;

use log::{debug, info, warn};

use crate::model::{Link, LinkDraft, LinkType};
use crate::remote::{LinkRemote, RemoteResult};

/// Whether a record has been confirmed by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// Came from a successful list.
    Synced,
    /// Produced locally after a failed call (or the offline placeholder).
    LocalOnly,
}

/// How an operation's effect reached the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The server accepted the operation and the refreshed list was applied.
    Synced,
    /// The server call failed and the effect was applied locally.
    LocalOnly,
    /// A list response arrived after newer changes and was ignored.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredLink {
    pub link: Link,
    pub sync: SyncState,
}

/// Store contents right after an operation completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub links: Vec<Link>,
    pub outcome: Outcome,
}

/// Shown when the service cannot be reached before anything was loaded.
pub fn placeholder_link() -> Link {
    Link {
        id: "1".to_string(),
        title: "Example".to_string(),
        url: "https://example.com".to_string(),
        link_type: LinkType::Code,
        description: "Test link".to_string(),
        paid: false,
    }
}

#[derive(Debug, Default)]
struct State {
    records: Vec<StoredLink>,
    /// A list has succeeded at least once.
    populated: bool,
    next_seq: u64,
    /// Highest sequence number whose effect was applied.
    applied: u64,
    last_local_id: i64,
}

impl State {
    fn links(&self) -> Vec<Link> {
        self.records.iter().map(|r| r.link.clone()).collect()
    }

    fn snapshot(&self, outcome: Outcome) -> Snapshot {
        Snapshot {
            links: self.links(),
            outcome,
        }
    }

    fn mark_applied(&mut self, seq: u64) {
        self.applied = self.applied.max(seq);
    }

    fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.link.id == id)
    }

    /// Millisecond timestamp, bumped until it is unique and increasing.
    fn local_id(&mut self, now_millis: i64) -> String {
        let mut candidate = now_millis.max(self.last_local_id + 1);
        while self.contains(&candidate.to_string()) {
            candidate += 1;
        }
        self.last_local_id = candidate;
        candidate.to_string()
    }
}

pub struct LinkStore<R> {
    remote: R,
    state: RefCell<State>,
}

impl<R: LinkRemote> LinkStore<R> {
    pub fn new(remote: R) -> Self {
        Self {
            remote,
            state: RefCell::new(State::default()),
        }
    }

    /// A store already holding server-confirmed `links`.
    pub fn with_links(remote: R, links: Vec<Link>) -> Self {
        let store = Self::new(remote);
        {
            let mut state = store.state.borrow_mut();
            state.records = links
                .into_iter()
                .map(|link| StoredLink {
                    link,
                    sync: SyncState::Synced,
                })
                .collect();
            state.populated = true;
        }
        store
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn links(&self) -> Vec<Link> {
        self.state.borrow().links()
    }

    pub fn records(&self) -> Vec<StoredLink> {
        self.state.borrow().records.clone()
    }

    pub fn get(&self, id: &str) -> Option<Link> {
        self.state
            .borrow()
            .records
            .iter()
            .find(|r| r.link.id == id)
            .map(|r| r.link.clone())
    }

    pub fn sync_state(&self, id: &str) -> Option<SyncState> {
        self.state
            .borrow()
            .records
            .iter()
            .find(|r| r.link.id == id)
            .map(|r| r.sync)
    }

    pub fn is_populated(&self) -> bool {
        self.state.borrow().populated
    }

    pub fn len(&self) -> usize {
        self.state.borrow().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().records.is_empty()
    }

    fn issue(&self) -> u64 {
        let mut state = self.state.borrow_mut();
        state.next_seq += 1;
        state.next_seq
    }

    /// Fetches the collection and replaces the local records with it.
    ///
    /// On failure the local records are kept. A store that has never been
    /// loaded and holds nothing gets the placeholder record so the table is
    /// not empty.
    pub async fn list(&self) -> Snapshot {
        let seq = self.issue();
        let result = self.remote.list().await;
        self.apply_list(seq, result)
    }

    fn apply_list(&self, seq: u64, result: RemoteResult<Vec<Link>>) -> Snapshot {
        let mut state = self.state.borrow_mut();
        match result {
            Ok(links) if seq < state.applied => {
                debug!(
                    "discarding stale list response #{} ({} links), newer change #{} already applied",
                    seq,
                    links.len(),
                    state.applied
                );
                state.snapshot(Outcome::Stale)
            }
            Ok(links) => {
                debug!("list #{} synced {} links", seq, links.len());
                state.records = links
                    .into_iter()
                    .map(|link| StoredLink {
                        link,
                        sync: SyncState::Synced,
                    })
                    .collect();
                state.populated = true;
                state.mark_applied(seq);
                state.snapshot(Outcome::Synced)
            }
            Err(err) => {
                warn!("{}; keeping {} local links", err, state.records.len());
                if !state.populated && state.records.is_empty() {
                    info!("link service unavailable, showing placeholder record");
                    state.records.push(StoredLink {
                        link: placeholder_link(),
                        sync: SyncState::LocalOnly,
                    });
                    state.mark_applied(seq);
                }
                state.snapshot(Outcome::LocalOnly)
            }
        }
    }

    /// Persists `draft`, then refreshes.
    ///
    /// On failure the draft is appended locally under a timestamp id.
    pub async fn create(&self, draft: LinkDraft) -> Snapshot {
        let seq = self.issue();
        match self.remote.create(&draft).await {
            Ok(()) => self.list().await,
            Err(err) => {
                warn!("{}; adding {:?} locally", err, draft.title);
                let mut state = self.state.borrow_mut();
                let id = state.local_id(chrono::Utc::now().timestamp_millis());
                state.records.push(StoredLink {
                    link: Link::from_draft(draft, id),
                    sync: SyncState::LocalOnly,
                });
                state.mark_applied(seq);
                state.snapshot(Outcome::LocalOnly)
            }
        }
    }

    /// Replaces the record with `link.id` on the server, then refreshes.
    ///
    /// On failure the matching local record is replaced in place; an unknown
    /// id leaves the store untouched.
    pub async fn update(&self, link: Link) -> Snapshot {
        if !link.has_id() {
            warn!("ignoring update of {:?} without an id", link.title);
            return self.state.borrow().snapshot(Outcome::LocalOnly);
        }
        let seq = self.issue();
        match self.remote.update(&link).await {
            Ok(()) => self.list().await,
            Err(err) => {
                warn!("{}; updating {} locally", err, link.id);
                let mut state = self.state.borrow_mut();
                if let Some(record) = state.records.iter_mut().find(|r| r.link.id == link.id) {
                    *record = StoredLink {
                        link,
                        sync: SyncState::LocalOnly,
                    };
                }
                state.mark_applied(seq);
                state.snapshot(Outcome::LocalOnly)
            }
        }
    }

    /// Deletes `id` on the server, then refreshes.
    ///
    /// On failure the matching local record is removed; an unknown id leaves
    /// the store untouched.
    pub async fn delete(&self, id: &str) -> Snapshot {
        if id.is_empty() {
            warn!("ignoring delete without an id");
            return self.state.borrow().snapshot(Outcome::LocalOnly);
        }
        let seq = self.issue();
        match self.remote.delete(id).await {
            Ok(()) => self.list().await,
            Err(err) => {
                warn!("{}; removing {} locally", err, id);
                let mut state = self.state.borrow_mut();
                state.records.retain(|r| r.link.id != id);
                state.mark_applied(seq);
                state.snapshot(Outcome::LocalOnly)
            }
        }
    }
}
