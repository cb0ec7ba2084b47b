//! Link collection state model shared by the browser client and the
//! development service: the record types, the `LinkRemote` seam, the
//! optimistic `LinkStore`, and the filter/sort projection.

pub mod model;
pub mod projector;
pub mod remote;
pub mod store;

pub use model::{FilterSpec, Link, LinkDraft, LinkType, PaidFilter, ProjectionMode, SortDirection, SortField, SortSpec, TypeFilter};
pub use projector::{project, ViewProjector};
pub use remote::{LinkRemote, Operation, RemoteError, RemoteResult};
pub use store::{LinkStore, Outcome, Snapshot, SyncState};
