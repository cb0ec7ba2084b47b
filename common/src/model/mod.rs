mod link;
mod view;

pub use link::{Link, LinkDraft, LinkType, MissingFields};
pub use view::{FilterSpec, PaidFilter, ProjectionMode, SortDirection, SortField, SortSpec, TypeFilter, UnknownControlValue};
