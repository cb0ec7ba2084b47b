use links_common::{PaidFilter, Snapshot, SortSpec, TypeFilter};

use super::form::FormField;

#[derive(Clone)]
pub enum Msg {
    ShowForm,
    HideForm,
    EditField(FormField),
    Submit,
    ClearForm,
    FilterQuery(String),
    FilterType(TypeFilter),
    FilterPaid(PaidFilter),
    Sort(SortSpec),
    ClearFilters,
    View(String),
    Edit(String),
    Delete(String),
    Refresh,
    /// A store operation finished.
    Synced(Snapshot),
}
