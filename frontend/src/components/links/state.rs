//! Component state for the links page.

use std::rc::Rc;

use links_common::{Link, LinkStore, Outcome, ViewProjector};

use super::form::FormState;
use crate::remote::HttpRemote;

pub struct LinksComponent {
    /// Shared with the futures spawned for each store operation, which may
    /// overlap.
    pub store: Rc<LinkStore<HttpRemote>>,

    /// Filter bar state; decides which projection `rows` holds.
    pub projector: ViewProjector,

    /// Rows currently rendered.
    pub rows: Vec<Link>,

    pub form: FormState,

    /// The record being edited. `Some` switches Submit to "Update".
    pub editing: Option<Link>,

    pub form_visible: bool,

    /// How the last finished operation reached the store.
    pub last_outcome: Option<Outcome>,

    /// Guard for the initial fetch.
    pub loaded: bool,
}

impl LinksComponent {
    pub fn new(store: LinkStore<HttpRemote>, projector: ViewProjector) -> Self {
        Self {
            store: Rc::new(store),
            projector,
            rows: Vec::new(),
            form: FormState::default(),
            editing: None,
            form_visible: false,
            last_outcome: None,
            loaded: false,
        }
    }

    /// Recomputes `rows` from the store and the filter bar.
    pub fn reproject(&mut self) {
        self.rows = self.projector.view(&self.store.links());
    }
}
