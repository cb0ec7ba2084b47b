//! Links page: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and helpers.
//!
//! On first render the collection is fetched once; after that the table is
//! refreshed by every finished store operation.

use links_common::{LinkStore, ViewProjector};
use yew::prelude::*;

mod form;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::LinksProps;
pub use state::LinksComponent;

use crate::remote::HttpRemote;

impl Component for LinksComponent {
    type Message = Msg;
    type Properties = LinksProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = &ctx.props().config;
        LinksComponent::new(
            LinkStore::new(HttpRemote::new(config.api_base.clone())),
            ViewProjector::new(config.projection),
        )
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Refresh);
        }
    }
}
