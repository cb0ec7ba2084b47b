use crate::components::links::LinksComponent;
use crate::config::ClientConfig;
use yew::{html, Component, Context, Html};

pub struct App {
    config: ClientConfig,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            config: ClientConfig::from_build_env(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <LinksComponent config={self.config.clone()} />
            </div>
        }
    }
}
