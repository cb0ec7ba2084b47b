use crate::app::App;

mod app;
mod components;
mod config;
mod logger;
mod remote;

fn main() {
    logger::init(log::LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
