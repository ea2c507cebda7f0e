use crate::app::App;

mod app;
mod components;
mod config;
mod logger;
mod transport;

fn main() {
    logger::init();
    yew::Renderer::<App>::new().render();
}
