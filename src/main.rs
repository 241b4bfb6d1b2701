mod carousel;
mod certificates;
mod clock;
mod config;
mod content;
mod data;
mod error;
mod logging;
mod nav;
mod overlay;
mod reveal;
mod routes;
mod typing;

fn main() {
    logging::init();
    dioxus::launch(routes::App);
}
