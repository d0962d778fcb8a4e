mod components;

use components::app::App;

fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("failed to init logger");
    tracing::info!("starting pfmarket");
    dioxus::launch(App);
}
