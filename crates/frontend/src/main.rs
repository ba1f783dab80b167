mod app;
mod components;
mod pages;
mod platform;
mod services;

use app::App;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    // std::time is unavailable on wasm32.
    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new());
    tracing_subscriber::registry().with(console).init();

    yew::Renderer::<App>::new().render();
}
