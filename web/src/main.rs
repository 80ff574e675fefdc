use dioxus::prelude::*;
use tracing::{info, Level};

use ui::components::Navigation;
use ui::views::{Blog, CalculatorDetail, Home, PageNotFound, RegionIndex};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/blog")]
    Blog {},
    #[route("/:region")]
    RegionIndex { region: String },
    #[route("/:region/:slug")]
    CalculatorDetail { region: String, slug: String },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const MAIN_CSS_INLINE: &str = ui::theme::MAIN_CSS;

#[cfg(debug_assertions)]
const LOG_LEVEL: Level = Level::DEBUG;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: Level = Level::INFO;

fn main() {
    if let Err(err) = dioxus::logger::init(LOG_LEVEL) {
        eprintln!("[metric] logger already initialised: {err}");
    }
    info!(version = env!("CARGO_PKG_VERSION"), "launching metric web");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Shared theme is embedded from the ui crate.
        document::Title { "Metric Calculators" }
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// Mounts the shared `Navigation` above every page and feeds it the current
/// path, so `ui` never needs this crate's `Route` enum.
#[component]
fn SiteLayout() -> Element {
    let route = use_route::<Route>();

    rsx! {
        Navigation { current_path: route.to_string() }
        main { class: "site-main",
            Outlet::<Route> {}
        }
    }
}
