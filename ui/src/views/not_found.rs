use dioxus::prelude::*;

use crate::core::site::HOME_PATH;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        NotFoundPanel { path: path }
    }
}

#[component]
pub fn NotFoundPanel(path: String) -> Element {
    rsx! {
        section { class: "page page-not-found",
            h1 { "Page not found" }
            p { "Nothing lives at " code { "{path}" } "." }
            Link { to: HOME_PATH, class: "metric-btn-primary", "Back to all calculators" }
        }
    }
}
