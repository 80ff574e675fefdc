use dioxus::prelude::*;

use crate::core::site::SITE_NAME;

#[component]
pub fn Logo() -> Element {
    rsx! {
        span { class: "site-logo",
            span { class: "site-logo__spark", aria_hidden: "true" }
            span { class: "site-logo__mark", {SITE_NAME} }
            span { class: "site-logo__subtitle", "Calculators" }
        }
    }
}
