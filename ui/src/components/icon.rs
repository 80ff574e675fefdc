use dioxus::prelude::*;

use crate::core::icons::IconSymbol;

#[component]
pub fn Icon(symbol: IconSymbol, #[props(default)] class: &'static str) -> Element {
    rsx! {
        span {
            class: "icon {class}",
            "data-icon": symbol.name(),
            aria_hidden: "true",
            {symbol.glyph()}
        }
    }
}
