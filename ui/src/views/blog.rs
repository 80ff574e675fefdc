use dioxus::prelude::*;

use crate::components::{CalculatorCard, CardVariant};
use crate::core::catalog;

#[component]
pub fn Blog() -> Element {
    let guides = catalog::all().iter().take(4).cloned().collect::<Vec<_>>();

    rsx! {
        section { class: "page page-blog",
            h1 { "Blog" }
            p { "Guides and explainers are on the way. Meanwhile, these tools answer the most common questions." }
            div { class: "card-list card-list--compact",
                for calculator in guides {
                    CalculatorCard {
                        key: "{calculator.href()}",
                        calculator: calculator.clone(),
                        variant: CardVariant::Compact,
                    }
                }
            }
        }
    }
}
