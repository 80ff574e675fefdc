use dioxus::prelude::*;
use tracing::debug;

use super::NotFoundPanel;
use crate::components::{CalculatorCard, CardVariant};
use crate::core::badges::badge_style;
use crate::core::catalog;
use crate::core::region::Region;

#[component]
pub fn CalculatorDetail(region: String, slug: String) -> Element {
    let found = region
        .parse::<Region>()
        .ok()
        .and_then(|tag| catalog::find(tag, &slug));
    let Some(calculator) = found else {
        debug!(%region, %slug, "no calculator for route");
        return rsx! { NotFoundPanel { path: format!("/{region}/{slug}") } };
    };

    let related: Vec<_> = catalog::calculators_by_region(calculator.region)
        .into_iter()
        .filter(|other| other.slug != calculator.slug)
        .collect();
    let badge = badge_style(&calculator.category).classes();

    rsx! {
        section { class: "page page-calculator",
            span { class: "category-badge category-badge--inline {badge}", "{calculator.category}" }
            h1 { "{calculator.name}" }
            p { class: "page-calculator__description", "{calculator.description}" }

            div { class: "page-calculator__tool",
                p { "The interactive {calculator.short_name} tool renders here." }
            }

            if !related.is_empty() {
                aside { class: "page-calculator__related",
                    h2 { "More {calculator.region.display_name()} calculators" }
                    for other in related {
                        CalculatorCard {
                            key: "{other.slug}",
                            calculator: other.clone(),
                            variant: CardVariant::Compact,
                        }
                    }
                }
            }
        }
    }
}
