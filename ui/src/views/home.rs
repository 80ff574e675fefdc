use dioxus::prelude::*;

use crate::components::{CalculatorCard, CardVariant};
use crate::core::catalog::{self, Calculator};
use crate::core::region::Region;
use crate::core::site::CTA_PATH;

/// Calculators featured per region on the landing page.
const FEATURED_PER_REGION: usize = 2;

#[component]
pub fn Home() -> Element {
    let featured: Vec<Calculator> = Region::ALL
        .into_iter()
        .flat_map(|region| {
            catalog::calculators_by_region(region)
                .into_iter()
                .take(FEATURED_PER_REGION)
        })
        .collect();

    rsx! {
        section { class: "page page-home",
            div { class: "hero",
                h1 { class: "hero__title", "Financial calculators for every big decision" }
                p { class: "hero__tagline",
                    "Mortgages, retirement, taxes and more, tuned to the rules where you live."
                }
                Link { to: CTA_PATH, class: "metric-btn-primary", "Try the mortgage calculator" }
            }

            div { class: "page-home__regions",
                for region in Region::ALL {
                    Link {
                        key: "{region.key()}",
                        to: region.landing_path(),
                        class: "region-tile",
                        span { class: "region-tile__name", "{region.display_name()}" }
                        span { class: "region-tile__count",
                            "{catalog::calculators_by_region(region).len()} calculators"
                        }
                    }
                }
            }

            h2 { class: "section-title", "Popular calculators" }
            div { class: "card-list",
                for calculator in featured {
                    CalculatorCard {
                        key: "{calculator.href()}",
                        calculator: calculator.clone(),
                        variant: CardVariant::Horizontal,
                    }
                }
            }
        }
    }
}
