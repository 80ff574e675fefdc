use dioxus::prelude::*;
use tracing::debug;

use super::NotFoundPanel;
use crate::components::CalculatorCard;
use crate::core::catalog;
use crate::core::region::Region;

#[component]
pub fn RegionIndex(region: String) -> Element {
    let tag = match region.parse::<Region>() {
        Ok(tag) => tag,
        Err(err) => {
            debug!(%err, "region page requested for unsupported region");
            return rsx! { NotFoundPanel { path: format!("/{region}") } };
        }
    };
    let calculators = catalog::calculators_by_region(tag);

    rsx! {
        section { class: "page page-region",
            h1 { "{tag.display_name()} calculators" }
            p { "Every tool here uses {tag.display_name()} rates, thresholds and terminology." }
            div { class: "card-grid",
                for calculator in calculators {
                    CalculatorCard { key: "{calculator.slug}", calculator: calculator.clone() }
                }
            }
        }
    }
}
