//! Navigation sections derived from the catalog.

use crate::core::catalog;
use crate::core::paths::calculator_href;
use crate::core::region::Region;

/// One calculator row inside a dropdown or accordion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub name: String,
    pub href: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavCategory {
    pub name: String,
    pub region_key: String,
    pub href: String,
    pub calculators: Vec<NavLink>,
}

impl NavCategory {
    /// Builds a section for `region_key`. An unrecognised key produces a
    /// section with no calculators.
    pub fn from_key(name: &str, region_key: &str) -> Self {
        let calculators = catalog::calculators_for_key(region_key)
            .into_iter()
            .map(|calc| NavLink {
                href: calculator_href(region_key, &calc.slug),
                name: calc.short_name,
                category: calc.category,
            })
            .collect();

        Self {
            name: name.to_string(),
            region_key: region_key.to_string(),
            href: format!("/{region_key}"),
            calculators,
        }
    }
}

/// Sections in navigation order, rebuilt from the catalog on every call.
pub fn nav_categories() -> Vec<NavCategory> {
    Region::ALL
        .into_iter()
        .map(|region| NavCategory::from_key(region.nav_label(), region.key()))
        .collect()
}
