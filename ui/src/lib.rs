//! Shared UI crate for the Metric calculators site. Components, page views and
//! the static calculator catalog live here; platform crates only add routing.

pub mod core;
pub mod theme;
pub mod views;

pub mod components {
    mod icon;
    pub use icon::Icon;

    mod logo;
    pub use logo::Logo;

    // Calculator link card (components/calculator_card.rs)
    pub mod calculator_card;
    pub use calculator_card::{CalculatorCard, CardModel, CardVariant};

    // Header with dropdowns and the mobile drawer (components/navigation/)
    pub mod navigation;
    pub use navigation::Navigation;
}
