/*!
Theme selector lint.

Components in this crate reference CSS classes by string. This test fails fast
if the shared theme (`assets/theme/main.css`) drops a class the navigation or
the calculator cards rely on, including every badge colour the category table
can hand out.
*/

use ui::core::badges::{CATEGORY_BADGES, NEUTRAL_BADGE};
use ui::theme::MAIN_CSS;

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".metric-container",
    ".metric-btn-primary",
    ".metric-btn-block",
    ".page {",
    // Header
    ".site-header",
    ".site-nav__links",
    ".site-nav__link--active",
    ".site-nav__dropdown",
    ".site-nav__bridge",
    ".site-nav__panel",
    ".site-nav__item",
    ".site-nav__view-all",
    ".chevron--open",
    // Drawer
    ".site-drawer",
    ".site-drawer__backdrop",
    ".site-drawer__panel",
    ".site-drawer__toggle",
    ".site-drawer__links",
    // Cards
    ".calculator-card",
    ".category-badge",
    ".calculator-card-compact",
    ".calculator-card-horizontal",
    ".icon-tile",
    // Responsive breakpoints
    "@media (min-width: 1024px)",
    "@media (max-width: 720px)",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !MAIN_CSS.contains(*sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors in theme:\n{:?}",
        missing.len(),
        missing
    );
}

#[test]
fn every_badge_class_is_styled() {
    let styles = CATEGORY_BADGES
        .iter()
        .map(|(_, style)| *style)
        .chain(std::iter::once(NEUTRAL_BADGE));

    for style in styles {
        for class in [style.bg, style.text] {
            assert!(
                MAIN_CSS.contains(&format!(".{class} {{")),
                "badge class `{class}` has no rule in the theme"
            );
        }
    }
}

#[test]
fn theme_not_trivially_empty() {
    let non_ws_len = MAIN_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}
