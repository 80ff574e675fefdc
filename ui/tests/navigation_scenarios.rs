//! End-to-end walks through the navigation state machine, one per user-facing
//! scenario. Timer firings are simulated by redeeming the ticket the component
//! would hand to its deferred task.

use ui::components::navigation::{nav_categories, NavState};

#[test]
fn quick_re_entry_keeps_dropdown_open() {
    let mut nav = NavState::default();
    nav.pointer_enter("US Tools");
    assert_eq!(nav.active_dropdown(), Some("US Tools"));

    // Leave, then come back before the delay runs out.
    let ticket = nav.pointer_leave();
    nav.pointer_enter("US Tools");

    // The stale timer fires afterwards and must not flicker the dropdown.
    assert!(!nav.close_elapsed(ticket));
    assert_eq!(nav.active_dropdown(), Some("US Tools"));
}

#[test]
fn leaving_without_re_entry_closes_after_delay() {
    let mut nav = NavState::default();
    nav.pointer_enter("US Tools");
    let ticket = nav.pointer_leave();

    // Still open while the timer is pending.
    assert_eq!(nav.active_dropdown(), Some("US Tools"));
    assert!(nav.close_elapsed(ticket));
    assert_eq!(nav.active_dropdown(), None);
}

#[test]
fn moving_to_a_neighbour_trigger_switches_immediately() {
    let mut nav = NavState::default();
    nav.pointer_enter("US Tools");
    let ticket = nav.pointer_leave();
    nav.pointer_enter("UK Tools");

    assert_eq!(nav.active_dropdown(), Some("UK Tools"));
    assert!(!nav.close_elapsed(ticket));
    assert_eq!(nav.active_dropdown(), Some("UK Tools"));
}

#[test]
fn outside_press_dismisses_regardless_of_timer() {
    let mut nav = NavState::default();
    nav.pointer_enter("UK Tools");
    let ticket = nav.pointer_leave();

    assert!(nav.outside_click());
    assert_eq!(nav.active_dropdown(), None);

    // Re-open, then let the voided timer fire: it must not close the new one.
    nav.pointer_enter("Australia");
    assert!(!nav.close_elapsed(ticket));
    assert_eq!(nav.active_dropdown(), Some("Australia"));
}

#[test]
fn navigating_resets_drawer_and_accordion() {
    let mut nav = NavState::default();
    nav.route_changed("/");
    nav.toggle_mobile();
    nav.toggle_accordion("Canada");
    assert!(nav.mobile_open());
    assert_eq!(nav.expanded_accordion(), Some("Canada"));

    assert!(nav.route_changed("/ca/rrsp-calculator"));
    assert!(!nav.mobile_open());
    assert_eq!(nav.expanded_accordion(), None);
}

#[test]
fn accordion_sections_are_exclusive_across_all_categories() {
    let mut nav = NavState::default();
    let categories = nav_categories();
    for category in &categories {
        nav.toggle_accordion(&category.name);
        let expanded: Vec<_> = categories
            .iter()
            .filter(|c| nav.is_accordion_expanded(&c.name))
            .collect();
        assert_eq!(expanded.len(), 1);
        assert_eq!(expanded[0].name, category.name);
    }

    let last = &categories[categories.len() - 1].name;
    nav.toggle_accordion(last);
    assert_eq!(nav.expanded_accordion(), None);
}

#[test]
fn every_category_lists_its_region_calculators() {
    for category in nav_categories() {
        assert!(!category.calculators.is_empty(), "{} is empty", category.name);
        for link in &category.calculators {
            assert!(
                link.href.starts_with(&format!("{}/", category.href)),
                "{} does not live under {}",
                link.href,
                category.href
            );
        }
    }
}
