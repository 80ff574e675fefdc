use dioxus::prelude::*;

use super::categories::{nav_categories, NavCategory};
use super::controller::{use_nav_controller, NavController};
use crate::components::{Icon, Logo};
use crate::core::icons::IconSymbol;
use crate::core::paths::is_active;
use crate::core::site::{BLOG_PATH, CTA_LABEL, CTA_PATH, HOME_PATH, NAV_LINKS_CONTAINER_ID};

/// Site header: desktop links with hover dropdowns, and a slide-out drawer
/// with accordions on small screens.
///
/// The shell passes the router's current path in `current_path`; this crate
/// never touches the platform `Route` enum.
#[component]
pub fn Navigation(current_path: String) -> Element {
    let NavController {
        state: mut nav,
        on_enter,
        on_leave,
        on_toggle_accordion,
        ..
    } = use_nav_controller(current_path.clone());

    let categories = nav_categories();
    let state = nav.read().clone();
    let mobile_open = state.mobile_open();

    let home_class = desktop_link_class(is_active(&current_path, HOME_PATH));
    let blog_class = desktop_link_class(is_active(&current_path, BLOG_PATH));
    let mobile_home_class = mobile_link_class(is_active(&current_path, HOME_PATH));
    let mobile_blog_class = mobile_link_class(is_active(&current_path, BLOG_PATH));
    let menu_icon = if mobile_open {
        IconSymbol::Close
    } else {
        IconSymbol::Menu
    };

    rsx! {
        header { class: "site-header",
            div { class: "metric-container",
                nav { class: "site-nav",
                    Link { to: HOME_PATH, class: "site-nav__brand", Logo {} }

                    div { id: NAV_LINKS_CONTAINER_ID, class: "site-nav__links",
                        Link { to: HOME_PATH, class: "{home_class}", "Home" }
                        for category in categories.iter() {
                            DesktopCategory {
                                key: "{category.name}",
                                category: category.clone(),
                                open: state.is_dropdown_active(&category.name),
                                highlighted: is_active(&current_path, &category.href),
                                on_enter: on_enter,
                                on_leave: on_leave,
                            }
                        }
                        Link { to: BLOG_PATH, class: "{blog_class}", "Blog" }
                    }

                    div { class: "site-nav__cta",
                        Link { to: CTA_PATH, class: "metric-btn-primary", {CTA_LABEL} }
                    }

                    button {
                        r#type: "button",
                        class: "site-nav__menu-button",
                        aria_label: "Toggle menu",
                        aria_expanded: "{mobile_open}",
                        onclick: move |_| nav.write().toggle_mobile(),
                        Icon { symbol: menu_icon }
                    }
                }
            }

            if mobile_open {
                div { class: "site-drawer",
                    div {
                        class: "site-drawer__backdrop",
                        onclick: move |_| nav.write().close_mobile(),
                    }
                    aside { class: "site-drawer__panel",
                        div { class: "site-drawer__header",
                            span { class: "site-drawer__title", "Menu" }
                            button {
                                r#type: "button",
                                class: "site-drawer__close",
                                aria_label: "Close menu",
                                onclick: move |_| nav.write().close_mobile(),
                                Icon { symbol: IconSymbol::Close }
                            }
                        }
                        div { class: "site-drawer__body",
                            Link {
                                to: HOME_PATH,
                                class: "{mobile_home_class}",
                                "Home"
                            }
                            for category in categories.iter() {
                                MobileCategory {
                                    key: "{category.name}",
                                    category: category.clone(),
                                    expanded: state.is_accordion_expanded(&category.name),
                                    highlighted: is_active(&current_path, &category.href),
                                    on_toggle: on_toggle_accordion,
                                }
                            }
                            Link {
                                to: BLOG_PATH,
                                class: "{mobile_blog_class}",
                                "Blog"
                            }
                            div { class: "site-drawer__cta",
                                Link { to: CTA_PATH, class: "metric-btn-primary metric-btn-block", {CTA_LABEL} }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DesktopCategory(
    category: NavCategory,
    open: bool,
    highlighted: bool,
    on_enter: EventHandler<String>,
    on_leave: EventHandler<()>,
) -> Element {
    let name = category.name.clone();
    let trigger_class = if highlighted {
        "site-nav__link site-nav__trigger site-nav__link--active"
    } else {
        "site-nav__link site-nav__trigger"
    };

    rsx! {
        div {
            class: "site-nav__category",
            onmouseenter: move |_| on_enter.call(name.clone()),
            onmouseleave: move |_| on_leave.call(()),
            Link { to: category.href.clone(), class: "{trigger_class}",
                "{category.name}"
                Icon { symbol: IconSymbol::ChevronDown, class: chevron_class(open) }
            }

            if open {
                div { class: "site-nav__dropdown",
                    // Keeps the pointer inside the category while it crosses the gap.
                    div { class: "site-nav__bridge" }
                    div { class: "site-nav__panel",
                        div { class: "site-nav__panel-header",
                            span { "{category.name} Calculators" }
                        }
                        for link in category.calculators.iter() {
                            Link { key: "{link.href}", to: link.href.clone(), class: "site-nav__item",
                                span { "{link.name}" }
                                span { class: "site-nav__item-category", "{link.category}" }
                            }
                        }
                        div { class: "site-nav__panel-footer",
                            Link { to: category.href.clone(), class: "site-nav__view-all",
                                "View All"
                                Icon { symbol: IconSymbol::ChevronRight }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MobileCategory(
    category: NavCategory,
    expanded: bool,
    highlighted: bool,
    on_toggle: EventHandler<String>,
) -> Element {
    let name = category.name.clone();
    let button_class = if highlighted {
        "site-drawer__toggle site-drawer__toggle--active"
    } else {
        "site-drawer__toggle"
    };

    rsx! {
        div { class: "site-drawer__section",
            button {
                r#type: "button",
                class: button_class,
                aria_expanded: "{expanded}",
                onclick: move |_| on_toggle.call(name.clone()),
                span { "{category.name}" }
                Icon { symbol: IconSymbol::ChevronDown, class: chevron_class(expanded) }
            }

            if expanded {
                div { class: "site-drawer__links",
                    for link in category.calculators.iter() {
                        Link { key: "{link.href}", to: link.href.clone(), class: "site-drawer__item",
                            span { "{link.name}" }
                            span { class: "site-drawer__item-category", "{link.category}" }
                        }
                    }
                    Link { to: category.href.clone(), class: "site-drawer__view-all",
                        "View All {category.name}"
                        Icon { symbol: IconSymbol::ChevronRight }
                    }
                }
            }
        }
    }
}

fn desktop_link_class(active: bool) -> &'static str {
    if active {
        "site-nav__link site-nav__link--active"
    } else {
        "site-nav__link"
    }
}

fn mobile_link_class(active: bool) -> &'static str {
    if active {
        "site-drawer__link site-drawer__link--active"
    } else {
        "site-drawer__link"
    }
}

fn chevron_class(open: bool) -> &'static str {
    if open {
        "chevron chevron--open"
    } else {
        "chevron"
    }
}
