//! Link card for a single calculator.
//!
//! All three layouts point at `/{region}/{slug}`; they differ only in how much
//! of the record they show.

use dioxus::prelude::*;

use crate::components::Icon;
use crate::core::badges::{badge_style, BadgeStyle};
use crate::core::catalog::Calculator;
use crate::core::icons::{icon_for, IconSymbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Compact,
    Horizontal,
}

impl CardVariant {
    pub const ALL: [CardVariant; 3] = [
        CardVariant::Default,
        CardVariant::Compact,
        CardVariant::Horizontal,
    ];
}

/// Box shadow applied to a horizontal card while the pointer is over it.
pub const HORIZONTAL_HOVER_SHADOW: &str =
    "0 0 0 1px #2563eb, 0 4px 20px -4px rgba(37, 99, 235, 0.25)";

/// Everything a card layout derives from its record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub href: String,
    pub icon: IconSymbol,
    pub badge: BadgeStyle,
    pub variant: CardVariant,
}

impl CardModel {
    pub fn new(calculator: &Calculator, variant: CardVariant) -> Self {
        Self {
            href: calculator.href(),
            icon: icon_for(&calculator.icon),
            badge: badge_style(&calculator.category),
            variant,
        }
    }
}

#[component]
pub fn CalculatorCard(calculator: Calculator, #[props(default)] variant: CardVariant) -> Element {
    let model = CardModel::new(&calculator, variant);

    match variant {
        CardVariant::Default => rsx! { DefaultCard { calculator: calculator, model: model } },
        CardVariant::Compact => rsx! { CompactCard { calculator: calculator, model: model } },
        CardVariant::Horizontal => rsx! { HorizontalCard { calculator: calculator, model: model } },
    }
}

#[component]
fn DefaultCard(calculator: Calculator, model: CardModel) -> Element {
    let badge_classes = model.badge.classes();

    rsx! {
        Link { to: model.href.clone(), class: "calculator-card",
            span { class: "category-badge {badge_classes}", "{calculator.category}" }
            div { class: "calculator-card__head",
                div { class: "icon-tile icon-tile--lg",
                    Icon { symbol: model.icon }
                }
            }
            h3 { class: "calculator-card__title", "{calculator.name}" }
            p { class: "calculator-card__description", "{calculator.description}" }
            div { class: "calculator-card__action",
                "Calculate Now"
                Icon { symbol: IconSymbol::ArrowRight, class: "calculator-card__arrow" }
            }
        }
    }
}

#[component]
fn CompactCard(calculator: Calculator, model: CardModel) -> Element {
    rsx! {
        Link { to: model.href.clone(), class: "calculator-card-compact",
            div { class: "icon-tile icon-tile--sm",
                Icon { symbol: model.icon }
            }
            div { class: "calculator-card-compact__text",
                h4 { class: "calculator-card-compact__title", "{calculator.short_name}" }
                p { class: "calculator-card-compact__category", "{calculator.category}" }
            }
            Icon { symbol: IconSymbol::ArrowRight, class: "calculator-card-compact__arrow" }
        }
    }
}

#[component]
fn HorizontalCard(calculator: Calculator, model: CardModel) -> Element {
    let mut emphasized = use_signal(|| false);
    let shadow = if emphasized() {
        HORIZONTAL_HOVER_SHADOW
    } else {
        "none"
    };

    rsx! {
        div {
            class: "calculator-card-horizontal",
            style: "box-shadow: {shadow}",
            onmouseenter: move |_| emphasized.set(true),
            onmouseleave: move |_| emphasized.set(false),
            Link { to: model.href.clone(), class: "calculator-card-horizontal__link",
                div { class: "icon-tile icon-tile--lg",
                    Icon { symbol: model.icon }
                }
                div { class: "calculator-card-horizontal__body",
                    div { class: "calculator-card-horizontal__head",
                        h3 { class: "calculator-card-horizontal__title", "{calculator.name}" }
                        Icon { symbol: IconSymbol::ArrowRight, class: "calculator-card-horizontal__arrow" }
                    }
                    p { class: "calculator-card-horizontal__description", "{calculator.description}" }
                }
            }
        }
    }
}
