//! Icon symbol table.
//!
//! Calculator records carry an icon *key* (`"Home"`, `"PiggyBank"`, ...).
//! [`icon_for`] resolves that key to an [`IconSymbol`]; unknown keys fall back
//! to the generic calculator symbol so a bad catalog entry never breaks a card.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconSymbol {
    Home,
    PiggyBank,
    FileText,
    DollarSign,
    Activity,
    TrendingUp,
    Car,
    Building,
    Calculator,
    ArrowRight,
    ChevronDown,
    ChevronRight,
    Menu,
    Close,
}

/// Keys a calculator record may reference, with the symbol each resolves to.
pub const CALCULATOR_ICONS: &[(&str, IconSymbol)] = &[
    ("Home", IconSymbol::Home),
    ("PiggyBank", IconSymbol::PiggyBank),
    ("FileText", IconSymbol::FileText),
    ("DollarSign", IconSymbol::DollarSign),
    ("Activity", IconSymbol::Activity),
    ("TrendingUp", IconSymbol::TrendingUp),
    ("Car", IconSymbol::Car),
    ("Building", IconSymbol::Building),
];

pub const FALLBACK_ICON: IconSymbol = IconSymbol::Calculator;

pub fn icon_for(key: &str) -> IconSymbol {
    CALCULATOR_ICONS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, symbol)| *symbol)
        .unwrap_or(FALLBACK_ICON)
}

impl IconSymbol {
    pub fn glyph(self) -> &'static str {
        match self {
            IconSymbol::Home => "\u{1F3E0}",
            IconSymbol::PiggyBank => "\u{1F437}",
            IconSymbol::FileText => "\u{1F4C4}",
            IconSymbol::DollarSign => "$",
            IconSymbol::Activity => "\u{1F493}",
            IconSymbol::TrendingUp => "\u{1F4C8}",
            IconSymbol::Car => "\u{1F697}",
            IconSymbol::Building => "\u{1F3E2}",
            IconSymbol::Calculator => "\u{1F9EE}",
            IconSymbol::ArrowRight => "\u{2192}",
            IconSymbol::ChevronDown => "\u{25BE}",
            IconSymbol::ChevronRight => "\u{203A}",
            IconSymbol::Menu => "\u{2630}",
            IconSymbol::Close => "\u{2715}",
        }
    }

    /// Stable name used as a `data-icon` attribute.
    pub fn name(self) -> &'static str {
        match self {
            IconSymbol::Home => "home",
            IconSymbol::PiggyBank => "piggy-bank",
            IconSymbol::FileText => "file-text",
            IconSymbol::DollarSign => "dollar-sign",
            IconSymbol::Activity => "activity",
            IconSymbol::TrendingUp => "trending-up",
            IconSymbol::Car => "car",
            IconSymbol::Building => "building",
            IconSymbol::Calculator => "calculator",
            IconSymbol::ArrowRight => "arrow-right",
            IconSymbol::ChevronDown => "chevron-down",
            IconSymbol::ChevronRight => "chevron-right",
            IconSymbol::Menu => "menu",
            IconSymbol::Close => "close",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve_to_their_symbol() {
        assert_eq!(icon_for("PiggyBank"), IconSymbol::PiggyBank);
        assert_eq!(icon_for("Building"), IconSymbol::Building);
    }

    #[test]
    fn lookup_is_case_sensitive_and_falls_back() {
        assert_eq!(icon_for("home"), IconSymbol::Calculator);
        assert_eq!(icon_for(""), IconSymbol::Calculator);
    }
}
