//! Category badge colours.

/// Background/text class pair for a category badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub bg: &'static str,
    pub text: &'static str,
}

impl BadgeStyle {
    pub fn classes(self) -> String {
        format!("{} {}", self.bg, self.text)
    }
}

pub const CATEGORY_BADGES: &[(&str, BadgeStyle)] = &[
    ("Home Buying", BadgeStyle { bg: "bg-blue-100", text: "text-blue-700" }),
    ("Property", BadgeStyle { bg: "bg-indigo-100", text: "text-indigo-700" }),
    ("Retirement", BadgeStyle { bg: "bg-green-100", text: "text-green-700" }),
    ("Taxes", BadgeStyle { bg: "bg-amber-100", text: "text-amber-700" }),
    ("Income", BadgeStyle { bg: "bg-emerald-100", text: "text-emerald-700" }),
    ("Health", BadgeStyle { bg: "bg-rose-100", text: "text-rose-700" }),
    ("Investing", BadgeStyle { bg: "bg-purple-100", text: "text-purple-700" }),
    ("Auto", BadgeStyle { bg: "bg-cyan-100", text: "text-cyan-700" }),
];

/// Neutral pair for categories missing from [`CATEGORY_BADGES`].
pub const NEUTRAL_BADGE: BadgeStyle = BadgeStyle {
    bg: "bg-slate-100",
    text: "text-slate-700",
};

pub fn badge_style(category: &str) -> BadgeStyle {
    CATEGORY_BADGES
        .iter()
        .find(|(label, _)| *label == category)
        .map(|(_, style)| *style)
        .unwrap_or(NEUTRAL_BADGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_category_uses_its_pair() {
        let style = badge_style("Taxes");
        assert_eq!(style.bg, "bg-amber-100");
        assert_eq!(style.text, "text-amber-700");
        assert_eq!(style.classes(), "bg-amber-100 text-amber-700");
    }

    #[test]
    fn unknown_category_is_neutral() {
        assert_eq!(badge_style("Crypto"), NEUTRAL_BADGE);
        assert_eq!(badge_style("taxes"), NEUTRAL_BADGE);
    }
}
