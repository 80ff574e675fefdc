//! Static calculator catalog.
//!
//! Records are immutable for the lifetime of the page. Lookups are total:
//! a region with no calculators (or an unparseable region key) yields an
//! empty list rather than an error.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::paths::calculator_href;
use super::region::Region;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculator {
    pub slug: String,
    pub name: String,
    pub short_name: String,
    pub category: String,
    pub description: String,
    pub icon: String,
    pub region: Region,
}

impl Calculator {
    pub fn href(&self) -> String {
        calculator_href(self.region.key(), &self.slug)
    }
}

struct Entry {
    region: Region,
    slug: &'static str,
    name: &'static str,
    short_name: &'static str,
    category: &'static str,
    icon: &'static str,
    description: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        region: Region::Us,
        slug: "mortgage-calculator",
        name: "Mortgage Calculator",
        short_name: "Mortgage",
        category: "Home Buying",
        icon: "Home",
        description: "Estimate your monthly payment including principal, interest, taxes, and insurance.",
    },
    Entry {
        region: Region::Us,
        slug: "401k-calculator",
        name: "401(k) Retirement Calculator",
        short_name: "401(k)",
        category: "Retirement",
        icon: "PiggyBank",
        description: "Project your 401(k) balance at retirement with employer match and annual raises.",
    },
    Entry {
        region: Region::Us,
        slug: "income-tax-calculator",
        name: "Federal Income Tax Calculator",
        short_name: "Income Tax",
        category: "Taxes",
        icon: "FileText",
        description: "Work out your federal tax bill and effective rate for the current tax year.",
    },
    Entry {
        region: Region::Us,
        slug: "auto-loan-calculator",
        name: "Auto Loan Calculator",
        short_name: "Auto Loan",
        category: "Auto",
        icon: "Car",
        description: "Compare loan terms and see the true cost of financing a new or used car.",
    },
    Entry {
        region: Region::Us,
        slug: "bmi-calculator",
        name: "BMI Calculator",
        short_name: "BMI",
        category: "Health",
        icon: "Activity",
        description: "Check your body mass index against standard adult ranges.",
    },
    Entry {
        region: Region::Uk,
        slug: "mortgage-calculator",
        name: "UK Mortgage Calculator",
        short_name: "Mortgage",
        category: "Home Buying",
        icon: "Home",
        description: "See monthly repayments for repayment and interest-only mortgages.",
    },
    Entry {
        region: Region::Uk,
        slug: "stamp-duty-calculator",
        name: "Stamp Duty Calculator",
        short_name: "Stamp Duty",
        category: "Property",
        icon: "Building",
        description: "Calculate Stamp Duty Land Tax for first-time buyers, home movers, and additional properties.",
    },
    Entry {
        region: Region::Uk,
        slug: "take-home-pay-calculator",
        name: "Take-Home Pay Calculator",
        short_name: "Take-Home Pay",
        category: "Income",
        icon: "DollarSign",
        description: "Find your net salary after Income Tax, National Insurance, and pension contributions.",
    },
    Entry {
        region: Region::Uk,
        slug: "pension-calculator",
        name: "Pension Calculator",
        short_name: "Pension",
        category: "Retirement",
        icon: "PiggyBank",
        description: "Estimate your workplace and private pension pot at retirement.",
    },
    Entry {
        region: Region::Ca,
        slug: "mortgage-calculator",
        name: "Canadian Mortgage Calculator",
        short_name: "Mortgage",
        category: "Home Buying",
        icon: "Home",
        description: "Estimate payments with semi-annual compounding and CMHC insurance.",
    },
    Entry {
        region: Region::Ca,
        slug: "rrsp-calculator",
        name: "RRSP Calculator",
        short_name: "RRSP",
        category: "Retirement",
        icon: "PiggyBank",
        description: "Project RRSP growth and the tax refund from your contributions.",
    },
    Entry {
        region: Region::Ca,
        slug: "income-tax-calculator",
        name: "Canadian Income Tax Calculator",
        short_name: "Income Tax",
        category: "Taxes",
        icon: "FileText",
        description: "Combine federal and provincial brackets to estimate your annual tax.",
    },
    Entry {
        region: Region::Au,
        slug: "mortgage-calculator",
        name: "Australian Home Loan Calculator",
        short_name: "Home Loan",
        category: "Home Buying",
        icon: "Home",
        description: "Work out repayments and total interest on an Australian home loan.",
    },
    Entry {
        region: Region::Au,
        slug: "superannuation-calculator",
        name: "Superannuation Calculator",
        short_name: "Super",
        category: "Investing",
        icon: "TrendingUp",
        description: "Forecast your super balance with employer contributions and fees.",
    },
    Entry {
        region: Region::Au,
        slug: "stamp-duty-calculator",
        name: "Stamp Duty Calculator",
        short_name: "Stamp Duty",
        category: "Property",
        icon: "Building",
        description: "Estimate state transfer duty and first home buyer concessions.",
    },
];

static CATALOG: Lazy<Vec<Calculator>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .map(|entry| Calculator {
            slug: entry.slug.to_string(),
            name: entry.name.to_string(),
            short_name: entry.short_name.to_string(),
            category: entry.category.to_string(),
            description: entry.description.to_string(),
            icon: entry.icon.to_string(),
            region: entry.region,
        })
        .collect()
});

pub fn all() -> &'static [Calculator] {
    &CATALOG
}

/// Calculators for `region`, in catalog order.
pub fn calculators_by_region(region: Region) -> Vec<Calculator> {
    CATALOG
        .iter()
        .filter(|calc| calc.region == region)
        .cloned()
        .collect()
}

/// Same as [`calculators_by_region`] but keyed by a raw path segment.
pub fn calculators_for_key(key: &str) -> Vec<Calculator> {
    key.parse::<Region>()
        .map(calculators_by_region)
        .unwrap_or_default()
}

pub fn find(region: Region, slug: &str) -> Option<Calculator> {
    CATALOG
        .iter()
        .find(|calc| calc.region == region && calc.slug == slug)
        .cloned()
}
