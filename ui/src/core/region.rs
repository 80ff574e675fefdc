//! Supported site regions and their path keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Us,
    Uk,
    Ca,
    Au,
}

/// Returned when a path segment does not name a supported region.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region `{0}`")]
pub struct UnknownRegion(pub String);

impl Region {
    /// Navigation order.
    pub const ALL: [Region; 4] = [Region::Us, Region::Uk, Region::Ca, Region::Au];

    /// Path segment used in URLs (`/us/...`).
    pub fn key(self) -> &'static str {
        match self {
            Region::Us => "us",
            Region::Uk => "uk",
            Region::Ca => "ca",
            Region::Au => "au",
        }
    }

    /// Label shown on the navigation trigger for this region.
    pub fn nav_label(self) -> &'static str {
        match self {
            Region::Us => "US Tools",
            Region::Uk => "UK Tools",
            Region::Ca => "Canada",
            Region::Au => "Australia",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Region::Us => "United States",
            Region::Uk => "United Kingdom",
            Region::Ca => "Canada",
            Region::Au => "Australia",
        }
    }

    pub fn landing_path(self) -> String {
        format!("/{}", self.key())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.key() == raw)
            .ok_or_else(|| UnknownRegion(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for region in Region::ALL {
            assert_eq!(region.key().parse::<Region>(), Ok(region));
        }
    }

    #[test]
    fn keys_are_case_sensitive() {
        // `/US` would otherwise render a page no nav trigger highlights.
        assert_eq!("UK".parse::<Region>(), Err(UnknownRegion("UK".into())));
        assert_eq!("Us".parse::<Region>(), Err(UnknownRegion("Us".into())));
    }

    #[test]
    fn unknown_key_is_a_typed_error() {
        let err = "nz".parse::<Region>().unwrap_err();
        assert_eq!(err, UnknownRegion("nz".into()));
        assert_eq!(err.to_string(), "unknown region `nz`");
    }

    #[test]
    fn landing_paths_use_the_key() {
        assert_eq!(Region::Ca.landing_path(), "/ca");
        assert_eq!(Region::Au.nav_label(), "Australia");
    }
}
