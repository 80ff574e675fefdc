//! Site-wide constants shared by the navigation and page views.

pub const SITE_NAME: &str = "Metric";

pub const HOME_PATH: &str = "/";
pub const BLOG_PATH: &str = "/blog";

/// Destination of the "Get Started" call-to-action.
pub const CTA_PATH: &str = "/us/mortgage-calculator";
pub const CTA_LABEL: &str = "Get Started";

/// How long a dropdown stays open after the pointer leaves its trigger.
pub const DROPDOWN_CLOSE_DELAY_MS: u64 = 150;

/// DOM id of the desktop links container; presses outside it dismiss the
/// active dropdown.
pub const NAV_LINKS_CONTAINER_ID: &str = "site-nav-links";
